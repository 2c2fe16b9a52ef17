pub mod fingerprint;
pub mod header;
pub mod toasts;

pub use fingerprint::render_fingerprint;
pub use header::render_header;
pub use toasts::render_toasts;
