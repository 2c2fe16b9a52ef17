// ============================================================================
// HEALTH STATE - Health monitor form
// ============================================================================

use crate::models::HealthMetrics;
use crate::state::{ChangeNotifier, ReactiveState};

/// Form values. Starts empty on every visit; saved values are not read back.
#[derive(Clone)]
pub struct HealthState {
    pub metrics: ReactiveState<HealthMetrics>,
}

impl HealthState {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            metrics: ReactiveState::new(HealthMetrics::default(), notifier),
        }
    }
}
