use std::fmt;

/// Client-side routes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/` - login
    Entry,
    /// `/dashboard`
    Dashboard,
    /// `/patient/:id`
    Patient(String),
    /// `/health-monitor`
    HealthMonitor,
    /// Anything else
    NotFound(String),
}

impl Route {
    /// Parse a location pathname. Trailing slashes and a query string are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Entry,
            "/dashboard" => Route::Dashboard,
            "/health-monitor" => Route::HealthMonitor,
            _ => match trimmed.strip_prefix("/patient/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Patient(id.to_string()),
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Entry => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Patient(id) => format!("/patient/{}", id),
            Route::HealthMonitor => "/health-monitor".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Requires an authenticated session
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Patient(_) | Route::HealthMonitor)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Entry);
        assert_eq!(Route::parse(""), Route::Entry);
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("/health-monitor?x=1"), Route::HealthMonitor);
        assert_eq!(Route::parse("/patient/3"), Route::Patient("3".into()));
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("/patient/"), Route::NotFound("/patient/".into()));
        assert_eq!(Route::parse("/patient/1/x"), Route::NotFound("/patient/1/x".into()));
        assert_eq!(Route::parse("/settings"), Route::NotFound("/settings".into()));
    }

    #[test]
    fn test_protected_routes() {
        assert!(!Route::Entry.is_protected());
        assert!(!Route::NotFound("/nope".into()).is_protected());
        assert!(Route::Dashboard.is_protected());
        assert!(Route::Patient("7".into()).is_protected());
        assert!(Route::HealthMonitor.is_protected());
    }

    #[test]
    fn test_path_matches_parse() {
        for route in [Route::Entry, Route::Dashboard, Route::HealthMonitor, Route::Patient("42".into())] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
