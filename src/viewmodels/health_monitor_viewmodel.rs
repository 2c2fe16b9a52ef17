// ============================================================================
// HEALTH MONITOR VIEWMODEL
// ============================================================================

use crate::config::HEALTH_METRICS_KEY;
use crate::error::{FormError, StorageError};
use crate::models::{HealthMetrics, Route};
use crate::services::save_json;
use crate::state::AppState;
use crate::viewmodels::RouterViewModel;

pub struct HealthMonitorViewModel {
    state: AppState,
}

impl HealthMonitorViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Empty form
    pub fn reset(&self) {
        self.state.health.metrics.set(HealthMetrics::default());
    }

    pub fn set_field(&self, key: &str, value: &str) -> Result<(), FormError> {
        let mut result = Ok(());
        self.state.health.metrics.update(|metrics| result = metrics.set(key, value));
        result
    }

    /// Overwrite the stored metrics with the whole form and go back
    pub fn save(&self) -> Result<(), StorageError> {
        let metrics = self.state.health.metrics.get();
        if let Err(e) = save_json(self.state.services.store.as_ref(), HEALTH_METRICS_KEY, &metrics) {
            log::error!("❌ [HEALTH] Could not save metrics: {}", e);
            self.state.toasts.error("Could not save health metrics");
            return Err(e);
        }

        log::info!("💾 [HEALTH] Metrics saved");
        self.state.toasts.success("Health metrics saved successfully");
        RouterViewModel::new(&self.state).navigate(Route::Dashboard);
        Ok(())
    }

    pub fn back_to_dashboard(&self) {
        RouterViewModel::new(&self.state).navigate(Route::Dashboard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SESSION_FLAG_KEY;
    use crate::services::{KeyValueStore, MemoryStore};
    use crate::testing::Harness;
    use std::rc::Rc;

    fn on_monitor(store: Rc<MemoryStore>) -> Harness {
        store.set_item(SESSION_FLAG_KEY, "true").unwrap();
        let h = Harness::with_store(store);
        let router = RouterViewModel::new(&h.state);
        router.start();
        router.navigate(Route::HealthMonitor);
        h
    }

    #[test]
    fn test_save_writes_whole_object_and_returns_to_dashboard() {
        let h = on_monitor(Rc::new(MemoryStore::new()));
        let vm = HealthMonitorViewModel::new(&h.state);
        vm.set_field("weight", "72.5").unwrap();
        vm.set_field("bodyFat", "18").unwrap();

        vm.save().unwrap();

        let raw = h.store.get_item(HEALTH_METRICS_KEY).unwrap().expect("saved");
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["weight"], "72.5");
        assert_eq!(json["bodyFat"], "18");
        assert_eq!(json["skeletalMass"], "");
        assert_eq!(json.as_object().unwrap().len(), 12);

        assert_eq!(h.state.router.current(), Route::Dashboard);
        let toast = h.state.toasts.visible().pop().unwrap();
        assert_eq!(toast.message, "Health metrics saved successfully");
    }

    #[test]
    fn test_save_overwrites_without_merge() {
        let store = Rc::new(MemoryStore::new());
        store
            .set_item(HEALTH_METRICS_KEY, r#"{"weight":"90","legacy":"x"}"#)
            .unwrap();
        let h = on_monitor(store);
        let vm = HealthMonitorViewModel::new(&h.state);
        vm.set_field("bmi", "23").unwrap();
        vm.save().unwrap();

        let raw = h.store.get_item(HEALTH_METRICS_KEY).unwrap().expect("saved");
        let saved: HealthMetrics = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved.weight, "");
        assert_eq!(saved.bmi, "23");
        assert!(!raw.contains("legacy"));
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let h = on_monitor(Rc::new(MemoryStore::new()));
        let vm = HealthMonitorViewModel::new(&h.state);
        assert_eq!(
            vm.set_field("cholesterol", "1"),
            Err(FormError::UnknownMetric("cholesterol".into()))
        );
    }

    #[test]
    fn test_form_starts_empty_on_each_visit() {
        let h = on_monitor(Rc::new(MemoryStore::new()));
        let vm = HealthMonitorViewModel::new(&h.state);
        vm.set_field("weight", "70").unwrap();
        vm.back_to_dashboard();
        RouterViewModel::new(&h.state).navigate(Route::HealthMonitor);
        assert_eq!(h.state.health.metrics.get(), HealthMetrics::default());
    }
}
