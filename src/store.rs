use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::SaveError;
use crate::models::ScheduleConfig;
use crate::validate;

// In-memory schedule, shared between the HTTP handlers and the ticker.
// Lives for the process only; nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    inner: Arc<RwLock<ScheduleConfig>>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScheduleConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Latest committed record.
    pub fn current(&self) -> ScheduleConfig {
        self.inner.read().clone()
    }

    /// Overwrite the whole record without validating it.
    pub fn replace(&self, config: ScheduleConfig) {
        *self.inner.write() = config;
        debug!("schedule replaced");
    }

    /// Validate then replace.
    ///
    /// On failure the previous record is kept and every bad field is returned.
    pub fn save(&self, config: ScheduleConfig) -> Result<ScheduleConfig, SaveError> {
        match validate::validate_schedule(&config) {
            Ok(_) => {
                self.replace(config.clone());
                info!(
                    year_start = %config.year_start,
                    year_end = %config.year_end,
                    day_start = %config.day_start,
                    day_end = %config.day_end,
                    "schedule saved"
                );
                Ok(config)
            }
            Err(errors) => {
                info!(count = errors.len(), "schedule rejected");
                Err(SaveError::Invalid(errors))
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        validate::validate_schedule(&self.inner.read()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    fn valid() -> ScheduleConfig {
        ScheduleConfig::new("2024-09-01", "2025-06-01", "08:00", "15:00")
    }

    #[test]
    fn starts_empty() {
        let store = ScheduleStore::new();
        assert_eq!(store.current(), ScheduleConfig::default());
        assert!(!store.is_configured());
    }

    #[test]
    fn replace_then_current_round_trips() {
        let store = ScheduleStore::new();
        store.replace(valid());
        assert_eq!(store.current(), valid());
    }

    #[test]
    fn replace_does_not_validate() {
        let store = ScheduleStore::new();
        let junk = ScheduleConfig::new("x", "", "99:99", "8:3");
        store.replace(junk.clone());
        assert_eq!(store.current(), junk);
    }

    #[test]
    fn save_is_all_or_nothing() {
        let store = ScheduleStore::with_config(valid());
        let mut bad = valid();
        bad.year_start = "2024-08-15".to_string();
        bad.day_end = "15:60".to_string();

        let err = store.save(bad).unwrap_err();
        assert_eq!(err.fields().len(), 1);
        assert_eq!(err.fields()[0].field, Field::DayEnd);
        assert_eq!(store.current(), valid());
    }

    #[test]
    fn save_commits_valid_record() {
        let store = ScheduleStore::new();
        let saved = store.save(valid()).unwrap();
        assert_eq!(saved, valid());
        assert_eq!(store.current(), valid());
        assert!(store.is_configured());
    }

    #[test]
    fn clones_share_state() {
        let store = ScheduleStore::new();
        let other = store.clone();
        other.replace(valid());
        assert_eq!(store.current(), valid());
    }
}
