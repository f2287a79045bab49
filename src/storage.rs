use crate::filters::FilterPrefs;
use gloo_storage::{LocalStorage, Storage};
use log::warn;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "spotter_state";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredAppState {
    pub onboarding_complete: bool,
    pub prefs: FilterPrefs,
}

impl Default for StoredAppState {
    fn default() -> Self {
        Self {
            onboarding_complete: false,
            prefs: FilterPrefs::default(),
        }
    }
}

pub fn load_state() -> StoredAppState {
    match LocalStorage::get::<StoredAppState>(STORAGE_KEY) {
        Ok(state) => state,
        Err(err) => {
            warn!("Falling back to default app state: {}", err);
            StoredAppState::default()
        }
    }
}

pub fn save_state(state: &StoredAppState) {
    if let Err(err) = LocalStorage::set(STORAGE_KEY, state) {
        warn!("Failed to persist state: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_state_roundtrips_through_json() {
        let state = StoredAppState {
            onboarding_complete: true,
            prefs: FilterPrefs {
                include_casual: false,
                sort_by_proximity: true,
                ..FilterPrefs::default()
            },
        };
        let json = serde_json::to_string(&state).expect("serialize");
        let back: StoredAppState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: StoredAppState = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(back, StoredAppState::default());
        assert!(back.prefs.include_competitive);
    }
}
