use serde::{Deserialize, Serialize};

/// Serialized form of all persisted card state.
///
/// Field names match the wire format the card has always written, and every
/// field defaults so snapshots written by older versions (or by hand) keep
/// loading as new fields appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSnapshot {
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub ingredients_hidden: bool,
    #[serde(default)]
    pub steps_hidden: bool,
    #[serde(default)]
    pub tts: bool,
    #[serde(default)]
    pub checks: Vec<bool>,
    /// `-1` means the session has not started.
    #[serde(default = "default_step_index")]
    pub current_step_index: i32,
    #[serde(default)]
    pub timer: TimerSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub start_epoch: Option<i64>,
    #[serde(default)]
    pub paused_elapsed: i64,
    #[serde(default = "default_display")]
    pub display: String,
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self {
            running: false,
            start_epoch: None,
            paused_elapsed: 0,
            display: default_display(),
        }
    }
}

fn default_servings() -> u32 {
    1
}

fn default_step_index() -> i32 {
    -1
}

fn default_display() -> String {
    "00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::CardSnapshot;

    #[test]
    fn roundtrips_through_json() {
        let snapshot = CardSnapshot {
            servings: 8,
            ingredients_hidden: true,
            steps_hidden: false,
            tts: true,
            checks: vec![true, false, true],
            current_step_index: 2,
            timer: super::TimerSnapshot {
                running: true,
                start_epoch: Some(1_700_000_000_000),
                paused_elapsed: 65_000,
                display: "01:05".to_string(),
            },
        };
        let json = serde_json::to_string(&snapshot).expect("serialize");
        let loaded: CardSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn wire_format_uses_original_field_names() {
        let snapshot = CardSnapshot {
            servings: 4,
            ingredients_hidden: false,
            steps_hidden: false,
            tts: false,
            checks: Vec::new(),
            current_step_index: -1,
            timer: super::TimerSnapshot::default(),
        };
        let value = serde_json::to_value(&snapshot).expect("serialize");
        assert!(value.get("ingredientsHidden").is_some());
        assert!(value.get("currentStepIndex").is_some());
        assert!(value["timer"].get("pausedElapsed").is_some());
    }

    #[test]
    fn missing_and_unknown_fields_default_gracefully() {
        let loaded: CardSnapshot =
            serde_json::from_str(r#"{"servings": 6, "futureField": {"x": 1}}"#).expect("load");
        assert_eq!(loaded.servings, 6);
        assert_eq!(loaded.current_step_index, -1);
        assert!(!loaded.timer.running);
        assert_eq!(loaded.timer.display, "00:00");
    }

    #[test]
    fn empty_object_is_a_valid_snapshot() {
        let loaded: CardSnapshot = serde_json::from_str("{}").expect("load");
        assert_eq!(loaded.checks, Vec::<bool>::new());
        assert_eq!(loaded.servings, 1);
    }
}
