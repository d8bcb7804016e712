use crate::controller::Action;

#[derive(Debug, Clone)]
struct KeyBinding {
    key: &'static str,
    action: Action,
}

const KEY_BINDINGS: [KeyBinding; 5] = [
    KeyBinding {
        key: " ",
        action: Action::Advance,
    },
    KeyBinding {
        key: "n",
        action: Action::Advance,
    },
    KeyBinding {
        key: "r",
        action: Action::Reset,
    },
    KeyBinding {
        key: "i",
        action: Action::ToggleIngredients,
    },
    KeyBinding {
        key: "s",
        action: Action::ToggleSteps,
    },
];

/// Resolves a keypress to a card action. Returns `None` for unbound keys
/// and for any key pressed while focus sits in a text input, so shortcuts
/// never fight with typing.
pub fn action_for_key(key: &str, in_text_input: bool) -> Option<Action> {
    if in_text_input {
        return None;
    }
    let key = key.to_ascii_lowercase();
    KEY_BINDINGS
        .iter()
        .find(|binding| binding.key == key)
        .map(|binding| binding.action.clone())
}

#[cfg(test)]
mod tests {
    use super::action_for_key;
    use crate::controller::Action;

    #[test]
    fn space_and_n_advance() {
        assert_eq!(action_for_key(" ", false), Some(Action::Advance));
        assert_eq!(action_for_key("n", false), Some(Action::Advance));
        assert_eq!(action_for_key("N", false), Some(Action::Advance));
    }

    #[test]
    fn r_resets_and_panel_keys_toggle() {
        assert_eq!(action_for_key("r", false), Some(Action::Reset));
        assert_eq!(action_for_key("i", false), Some(Action::ToggleIngredients));
        assert_eq!(action_for_key("s", false), Some(Action::ToggleSteps));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(action_for_key("x", false), None);
        assert_eq!(action_for_key("Escape", false), None);
    }

    #[test]
    fn text_input_focus_swallows_everything() {
        assert_eq!(action_for_key("n", true), None);
        assert_eq!(action_for_key(" ", true), None);
    }
}
