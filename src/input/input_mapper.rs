//! Input mapping from raw events to application actions
//!
//! Maps keyboard input to actions on the whole sandbox (export, import,
//! clear, exit). Spawn control keys (1/2/3, M, =/-, ]/[) are NOT mapped
//! here - they go directly to the SpawnController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions that act on the application rather than the spawn controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Write the current bodies to a new export file (E)
    Export,
    /// Import the most recent export file (I)
    ImportLatest,
    /// Remove every body (C)
    Clear,
}

/// Maps raw input events to application actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for key releases and for keys the mapper does not own
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyE => Some(InputAction::Export),
            KeyCode::KeyI => Some(InputAction::ImportLatest),
            KeyCode::KeyC => Some(InputAction::Clear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_spawn_keys_not_mapped() {
        // Handled by the spawn controller
        for key in [
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::KeyM,
            KeyCode::Equal,
            KeyCode::BracketLeft,
        ] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyE, ElementState::Pressed),
            Some(InputAction::Export)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyI, ElementState::Pressed),
            Some(InputAction::ImportLatest)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyC, ElementState::Pressed),
            Some(InputAction::Clear)
        );
    }
}
