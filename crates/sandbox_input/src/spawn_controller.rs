//! Spawn controller for mouse and keyboard input
//!
//! Controls:
//! - Right-click: spawn one body at the cursor
//! - Left button held + move: spawn one body per cursor-move event
//! - 1/2/3: circle/rectangle/triangle
//! - M: toggle static/dynamic
//! - =/-: grow/shrink size
//! - ]/[: raise/lower mass (down to engine default)

use sandbox_core::{BodyId, ShapeKind, SimulationHost, SpawnControls, SpawnRequest};
use sandbox_math::Vec2;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Smallest size the size keys will go down to
pub const MIN_SIZE: f32 = 5.0;

/// Spawn controller for handling input
pub struct SpawnController {
    /// Current control values, read afresh on every spawn
    pub controls: SpawnControls,

    // Mouse state
    dragging: bool,
    cursor: Option<Vec2>,

    // Configuration
    pub size_step: f32,
    pub mass_step: f32,
}

impl Default for SpawnController {
    fn default() -> Self {
        Self::new(SpawnControls::default())
    }
}

impl SpawnController {
    pub fn new(controls: SpawnControls) -> Self {
        Self {
            controls,
            dragging: false,
            cursor: None,
            size_step: 5.0,
            mass_step: 0.5,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key edited a control.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        if state != ElementState::Pressed {
            return false;
        }

        match key {
            KeyCode::Digit1 => self.controls.select_shape(ShapeKind::Circle),
            KeyCode::Digit2 => self.controls.select_shape(ShapeKind::Rectangle),
            KeyCode::Digit3 => self.controls.select_shape(ShapeKind::Triangle),
            KeyCode::KeyM => self.controls.toggle_mode(),
            KeyCode::Equal | KeyCode::NumpadAdd => {
                self.controls.adjust_size(self.size_step, MIN_SIZE)
            }
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                self.controls.adjust_size(-self.size_step, MIN_SIZE)
            }
            KeyCode::BracketRight => self.controls.adjust_mass(self.mass_step),
            KeyCode::BracketLeft => self.controls.adjust_mass(-self.mass_step),
            _ => return false,
        }
        log::debug!("Spawn controls: {}", self.controls.summary());
        true
    }

    /// Process mouse button input
    ///
    /// Left press/release starts/stops drag spawning. A right press spawns at
    /// the last known cursor position. Returns the spawned body, if any.
    pub fn process_mouse_button<T: SpawnTarget>(
        &mut self,
        button: MouseButton,
        state: ElementState,
        target: &mut T,
    ) -> Option<BodyId> {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left => {
                self.dragging = pressed;
                None
            }
            MouseButton::Right if pressed => {
                let position = self.cursor?;
                self.spawn_at(position, target)
            }
            _ => None,
        }
    }

    /// Process cursor movement (window coordinates in pixels)
    ///
    /// Every move while the left button is held spawns one body.
    pub fn process_cursor_moved<T: SpawnTarget>(
        &mut self,
        x: f64,
        y: f64,
        target: &mut T,
    ) -> Option<BodyId> {
        let position = Vec2::new(x as f32, y as f32);
        self.cursor = Some(position);
        if self.dragging {
            self.spawn_at(position, target)
        } else {
            None
        }
    }

    /// Forget the cursor and stop dragging (cursor left the window)
    pub fn process_cursor_left(&mut self) {
        self.cursor = None;
        self.dragging = false;
    }

    /// Spawn with the current control values
    ///
    /// Unknown shapes and unusable sizes spawn nothing.
    pub fn spawn_at<T: SpawnTarget>(&self, position: Vec2, target: &mut T) -> Option<BodyId> {
        let Some(request) = self.controls.request() else {
            log::debug!("Spawn skipped, controls not usable: {}", self.controls.summary());
            return None;
        };
        Some(target.spawn_body(&request, position))
    }

    /// Whether the left button is held
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Last cursor position inside the window
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Builder: set size step
    pub fn with_size_step(mut self, step: f32) -> Self {
        self.size_step = step;
        self
    }

    /// Builder: set mass step
    pub fn with_mass_step(mut self, step: f32) -> Self {
        self.mass_step = step;
        self
    }
}

/// Trait for spawn targets
/// Allows the controller to work with anything that can take new bodies
pub trait SpawnTarget {
    fn spawn_body(&mut self, request: &SpawnRequest, position: Vec2) -> BodyId;
}

impl SpawnTarget for SimulationHost {
    fn spawn_body(&mut self, request: &SpawnRequest, position: Vec2) -> BodyId {
        self.spawn(request, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox_core::{HostConfig, Viewport};

    fn host() -> SimulationHost {
        SimulationHost::new(HostConfig {
            viewport: Viewport::new(800.0, 600.0),
            ..Default::default()
        })
    }

    #[test]
    fn test_right_click_spawns_at_cursor() {
        let mut host = host();
        let mut controller = SpawnController::default();
        controller.process_cursor_moved(100.0, 120.0, &mut host);

        let id = controller
            .process_mouse_button(MouseButton::Right, ElementState::Pressed, &mut host)
            .expect("right click should spawn");

        let view = host.registry().get(id).unwrap();
        assert_eq!(view.position(), Vec2::new(100.0, 120.0));
        assert_eq!(host.registry().len(), 1);
    }

    #[test]
    fn test_right_release_does_nothing() {
        let mut host = host();
        let mut controller = SpawnController::default();
        controller.process_cursor_moved(100.0, 120.0, &mut host);
        controller.process_mouse_button(MouseButton::Right, ElementState::Released, &mut host);
        assert!(host.registry().is_empty());
    }

    #[test]
    fn test_right_click_without_cursor_does_nothing() {
        let mut host = host();
        let mut controller = SpawnController::default();
        let spawned =
            controller.process_mouse_button(MouseButton::Right, ElementState::Pressed, &mut host);
        assert!(spawned.is_none());
    }

    #[test]
    fn test_drag_spawns_per_move() {
        let mut host = host();
        let mut controller = SpawnController::default();

        // Moving without the button held spawns nothing
        controller.process_cursor_moved(10.0, 10.0, &mut host);
        assert!(host.registry().is_empty());

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed, &mut host);
        assert!(controller.is_dragging());
        for i in 0..5 {
            controller.process_cursor_moved(20.0 + i as f64 * 10.0, 50.0, &mut host);
        }
        assert_eq!(host.registry().len(), 5);

        controller.process_mouse_button(MouseButton::Left, ElementState::Released, &mut host);
        controller.process_cursor_moved(200.0, 50.0, &mut host);
        assert_eq!(host.registry().len(), 5);
    }

    #[test]
    fn test_cursor_left_stops_drag() {
        let mut host = host();
        let mut controller = SpawnController::default();
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed, &mut host);
        controller.process_cursor_left();
        assert!(!controller.is_dragging());
        assert!(controller.cursor().is_none());
    }

    #[test]
    fn test_unknown_shape_spawns_nothing() {
        let mut host = host();
        let mut controller = SpawnController::default();
        controller.controls.shape = "pentagon".to_string();
        controller.process_cursor_moved(100.0, 100.0, &mut host);
        let spawned =
            controller.process_mouse_button(MouseButton::Right, ElementState::Pressed, &mut host);
        assert!(spawned.is_none());
        assert!(host.registry().is_empty());
    }

    #[test]
    fn test_control_keys() {
        let mut controller = SpawnController::default();
        assert!(controller.process_keyboard(KeyCode::Digit2, ElementState::Pressed));
        assert_eq!(controller.controls.shape, "rectangle");
        assert!(controller.process_keyboard(KeyCode::Digit3, ElementState::Pressed));
        assert_eq!(controller.controls.shape, "triangle");

        assert!(controller.process_keyboard(KeyCode::KeyM, ElementState::Pressed));
        assert!(controller.controls.is_static());

        controller.controls.size = "40".to_string();
        controller.process_keyboard(KeyCode::Equal, ElementState::Pressed);
        assert_eq!(controller.controls.size, "45");
        controller.process_keyboard(KeyCode::Minus, ElementState::Pressed);
        assert_eq!(controller.controls.size, "40");

        controller.process_keyboard(KeyCode::BracketRight, ElementState::Pressed);
        assert_eq!(controller.controls.mass, "0.50");
        controller.process_keyboard(KeyCode::BracketLeft, ElementState::Pressed);
        assert_eq!(controller.controls.mass, "");
    }

    #[test]
    fn test_key_release_ignored() {
        let mut controller = SpawnController::default();
        assert!(!controller.process_keyboard(KeyCode::Digit2, ElementState::Released));
        assert_eq!(controller.controls.shape, "circle");
    }

    #[test]
    fn test_unbound_key_not_handled() {
        let mut controller = SpawnController::default();
        assert!(!controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
    }

    #[test]
    fn test_control_edit_applies_to_next_spawn() {
        let mut host = host();
        let mut controller = SpawnController::default();
        controller.process_cursor_moved(100.0, 100.0, &mut host);
        let first = controller
            .process_mouse_button(MouseButton::Right, ElementState::Pressed, &mut host)
            .unwrap();
        controller.process_keyboard(KeyCode::KeyM, ElementState::Pressed);
        let second = controller
            .process_mouse_button(MouseButton::Right, ElementState::Pressed, &mut host)
            .unwrap();

        assert_eq!(host.registry().get(first).unwrap().body.fill.as_str(), "blue");
        assert_eq!(host.registry().get(second).unwrap().body.fill.as_str(), "red");
    }
}
