use std::sync::Arc;

use glam::Vec2;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, WindowEvent},
    keyboard::PhysicalKey,
    window::Window,
};

use super::{InputSource, LabKey, PressedKeys};

/// Tracks keyboard and cursor state from winit window events.
pub struct WinitInput {
    window: Arc<Window>,
    cursor: Vec2,
    keys: PressedKeys,
}

impl WinitInput {
    pub fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();
        Self {
            window,
            // the first poll must not see a jump
            cursor: Vec2::new(size.width as f32, size.height as f32) / 2.0,
            keys: PressedKeys::default(),
        }
    }

    /// Feeds one window event, returns true if it was an input event.
    pub fn on_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let Some(key) = LabKey::from_key_code(code) else {
                    return false;
                };
                match event.state {
                    ElementState::Pressed => self.keys.insert(key),
                    ElementState::Released => self.keys.remove(key),
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                true
            }
            WindowEvent::Focused(false) => {
                self.keys = PressedKeys::default();
                true
            }
            _ => false,
        }
    }
}

impl InputSource for WinitInput {
    fn cursor_position(&self) -> Vec2 {
        self.cursor
    }

    fn is_key_pressed(&self, key: LabKey) -> bool {
        self.keys.contains(key)
    }

    fn recenter_cursor(&mut self, center: Vec2) {
        let res = self
            .window
            .set_cursor_position(PhysicalPosition::new(center.x as f64, center.y as f64));
        if let Err(e) = res {
            log::warn!("Failed to re-center cursor: {:?}", e);
        }
        self.cursor = center;
    }
}
