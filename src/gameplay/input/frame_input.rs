use glam::Vec2;

use super::{LabKey, PressedKeys};

/// Where per-frame input comes from.
///
/// Implementations own the cursor: after [`FrameInput::poll`] reads the
/// position it asks the source to move the cursor back to the center.
pub trait InputSource {
    /// Absolute cursor position in framebuffer pixels.
    fn cursor_position(&self) -> Vec2;

    fn is_key_pressed(&self, key: LabKey) -> bool;

    fn recenter_cursor(&mut self, center: Vec2);
}

/// Everything the per-frame logic needs to know about the user and the
/// framebuffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Framebuffer center minus cursor position, so moving the cursor left or
    /// up yields positive components.
    pub cursor_delta: Vec2,
    pub keys: PressedKeys,
    /// Width and height in pixels.
    pub framebuffer_size: [u32; 2],
}

impl FrameInput {
    pub fn idle(framebuffer_size: [u32; 2]) -> Self {
        Self {
            cursor_delta: Vec2::ZERO,
            keys: PressedKeys::default(),
            framebuffer_size,
        }
    }

    /// Samples the source, then re-centers its cursor for the next frame.
    pub fn poll(source: &mut impl InputSource, framebuffer_size: [u32; 2]) -> Self {
        let center = Vec2::new(framebuffer_size[0] as f32, framebuffer_size[1] as f32) / 2.0;
        let cursor_delta = center - source.cursor_position();
        let keys = PressedKeys::from_keys(
            LabKey::ALL
                .into_iter()
                .filter(|key| source.is_key_pressed(*key)),
        );
        source.recenter_cursor(center);
        Self {
            cursor_delta,
            keys,
            framebuffer_size,
        }
    }

    /// Samples only the keys and leaves the cursor alone, for labs that do
    /// not steer a camera.
    pub fn poll_keys(source: &impl InputSource, framebuffer_size: [u32; 2]) -> Self {
        Self {
            cursor_delta: Vec2::ZERO,
            keys: PressedKeys::from_keys(
                LabKey::ALL
                    .into_iter()
                    .filter(|key| source.is_key_pressed(*key)),
            ),
            framebuffer_size,
        }
    }

    /// Width over height, a zero height counts as one pixel.
    pub fn aspect_ratio(&self) -> f32 {
        self.framebuffer_size[0] as f32 / self.framebuffer_size[1].max(1) as f32
    }
}
