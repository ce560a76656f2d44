use anyhow::Result;
use winit::{
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::KeyCode,
    window::WindowId,
};

use super::{AppDesc, LabScene};
use crate::gameplay::{FrameInput, WinitInput};
use crate::renderer::HeadlessSurface;
use crate::util::FrameClock;
use crate::window::WindowState;

pub struct InitializedApp {
    window_state: WindowState,
    input: WinitInput,
    clock: FrameClock,
    scene: LabScene,
    surface: HeadlessSurface,
}

impl InitializedApp {
    pub fn new(event_loop: &ActiveEventLoop, desc: &AppDesc) -> Result<Self> {
        let window_state = WindowState::new(event_loop, &desc.window)?;
        let input = WinitInput::new(window_state.window());

        let mut surface = HeadlessSurface::new();
        let scene = LabScene::build(desc, &mut surface)?;
        log::debug!(
            "Uploaded {} meshes, {} bytes",
            surface.meshes().len(),
            surface.uploaded_bytes()
        );

        Ok(Self {
            window_state,
            input,
            clock: FrameClock::default(),
            scene,
            surface,
        })
    }

    pub fn on_terminate(&mut self, event_loop: &ActiveEventLoop) {
        log::info!(
            "Leaving lab {} after {} frames",
            self.scene.kind(),
            self.scene.frame_count()
        );
        event_loop.exit();
    }

    pub fn on_window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        self.input.on_window_event(&event);

        match event {
            // close the loop, therefore the window, when close button is clicked
            WindowEvent::CloseRequested => {
                self.on_terminate(event_loop);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && event.physical_key == KeyCode::Escape {
                    self.on_terminate(event_loop);
                }
            }

            // give the cursor back while another window has focus
            WindowEvent::Focused(focused) => {
                if self.scene.kind().uses_camera() && self.window_state.is_cursor_grabbed() != focused {
                    self.window_state.set_cursor_grab(focused);
                    self.window_state.set_cursor_visibility(!focused);
                }
            }

            WindowEvent::RedrawRequested => {
                // redraw also follows a resize, nothing to show while minimized
                if self.window_state.is_minimized() {
                    return;
                }
                self.on_redraw();
            }

            _ => {}
        }
    }

    fn on_redraw(&mut self) {
        if let Some(fps) = self.clock.tick() {
            log::debug!("fps: {:.2}", fps);
        }

        let size = self.window_state.window_size();
        let input = if self.scene.kind().uses_camera() {
            FrameInput::poll(&mut self.input, size)
        } else {
            FrameInput::poll_keys(&self.input, size)
        };

        self.scene
            .frame(self.clock.delta_time(), &input, &mut self.surface);
    }

    pub fn on_about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.window_state.window().request_redraw();
    }
}
