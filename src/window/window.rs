use std::sync::Arc;

use winit::{
    dpi::{LogicalPosition, LogicalSize},
    event_loop::ActiveEventLoop,
    window::{CursorGrabMode, Fullscreen, Window},
};

use crate::error::{LabError, LabResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    Windowed,
    BorderlessFullscreen,
}

/// Window creation parameters for a lab.
#[derive(Debug, Clone)]
pub struct WindowStateDesc {
    /// Logical client-area width.
    pub width: f32,
    /// Logical client-area height.
    pub height: f32,
    /// Screen position of the window centre, platform default when `None`.
    pub position: Option<[f32; 2]>,
    pub title: String,
    pub resizable: bool,
    /// Cursor visibility while focused.
    pub cursor_visible: bool,
    /// Keep the cursor inside the window while focused, used by mouse-look.
    pub cursor_locked: bool,
    pub window_mode: WindowMode,
}

impl Default for WindowStateDesc {
    fn default() -> Self {
        WindowStateDesc {
            title: "labkit".to_string(),
            width: 800.0,
            height: 600.0,
            position: None,
            resizable: true,
            cursor_locked: false,
            cursor_visible: true,
            window_mode: WindowMode::Windowed,
        }
    }
}

impl WindowStateDesc {
    pub fn validate(&self) -> Result<(), String> {
        if self.width < 1.0 || self.height < 1.0 {
            return Err(format!(
                "window size {}x{} must be at least 1x1",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

/// The lab window plus the cursor state last requested for it.
pub struct WindowState {
    window: Arc<Window>,
    window_descriptor: WindowStateDesc,
}

impl WindowState {
    pub fn new(
        event_loop: &ActiveEventLoop,
        window_descriptor: &WindowStateDesc,
    ) -> LabResult<Self> {
        window_descriptor
            .validate()
            .map_err(LabError::WindowInitFailed)?;

        let mut winit_window_attributes = Window::default_attributes();

        winit_window_attributes = match window_descriptor.window_mode {
            WindowMode::BorderlessFullscreen => winit_window_attributes
                .with_fullscreen(Some(Fullscreen::Borderless(event_loop.primary_monitor()))),
            WindowMode::Windowed => {
                let WindowStateDesc {
                    width,
                    height,
                    position,
                    ..
                } = *window_descriptor;

                if let Some(position) = position {
                    winit_window_attributes = winit_window_attributes.with_position(
                        LogicalPosition::new(position[0] as f64, position[1] as f64),
                    );
                }
                winit_window_attributes.with_inner_size(LogicalSize::new(width, height))
            }
        }
        // set window to be invisible first to avoid flickering during window creation
        .with_visible(false)
        .with_resizable(window_descriptor.resizable)
        .with_title(&window_descriptor.title);

        let window = event_loop
            .create_window(winit_window_attributes)
            .map_err(|e| LabError::WindowInitFailed(e.to_string()))?;

        let res =
            window.set_cursor_grab(Self::get_cursor_grab_mode(window_descriptor.cursor_locked));
        if let Err(e) = res {
            log::warn!("Failed to grab cursor: {:?}", e);
        }

        window.set_cursor_visible(window_descriptor.cursor_visible);

        // set the window to visible
        // after it has been created
        window.set_visible(true);

        log::info!(
            "Created window {:?} ({}x{})",
            window_descriptor.title,
            window_descriptor.width,
            window_descriptor.height
        );

        Ok(Self {
            window: Arc::new(window),
            window_descriptor: window_descriptor.clone(),
        })
    }

    pub fn window(&self) -> Arc<Window> {
        self.window.clone()
    }

    /// Hides or shows the cursor, keeping the descriptor in sync.
    pub fn set_cursor_visibility(&mut self, cursor_visible: bool) {
        self.window_descriptor.cursor_visible = cursor_visible;
        self.window.set_cursor_visible(cursor_visible);
    }

    pub fn is_cursor_grabbed(&self) -> bool {
        self.window_descriptor.cursor_locked
    }

    /// Grabs or releases the cursor. A refused grab is logged and the window
    /// keeps working.
    pub fn set_cursor_grab(&mut self, cursor_locked: bool) {
        self.window_descriptor.cursor_locked = cursor_locked;
        let res = self
            .window
            .set_cursor_grab(Self::get_cursor_grab_mode(cursor_locked));
        if let Err(e) = res {
            log::warn!("Failed to grab cursor: {:?}", e);
        }
    }

    /// Physical size as `[width, height]`.
    pub fn window_size(&self) -> [u32; 2] {
        let size = self.window.inner_size();
        [size.width, size.height]
    }

    pub fn is_minimized(&self) -> bool {
        self.window.is_minimized().unwrap_or(false)
    }

    /// Platform grab mode for a locked cursor.
    fn get_cursor_grab_mode(locked: bool) -> CursorGrabMode {
        if !locked {
            return CursorGrabMode::None;
        }
        // macos: locked, elsewhere: confined
        if cfg!(target_os = "macos") {
            CursorGrabMode::Locked
        } else {
            CursorGrabMode::Confined
        }
    }
}
