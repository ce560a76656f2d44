use winit::{
    application::ApplicationHandler, event::WindowEvent, event_loop::ActiveEventLoop,
    window::WindowId,
};

use super::{initialized_app::InitializedApp, AppDesc};

pub struct App {
    desc: AppDesc,
    initialized: Option<InitializedApp>,
    init_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(desc: AppDesc) -> Self {
        Self {
            desc,
            initialized: None,
            init_error: None,
        }
    }

    /// The startup failure that stopped the event loop, if any.
    pub fn into_result(self) -> anyhow::Result<()> {
        match self.init_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// winit only delivers window events after `resumed`, so reaching this
    /// with neither an app nor a startup error is a bug and panics.
    fn initialized(&mut self) -> Option<&mut InitializedApp> {
        if self.initialized.is_none() && self.init_error.is_none() {
            panic!("App is not initialized");
        }
        self.initialized.as_mut()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.initialized.is_some() || self.init_error.is_some() {
            return;
        }
        match InitializedApp::new(event_loop, &self.desc) {
            Ok(initialized) => self.initialized = Some(initialized),
            Err(e) => {
                log::error!("Failed to start lab {}: {:#}", self.desc.lab, e);
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if let Some(initialized) = self.initialized() {
            initialized.on_window_event(event_loop, id, event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(initialized) = self.initialized() {
            initialized.on_about_to_wait(event_loop);
        }
    }
}
