mod keys;
pub use keys::*;

mod frame_input;
pub use frame_input::*;

mod winit_input;
pub use winit_input::*;
