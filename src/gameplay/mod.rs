mod camera;
pub use camera::*;

mod input;
pub use input::*;
