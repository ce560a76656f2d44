mod surface;
pub use surface::*;

mod headless;
pub use headless::*;
