mod desc;
pub use desc::*;

mod camera;
pub use camera::*;

mod movement;
pub use movement::*;

mod vectors;
pub use vectors::*;
