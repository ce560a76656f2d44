mod app;
pub use app::*;

mod initialized_app;

mod lab;
pub use lab::*;

mod lab_scene;
pub use lab_scene::*;
