mod frame_clock;
pub use frame_clock::*;

mod path;
pub use path::*;

mod mesh_stats;
pub use mesh_stats::*;
