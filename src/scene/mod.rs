mod projection;
pub use projection::*;

mod crane;
pub use crane::*;

mod orbit;
pub use orbit::*;
