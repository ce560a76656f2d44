mod mesh;
pub use mesh::*;

mod circle;
pub use circle::*;

mod terrain;
pub use terrain::*;

mod shapes;
pub use shapes::*;

mod house;
pub use house::*;
