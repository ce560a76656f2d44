mod height_field;
pub use height_field::*;

mod reader;
pub use reader::*;

mod writer;
pub use writer::*;

mod noise_gen;
pub use noise_gen::*;
