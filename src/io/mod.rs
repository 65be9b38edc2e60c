pub mod reader;
pub mod writer;

pub use reader::ReadPrimitives;
pub use writer::WritePrimitives;
