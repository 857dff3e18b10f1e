//! JSON document I/O for graphs.

pub mod document;
pub mod reader;
pub mod writer;

pub use document::{EdgeRecord, GraphDocument};
pub use reader::GraphReader;
pub use writer::GraphWriter;
