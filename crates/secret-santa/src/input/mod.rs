//! Reading participant and history files.

mod parser;
mod source;

pub use parser::{ParserConfig, RecordReader};
pub use source::SourceMetadata;
