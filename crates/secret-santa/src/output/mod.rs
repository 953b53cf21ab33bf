//! Writing generated assignments.

mod writer;

pub use writer::{OutputFormat, default_output_path, write_assignments};
