//! Random assignment generation under no-self and no-repeat constraints.

mod forbidden;
mod generator;

pub use forbidden::ForbiddenPairs;
pub use generator::{AssignmentGenerator, MAX_ATTEMPTS};
