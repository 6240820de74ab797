//! Code generation, one module per generated concern.

pub mod accessors;
pub mod enum_def;
pub mod lookups;
pub mod predicates;
