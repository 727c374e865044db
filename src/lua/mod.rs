//! Lua source generation
//!
//! Two halves: the grid serializer that emits the data section, and the
//! metadata preserver that carries the trailing user-editable section
//! across regenerations.

pub mod metadata;
mod serializer;

pub use serializer::GridSerializer;
