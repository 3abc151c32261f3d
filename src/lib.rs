//! Hexagonal grid geometry and weighted path search over editable
//! tile fields.

pub mod error;
pub mod field;
pub mod geo;
pub mod grid;
pub mod search;
