pub mod document;
pub mod field;

pub use document::{AssignError, Document};
pub use field::{FieldKind, ALL_FIELDS};
