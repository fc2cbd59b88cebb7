//! Field validators for user-entered text

mod validators;

pub use validators::{EmailShapeValidator, FieldValidator, NonBlankValidator};
