//! Domain rules shared by the input models.

pub mod validation;

pub use validation::{Validate, ValidationErrors, Violation};
