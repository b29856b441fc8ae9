//! Input and style validation.

mod validate;

pub use validate::*;
