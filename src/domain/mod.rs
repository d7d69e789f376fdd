//! Contact field value objects.
//!
//! Every attribute of a contact is a thin wrapper around [`Field`]. `Phone`
//! and `Birthday` add validation that normalizes or rejects the raw input.
//! Validation returns a [`ValidationError`]; deciding what to do with it is
//! left to the caller.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, DEFAULT_BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
