//! User domain
//!
//! Email-identified users, their validation rules and the repository trait
//! the identity store is built on.

mod entity;
mod repository;
mod validation;

pub use entity::{ExtraFields, NewUser, User, UserId};
pub use repository::UserRepository;
pub use validation::{
    normalize_email, require_email, validate_email, validate_name, validate_password,
    UserValidationError,
};
