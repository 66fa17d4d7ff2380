//! User infrastructure module
//!
//! Password hashing with Argon2, the Postgres user repository and the user
//! service that implements the identity factory, login and profile updates.

mod password;
mod postgres_repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher, UNUSABLE_PASSWORD};
pub use postgres_repository::PostgresUserRepository;
pub use service::{CreateUserRequest, UpdateProfileRequest, UserService};
