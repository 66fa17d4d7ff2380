//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod recipe;
pub mod router;
pub mod state;
pub mod types;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use middleware::RequireUser;
pub use router::create_router;
pub use state::AppState;
