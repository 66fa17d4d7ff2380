//! Infrastructure layer - storage backends, authentication and services

pub mod auth;
pub mod logging;
pub mod recipe;
pub mod services;
pub mod storage;
pub mod user;
