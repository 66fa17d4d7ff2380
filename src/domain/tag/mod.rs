//! Tag domain

mod entity;
mod repository;

pub use entity::{NewTag, Tag, TagId};
pub use repository::{TagQuery, TagRepository};
