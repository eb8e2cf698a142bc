//! Domain Layer
//!
//! Entities, value objects and repository traits. No I/O here; the
//! infrastructure layer implements the traits.

pub mod entities;
pub mod repository;
pub mod value_objects;
