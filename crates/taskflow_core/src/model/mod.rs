//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the entity records shared by every view projection.
//! - Keep status and priority as closed vocabularies.
//!
//! # Invariants
//! - Entities reference each other by id only; no entity owns another.
//! - Every entity id is stable for the process lifetime.

pub mod meeting;
pub mod project;
pub mod task;
pub mod user;
