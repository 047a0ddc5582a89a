//! Use-case services.
//!
//! # Responsibility
//! - Accept user intents at the presentation boundary.
//! - Keep projection and store details away from UI callers.

pub mod board_service;
