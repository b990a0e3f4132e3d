//! Core domain layer for the staffdir service.
//!
//! Holds the person entity, the use-case interactor, and the trait surface
//! for the cache and record-store collaborators. Backend implementations
//! live in the server crate.

pub mod cache;
pub mod person;
pub mod storage;
pub mod usecase;
