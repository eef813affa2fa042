//! Domain Layer - Business logic
//!
//! This layer contains:
//! - Value objects (RequiredPrefix, OffsetRange, SearchWindow, Ticket)
//! - Domain services (double-hash construction)
//! - The brute-force searcher and its report

pub mod entities;
pub mod searcher;
pub mod services;
pub mod value_objects;
