//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, hex encoding)
//! - Random source construction (clock-seeded or fixed seed)
//! - Environment variable parsing

pub mod crypto;
pub mod env;
pub mod rng;
