//! # Blogroll Core
//!
//! The domain layer of the blogroll service: posts, ownership rules, token
//! verification and statistics. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
