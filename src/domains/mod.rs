//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; each subdomain lives in its own module.

pub mod tools;
