//! Domains module containing business logic organized by bounded contexts.
//!
//! The tools domain is the only bounded context in this server: it owns the
//! registry, the parameter binder, the schema builder and the built-in tool
//! definitions.

pub mod tools;
