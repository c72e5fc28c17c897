//! # Domain Layer
//!
//! Framework-free types and business rules for the quotation pipeline.
//!
//! Everything here is a transient request/response value: entities are
//! created at the start of a single orchestration call and discarded at
//! its end. Nothing is persisted and no cross-request state exists.

pub mod value_objects;
