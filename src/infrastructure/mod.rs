//! Infrastructure layer for registry storage.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! - [`persistence`] - In-memory registry implementation

pub mod persistence;
