//! Infrastructure layer
//!
//! This module contains the storage backing each service. Records live in an
//! in-memory store for the lifetime of the process.

pub mod memory_store;
