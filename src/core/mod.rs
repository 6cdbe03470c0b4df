//! Core domain types
//!
//! This module contains the tagged value that stands in for untyped sequence elements.
//! Types here are pure and carry no I/O.

mod value;

pub use value::Value;
