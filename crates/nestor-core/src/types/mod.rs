//! Core type definitions used across the Nestor workspace.

pub mod id;

pub use id::*;
