//! # nestor-entity
//!
//! Domain entity models for Nestor. Every struct in this crate represents
//! a database table row or the input needed to create one. Row types derive
//! `sqlx::FromRow`; owner references are skipped on serialization so they
//! never leave the service.

pub mod collection;
pub mod key;
pub mod token;
pub mod user;
