//! HTTP middleware.

pub mod cors;
pub mod fatal;
pub mod logging;
