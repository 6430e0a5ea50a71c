//! Registration, login and token listing.

pub mod service;

pub use service::SessionService;
