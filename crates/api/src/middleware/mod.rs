//! Request middleware.
//!
//! - [`auth`] -- JWT bearer-token extractor for authenticated handlers.

pub mod auth;
