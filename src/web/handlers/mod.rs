//! HTTP request handlers for the sortviz web API.

pub mod algorithms;
pub mod random;
pub mod sort;
