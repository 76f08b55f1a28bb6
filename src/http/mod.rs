//! HTTP client module: single-attempt GET requests with status checking.

mod client;

pub use client::HttpClient;
