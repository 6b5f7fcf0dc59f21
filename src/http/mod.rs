//! HTTP client module shared by the charts API layer.

mod client;

pub use client::HttpClient;
