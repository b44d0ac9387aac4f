//! HTTP client layer — `CoinsHttp`.

pub mod client;

pub use client::CoinsHttp;
