//! HTTP client for the exercise platform endpoints

pub mod client;

pub use client::ApiClient;
