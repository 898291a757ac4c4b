// file: src/fetcher/mod.rs
// description: search API client module exports
// reference: internal module structure

pub mod client;

pub use client::{SearchBackend, SerperClient, parse_response};
