//! Client for the backend auth endpoints.

mod client;

pub use client::AuthClient;
