pub mod client;
pub mod models;
pub mod types;

pub use client::FalClient;
