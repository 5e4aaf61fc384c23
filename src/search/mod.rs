pub mod client;
pub mod pagination;
pub mod service;
pub mod topics;
pub mod types;

pub use client::DuckDuckGoClient;
pub use service::{SearchError, SearchService};
pub use types::*;
