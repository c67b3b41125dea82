mod client;
mod parser;

pub use client::DioceseClient;
pub use parser::{maps_search_url, parse_results_table};
