mod fetch;
mod parse;
mod wire;

pub use fetch::{fetch_body, fetch_catalog, fetch_show};
pub use parse::{Episode, Podcast, RecordId, Season, Show, parse_catalog, parse_show};
