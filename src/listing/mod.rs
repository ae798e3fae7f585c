pub mod filter;
pub mod generator;

pub use filter::filter_apartments;
pub use generator::{generate_listings, listings_for_seed, LISTING_COUNT};
