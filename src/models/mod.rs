pub mod apartment;
pub mod filter;
