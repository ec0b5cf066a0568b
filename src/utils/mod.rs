pub mod error;
pub mod filter;
pub mod logger;
