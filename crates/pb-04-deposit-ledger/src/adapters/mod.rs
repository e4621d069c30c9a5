//! Adapters layer for the deposit ledger.

pub mod token;

pub use token::InMemoryWrappedToken;
