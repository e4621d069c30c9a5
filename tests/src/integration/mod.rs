//! # Integration Tests
//!
//! Cross-crate flows: oracle relay → account proof → storage proof → mint.

pub mod attestor_flow;
pub mod flows;
