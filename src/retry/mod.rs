//! Retry module
//! - policy.rs: fixed-delay, hook-driven retry policy and executor

pub mod policy;

pub use policy::*;
