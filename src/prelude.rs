//! Prelude module for convenient imports
//!
//! ```rust
//! use twinfetch::prelude::*;
//! ```

pub use crate::auth::{EnvTokenProvider, StaticTokenProvider, TokenProvider};
pub use crate::client::ProfileClient;
pub use crate::error::{ClientError, ErrorCategory};
pub use crate::orchestrator::{Orchestrator, ProfileSource};
pub use crate::retry::{RetryDecision, RetryExecutor, RetryPolicy};
pub use crate::transport::DirectClient;
pub use crate::types::{
    FetchOutcome, HttpConfig, JoinResult, ProfileConsensus, ResponseInfo, UserProfile,
};
