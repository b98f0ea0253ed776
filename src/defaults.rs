//! Default Configuration Values
//!
//! This module centralizes all default values used throughout twinfetch.
//! Having defaults in one place makes them easier to maintain, document, and adjust.

use std::time::Duration;

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default overall timeout for a single fetch
    ///
    /// Both the raw transport path and the retrying client path enforce this
    /// budget independently; a timeout on one path never cancels the other.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = "twinfetch/0.1.0";

    /// Default base endpoint of the profile service
    pub const BASE_URL: &str = "https://graph.microsoft.com/v1.0";
}

/// Resource defaults for the profile endpoint
pub mod resource {
    /// Path of the "my own profile" resource under the base endpoint
    pub const SELF_PROFILE: &str = "me";

    /// The single profile field both fetch paths consume
    pub const MAIL_FIELD: &str = "mail";
}

/// Retry defaults
pub mod retry {
    use super::*;

    /// Fixed delay between retry attempts
    pub const DELAY: Duration = Duration::from_secs(3);

    /// Maximum number of retries after the initial attempt
    pub const MAX_RETRIES: u32 = 3;
}
