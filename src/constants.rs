//! Global Constants
//!
//! Centralized constants for request limits, endpoints and presentation.

/// Analysis request constants
pub mod request {
    /// Maximum number of characters of user content sent to the service
    pub const MAX_CONTENT_CHARS: usize = 10_000;

    /// Characters of a bad response kept in error messages
    pub const RESPONSE_PREVIEW_CHARS: usize = 200;
}

/// Provider defaults
pub mod provider {
    pub const GEMINI: &str = "gemini";
    pub const OPENAI: &str = "openai";

    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
    pub const GEMINI_DEFAULT_MODEL: &str = "gemini-3-flash-preview";

    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
    pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Environment variables consulted for a credential, in order
    pub const GEMINI_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];
    pub const OPENAI_KEY_VARS: &[&str] = &["OPENAI_API_KEY"];
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

    /// Connection timeout (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 30;
}

/// Score presentation constants
pub mod score {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    /// Lowest score graded "good"
    pub const GOOD_THRESHOLD: u8 = 80;

    /// Lowest score graded "average"
    pub const AVERAGE_THRESHOLD: u8 = 50;

    /// Number of tips shown next to the score
    pub const MAX_TIPS_SHOWN: usize = 3;
}

/// Export constants
pub mod export {
    /// File stem used for downloaded/exported results
    pub const FILE_STEM: &str = "seo-meta-tags";
}
