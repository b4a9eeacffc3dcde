//! Error types

use thiserror::Error;

/// Errors raised outside the rule-based path
///
/// Scanning and boundary resolution never fail; these cover configuration,
/// lexicon parsing and baseline segmenter setup.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A baseline segmenter could not be initialized
    #[error("Segmenter '{name}' failed to initialize: {reason}")]
    SegmenterInit {
        /// Requested segmenter name
        name: String,
        /// Why initialization failed
        reason: String,
    },

    /// Malformed abbreviation lexicon
    #[error("Lexicon error: {0}")]
    Lexicon(String),
}

/// Result type for fallible operations
pub type Result<T> = std::result::Result<T, Error>;
