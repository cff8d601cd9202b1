//! Result type definition for fanout operations.

use crate::error::Error;

/// The standard Result type for fanout operations.
///
/// All fallible operations in fanout return this type.
pub type Result<T> = std::result::Result<T, Error>;
