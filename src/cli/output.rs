//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::DigestError;

/// Map domain errors to a string for CLI output.
/// Keeps the route thin; extend with stable categories if needed.
pub fn map_error(e: &DigestError) -> String {
    e.to_string()
}
