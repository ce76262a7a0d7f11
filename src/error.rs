//! Error types for pwprofile

use thiserror::Error;

/// Main error type for password generation
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The forced per-class minimums cannot fit into the requested length
    #[error("sum of forced profile values exceeds requested length ({forced} > {length})")]
    ForcedExceedsLength { forced: usize, length: usize },

    /// No candidate survived the rejection lists within the attempt ceiling
    #[error("no password satisfying the policy was found after {attempts} attempts")]
    Unsatisfiable { attempts: usize },
}

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, PolicyError>;
