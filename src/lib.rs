//! # pwprofile
//!
//! Profile-based password generator library.
//!
//! A [`PasswordPolicy`] describes the desired password: total length, which
//! character classes fill it, per-class forced minimums, and rejection lists
//! (exact blacklist and forbidden substrings, both case-insensitive).
//! [`generate`] produces a password satisfying the policy, drawing every
//! character and the final shuffle from OS entropy.
//!
//! ## Example
//!
//! ```
//! use pwprofile::{generate, PasswordPolicy};
//!
//! let policy = PasswordPolicy {
//!     length: 10,
//!     use_lower: true,
//!     force_lower: 2,
//!     use_upper: true,
//!     force_upper: 2,
//!     use_numeric: true,
//!     force_numeric: 2,
//!     ..Default::default()
//! };
//!
//! let password = generate(&policy).unwrap();
//! assert_eq!(password.len(), 10);
//! ```

pub mod error;
pub mod generator;
pub mod policy;
pub mod trace;

// Re-export main types
pub use error::{PolicyError, Result};
pub use generator::{generate, generate_with_trace};
pub use policy::PasswordPolicy;
pub use trace::Trace;

/// Upper bound on full regeneration attempts when candidates keep hitting
/// the blacklist or a forbidden substring.
pub const MAX_GENERATION_ATTEMPTS: usize = 100;
