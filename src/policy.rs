//! Password policy definition
//!
//! A policy describes the desired password: total length, which character
//! classes contribute to the general fill pool, per-class forced minimums,
//! and the rejection lists checked against each candidate.

use serde::{Deserialize, Serialize};

/// `must_not_contain` entries shorter than this are not enforced.
const SUBSTRING_MIN_LENGTH: usize = 3;

/// Configuration for one password generation call.
///
/// The `use_*` flags decide which class alphabets fill positions beyond the
/// forced minimums; the `force_*` counts are honored independently, so a
/// class can be forced without being part of the fill pool. The default
/// policy is all zeroes: length 0, every class disabled, empty lists.
///
/// # Example
/// ```
/// use pwprofile::PasswordPolicy;
///
/// let policy = PasswordPolicy {
///     length: 16,
///     use_lower: true,
///     use_numeric: true,
///     force_numeric: 4,
///     blacklist: vec!["password".to_string()],
///     ..Default::default()
/// };
/// assert_eq!(policy.forced_total(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Total password length
    pub length: usize,
    /// Include lowercase letters (a-z) in the fill pool
    pub use_lower: bool,
    /// Minimum number of lowercase letters, drawn even when `use_lower` is off
    pub force_lower: usize,
    /// Include uppercase letters (A-Z) in the fill pool
    pub use_upper: bool,
    /// Minimum number of uppercase letters
    pub force_upper: usize,
    /// Include digits (0-9) in the fill pool
    pub use_numeric: bool,
    /// Minimum number of digits
    pub force_numeric: usize,
    /// Include special symbols in the fill pool
    pub use_special: bool,
    /// Minimum number of special symbols
    pub force_special: usize,
    /// Exact passwords that must never be returned (case-insensitive)
    pub blacklist: Vec<String>,
    /// Substrings the password must not contain (case-insensitive); entries
    /// of 2 characters or fewer are ignored
    pub must_not_contain: Vec<String>,
}

impl PasswordPolicy {
    /// Sum of the forced per-class minimums.
    ///
    /// Generation fails when this exceeds `length`.
    pub fn forced_total(&self) -> usize {
        self.force_lower + self.force_upper + self.force_numeric + self.force_special
    }

    /// Blacklist entry the candidate equals (ignoring case), if any.
    pub(crate) fn blacklist_match(&self, candidate: &str) -> Option<&str> {
        let lowered = candidate.to_lowercase();
        self.blacklist
            .iter()
            .find(|entry| entry.to_lowercase() == lowered)
            .map(String::as_str)
    }

    /// Forbidden substring found in the candidate (ignoring case), if any.
    pub(crate) fn forbidden_substring(&self, candidate: &str) -> Option<&str> {
        let lowered = candidate.to_lowercase();
        self.must_not_contain
            .iter()
            .filter(|entry| entry.chars().count() >= SUBSTRING_MIN_LENGTH)
            .find(|entry| lowered.contains(&entry.to_lowercase()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_zero_valued() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.length, 0);
        assert!(!policy.use_lower);
        assert!(!policy.use_upper);
        assert!(!policy.use_numeric);
        assert!(!policy.use_special);
        assert_eq!(policy.forced_total(), 0);
        assert!(policy.blacklist.is_empty());
        assert!(policy.must_not_contain.is_empty());
    }

    #[test]
    fn test_forced_total_sums_all_classes() {
        let policy = PasswordPolicy {
            force_lower: 1,
            force_upper: 2,
            force_numeric: 3,
            force_special: 4,
            ..Default::default()
        };
        assert_eq!(policy.forced_total(), 10);
    }

    #[test]
    fn test_blacklist_match_is_case_insensitive() {
        let policy = PasswordPolicy {
            blacklist: vec!["Password".to_string(), "letmein".to_string()],
            ..Default::default()
        };
        assert_eq!(policy.blacklist_match("PASSWORD"), Some("Password"));
        assert_eq!(policy.blacklist_match("LetMeIn"), Some("letmein"));
        assert_eq!(policy.blacklist_match("passw0rd"), None);
    }

    #[test]
    fn test_blacklist_is_exact_match_not_substring() {
        let policy = PasswordPolicy {
            blacklist: vec!["admin".to_string()],
            ..Default::default()
        };
        assert_eq!(policy.blacklist_match("admin1"), None);
        assert_eq!(policy.blacklist_match("Admin"), Some("admin"));
    }

    #[test]
    fn test_forbidden_substring_is_case_insensitive() {
        let policy = PasswordPolicy {
            must_not_contain: vec!["abc".to_string()],
            ..Default::default()
        };
        assert_eq!(policy.forbidden_substring("xxABCxx"), Some("abc"));
        assert_eq!(policy.forbidden_substring("xxacbxx"), None);
    }

    #[test]
    fn test_short_forbidden_substrings_are_ignored() {
        // Entries of 2 characters or fewer are never enforced.
        let policy = PasswordPolicy {
            must_not_contain: vec!["ab".to_string(), "x".to_string()],
            ..Default::default()
        };
        assert_eq!(policy.forbidden_substring("abx"), None);

        let policy = PasswordPolicy {
            must_not_contain: vec!["ab".to_string(), "abx".to_string()],
            ..Default::default()
        };
        assert_eq!(policy.forbidden_substring("zabxz"), Some("abx"));
    }

    #[test]
    fn test_policy_serde_round_trip() {
        let policy = PasswordPolicy {
            length: 12,
            use_lower: true,
            force_lower: 2,
            use_special: true,
            blacklist: vec!["hunter2".to_string()],
            must_not_contain: vec!["qwerty".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_string(&policy).unwrap();
        let back: PasswordPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, back);
    }
}
