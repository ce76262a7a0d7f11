//! Password generation
//!
//! Builds a candidate by drawing the forced per-class minimums, filling the
//! remaining positions from the combined pool of enabled classes, and
//! shuffling the result. Candidates that equal a blacklist entry or contain
//! a forbidden substring are discarded and regenerated from scratch, up to
//! [`MAX_GENERATION_ATTEMPTS`] times.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, TryRngCore};

use crate::MAX_GENERATION_ATTEMPTS;
use crate::error::{PolicyError, Result};
use crate::policy::PasswordPolicy;
use crate::trace::Trace;

/// Character class alphabets, all ASCII.
pub(crate) const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub(crate) const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const NUMERIC: &[u8] = b"0123456789";
pub(crate) const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generate a password satisfying the policy.
///
/// Fails with [`PolicyError::ForcedExceedsLength`] when the forced minimums
/// cannot fit into the requested length, and with
/// [`PolicyError::Unsatisfiable`] when every candidate within the attempt
/// ceiling was rejected by the blacklist or a forbidden substring.
///
/// # Example
/// ```
/// use pwprofile::{generate, PasswordPolicy};
///
/// let policy = PasswordPolicy {
///     length: 12,
///     use_lower: true,
///     use_numeric: true,
///     force_numeric: 3,
///     ..Default::default()
/// };
/// let password = generate(&policy).unwrap();
/// assert_eq!(password.len(), 12);
/// assert!(password.chars().filter(char::is_ascii_digit).count() >= 3);
/// ```
pub fn generate(policy: &PasswordPolicy) -> Result<String> {
    generate_inner(policy, None)
}

/// Generate a password, recording a human-readable trace of the call.
///
/// The trace is observational only; the returned password is exactly what
/// [`generate`] would produce for the same policy.
pub fn generate_with_trace(policy: &PasswordPolicy, trace: &mut Trace) -> Result<String> {
    generate_inner(policy, Some(trace))
}

fn generate_inner(policy: &PasswordPolicy, mut trace: Option<&mut Trace>) -> Result<String> {
    let forced = policy.forced_total();
    if forced > policy.length {
        return Err(PolicyError::ForcedExceedsLength {
            forced,
            length: policy.length,
        });
    }

    // Entropy read failure is fatal; there is no acceptable fallback source.
    let mut rng = OsRng.unwrap_err();

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        if let Some(t) = trace.as_deref_mut() {
            t.record(format!("attempt {attempt}"));
        }

        let candidate = build_candidate(policy, &mut rng, trace.as_deref_mut());

        if let Some(entry) = policy.blacklist_match(&candidate) {
            if let Some(t) = trace.as_deref_mut() {
                t.record(format!("candidate rejected: blacklisted ({entry:?})"));
            }
            continue;
        }
        if let Some(entry) = policy.forbidden_substring(&candidate) {
            if let Some(t) = trace.as_deref_mut() {
                t.record(format!("candidate rejected: contains {entry:?}"));
            }
            continue;
        }
        return Ok(candidate);
    }

    Err(PolicyError::Unsatisfiable {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}

/// Build one candidate: forced draws per class, pool fill for the rest,
/// then a shuffle so forced characters don't cluster at the front.
fn build_candidate<R>(policy: &PasswordPolicy, rng: &mut R, mut trace: Option<&mut Trace>) -> String
where
    R: Rng + CryptoRng,
{
    // Fixed class order: lower, upper, numeric, special.
    let classes: [(&str, bool, usize, &[u8]); 4] = [
        ("lower", policy.use_lower, policy.force_lower, LOWER),
        ("upper", policy.use_upper, policy.force_upper, UPPER),
        ("numeric", policy.use_numeric, policy.force_numeric, NUMERIC),
        ("special", policy.use_special, policy.force_special, SPECIAL),
    ];

    let mut pool: Vec<u8> = Vec::new();
    let mut selected: Vec<u8> = Vec::with_capacity(policy.length);

    for (name, enabled, force, alphabet) in classes {
        if enabled {
            pool.extend_from_slice(alphabet);
        }
        for _ in 0..force {
            selected.push(draw(rng, alphabet));
        }
        if force > 0 {
            if let Some(t) = trace.as_deref_mut() {
                t.record(format!("forced {name}: {force}"));
            }
        }
    }

    if selected.len() < policy.length {
        if pool.is_empty() {
            // No class enabled: fill from the union of all four so the
            // password still reaches the requested length.
            pool = [LOWER, UPPER, NUMERIC, SPECIAL].concat();
            if let Some(t) = trace.as_deref_mut() {
                t.record("fill pool empty, using all classes".to_string());
            }
        }
        let remaining = policy.length - selected.len();
        for _ in 0..remaining {
            selected.push(draw(rng, &pool));
        }
        if let Some(t) = trace.as_deref_mut() {
            t.record(format!("filled {remaining} from pool of {} chars", pool.len()));
        }
    }

    selected.shuffle(rng);
    selected.iter().map(|&b| b as char).collect()
}

/// Uniform draw of one character. `random_range` resamples out-of-range
/// values instead of truncating, so small alphabets stay unbiased.
fn draw<R>(rng: &mut R, alphabet: &[u8]) -> u8
where
    R: Rng + CryptoRng,
{
    alphabet[rng.random_range(0..alphabet.len())]
}
