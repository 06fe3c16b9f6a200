//! Reserved claim names
//!
//! Claim names owned by the token protocol. Developer claims may not use any
//! of them. The set is sorted once on first use and searched with a binary
//! search on every developer claim key of every issuance.

use once_cell::sync::Lazy;

/// Claim names reserved by the protocol, in declaration order (not sorted)
pub const RESERVED_CLAIM_NAMES: [&str; 16] = [
    "acr",
    "amr",
    "at_hash",
    "aud",
    "auth_time",
    "azp",
    "cnf",
    "c_hash",
    "exp",
    "firebase",
    "iat",
    "iss",
    "jti",
    "nbf",
    "nonce",
    "sub",
];

static RESERVED: Lazy<ReservedNames> = Lazy::new(|| ReservedNames::new(RESERVED_CLAIM_NAMES));

/// A sorted, immutable set of claim names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedNames {
    sorted: Vec<&'static str>,
}

impl ReservedNames {
    /// Build a set from arbitrary names; sorts byte-wise and drops duplicates
    pub fn new(names: impl IntoIterator<Item = &'static str>) -> Self {
        let mut sorted: Vec<&'static str> = names.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self { sorted }
    }

    /// Binary search for `name`. An empty set never matches.
    pub fn contains(&self, name: &str) -> bool {
        self.sorted.binary_search(&name).is_ok()
    }

    /// Number of names in the set
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// True when the set holds no names
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Names in lookup (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sorted.iter().copied()
    }
}

/// The process-wide reserved name set
pub fn reserved_names() -> &'static ReservedNames {
    &RESERVED
}

/// Whether `name` is a reserved claim name
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(name)
}
