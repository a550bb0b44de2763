use std::collections::HashSet;

/// An authenticated user or service principal.
///
/// An `Identity` is produced by the host's authentication layer before
/// pipeline evaluation begins and is read-only to guards. Its claim set
/// is a flat collection of string tokens, each representing a granted
/// capability or attribute (e.g. `"admin"`, `"billing:read"`).
///
/// # Examples
///
/// ```
/// use guard_core::Identity;
///
/// let identity = Identity::new("alice", ["admin", "user"]);
///
/// assert_eq!(identity.name(), "alice");
/// assert!(identity.has_claim("admin"));
/// assert!(!identity.has_claim("superuser"));
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    name: String,
    claims: HashSet<String>,
}

impl Identity {
    /// Creates an identity with the given name and claim set.
    pub fn new(
        name: impl Into<String>,
        claims: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            claims: claims.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the principal's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full claim set.
    pub fn claims(&self) -> &HashSet<String> {
        &self.claims
    }

    /// Returns `true` if this identity holds the given claim.
    pub fn has_claim(&self, claim: &str) -> bool {
        self.claims.contains(claim)
    }

    /// Returns `true` if this identity holds every claim in `required`.
    ///
    /// An empty `required` set is trivially satisfied.
    pub fn has_all_claims<'a>(&self, required: impl IntoIterator<Item = &'a String>) -> bool {
        required.into_iter().all(|claim| self.claims.contains(claim))
    }

    /// Returns `true` if this identity holds at least one claim in `required`.
    ///
    /// An empty `required` set is never satisfied.
    pub fn has_any_claim<'a>(&self, required: impl IntoIterator<Item = &'a String>) -> bool {
        required.into_iter().any(|claim| self.claims.contains(claim))
    }
}
