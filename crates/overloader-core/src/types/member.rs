//! Member classification for introspection lookups.

use std::fmt;

/// What kind of member a name refers to on the wrapped type.
///
/// Methods and fields live in separate namespaces: the same name may be
/// declared as both, and every lookup states which one it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Method,
    Field,
}

impl MemberKind {
    /// Returns a human-readable name for this member kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Method => "method",
            MemberKind::Field => "field",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
