//! Explicit caller context.
//!
//! The original design recovered the calling code's declaring type by
//! inspecting the call stack at dispatch time. Here the context is an
//! explicit value: outside code dispatches as [`Caller::External`], while the
//! proxy rebinds original method bodies to a context naming the wrapped
//! type, so their self-access passes the same check a same-type caller
//! would.

/// The declaring type of the code issuing an access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Caller {
    /// Code outside any declaring type (the default for the proxy's public
    /// surface).
    External,
    /// Code whose declaring type has the given name.
    Type(&'static str),
}

impl Caller {
    /// Whether this caller's declaring type is exactly `type_name`.
    ///
    /// The comparison is a flat name match: a subclass of the wrapped type
    /// does not count as the wrapped type, so it is denied protected access
    /// to its ancestor's members. Known limitation.
    pub fn declares(self, type_name: &str) -> bool {
        matches!(self, Caller::Type(t) if t == type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_declares_nothing() {
        assert!(!Caller::External.declares("Widget"));
    }

    #[test]
    fn type_context_matches_by_name() {
        assert!(Caller::Type("Widget").declares("Widget"));
        assert!(!Caller::Type("FancyWidget").declares("Widget"));
    }
}
