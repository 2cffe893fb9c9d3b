//! Error types for proxy-mediated access.
//!
//! Three kinds, all synchronous and non-retryable: a construction argument
//! that is not an object, a member that does not exist on the wrapped type,
//! and an access that the visibility rule forbids. Failures during
//! registration leave the proxy's override tables unchanged.

use thiserror::Error;

use crate::types::{MemberKind, Visibility};

/// Convenience alias used throughout the proxy.
pub type OverloadResult<T> = Result<T, OverloadError>;

/// Errors raised by construction, registration, and dispatch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverloadError {
    /// The construction argument was not an object instance.
    #[error("expected an object instance, got {actual}")]
    InvalidArgument {
        /// Type name of the value that was supplied instead.
        actual: &'static str,
    },

    /// A referenced member is not declared on the wrapped type.
    #[error("{kind} '{name}' does not exist on type '{type_name}'")]
    NotFound {
        /// Whether a method or a field was looked up.
        kind: MemberKind,
        /// The member name that was referenced.
        name: String,
        /// The wrapped type's name.
        type_name: String,
    },

    /// A non-public member was accessed from a caller context other than
    /// the wrapped type's declaring type.
    #[error("{kind} '{name}' on type '{type_name}' is {visibility}")]
    AccessDenied {
        /// Whether a method or a field was accessed.
        kind: MemberKind,
        /// The member name that was accessed.
        name: String,
        /// The wrapped type's name.
        type_name: String,
        /// The member's declared visibility.
        visibility: Visibility,
    },
}

impl OverloadError {
    /// Create a `NotFound` error.
    pub fn not_found(kind: MemberKind, name: &str, type_name: &str) -> Self {
        OverloadError::NotFound {
            kind,
            name: name.to_owned(),
            type_name: type_name.to_owned(),
        }
    }

    /// Create an `AccessDenied` error.
    pub fn access_denied(
        kind: MemberKind,
        name: &str,
        type_name: &str,
        visibility: Visibility,
    ) -> Self {
        OverloadError::AccessDenied {
            kind,
            name: name.to_owned(),
            type_name: type_name.to_owned(),
            visibility,
        }
    }

    /// Check if this is a `NotFound` error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, OverloadError::NotFound { .. })
    }

    /// Check if this is an `AccessDenied` error.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, OverloadError::AccessDenied { .. })
    }
}
