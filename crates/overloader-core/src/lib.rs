//! Foundational types for the `overloader` proxy.
//!
//! This crate carries everything the proxy and its host environment share:
//! the opaque [`Value`] model, the [`Visibility`] classification, the
//! [`Introspect`] facility a wrapped type must provide, the checked
//! [`Access`] surface handed to method bodies, the explicit [`Caller`]
//! context, and the [`OverloadError`] hierarchy.
//!
//! The proxy itself lives in the root `overloader` package.

pub mod caller;
pub mod error;
pub mod introspect;
pub mod types;

pub use caller::Caller;
pub use error::{OverloadError, OverloadResult};
pub use introspect::{Access, Introspect, MethodFn};
pub use types::{MemberKind, ObjectRef, Value, Visibility};
