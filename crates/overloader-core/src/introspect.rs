//! The introspection facility and the checked access surface.
//!
//! The proxy never embeds knowledge of any concrete wrapped type. Everything
//! it needs — member existence, visibility classification, raw field access
//! that bypasses visibility, and invocables for declared methods — comes
//! through the [`Introspect`] trait the host supplies with the instance.
//!
//! Method bodies produced by [`Introspect::method`] do not receive the
//! instance itself. They receive a receiver handle (`&mut dyn Access`) bound
//! to the proxy, so every self-access a body performs re-enters the checked
//! dispatch path instead of touching storage directly.

use std::rc::Rc;

use crate::error::OverloadError;
use crate::types::{MemberKind, Value, Visibility};

/// An invocable bound to a receiver handle.
///
/// Used both for original method bodies and for registered replacements.
pub type MethodFn = Rc<dyn Fn(&mut dyn Access, &[Value]) -> Result<Value, OverloadError>>;

/// Introspection over a wrapped type: existence, visibility, raw storage
/// access, and invocable production.
///
/// Implementations describe the type exactly as declared. `raw_get` and
/// `raw_set` bypass visibility on purpose; the proxy performs the check
/// before it reaches for them.
pub trait Introspect {
    /// The declaring type's name. Used for caller-context comparison and
    /// error messages.
    fn type_name(&self) -> &'static str;

    /// Visibility of the named member, or `None` if no such member is
    /// declared for that kind.
    fn member(&self, kind: MemberKind, name: &str) -> Option<Visibility>;

    /// Fetch a field's current value from real storage, bypassing
    /// visibility. `None` if the field is not declared.
    fn raw_get(&self, field: &str) -> Option<Value>;

    /// Store into a field's real storage, bypassing visibility. Returns
    /// `false` if the field is not declared.
    fn raw_set(&mut self, field: &str, value: Value) -> bool;

    /// Produce an invocable for a declared method. The body must perform all
    /// self-access through the receiver handle it is given.
    fn method(&self, name: &str) -> Option<MethodFn>;
}

/// The checked receiver surface handed to method bodies and replacements.
///
/// Every operation re-enters the proxy's dispatch with the handle's own
/// caller context, so overrides apply and visibility is re-enforced on
/// nested access.
pub trait Access {
    /// Invoke a method on the wrapped object through the proxy.
    fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, OverloadError>;

    /// Read a field through the proxy.
    fn get(&mut self, name: &str) -> Result<Value, OverloadError>;

    /// Write a field through the proxy.
    fn set(&mut self, name: &str, value: Value) -> Result<(), OverloadError>;
}
