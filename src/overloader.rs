//! The proxy itself: override tables, visibility enforcement, and the
//! dispatch/rebinding algorithm.
//!
//! Dispatch for every access runs the same sequence: resolve the caller
//! context, confirm the member is declared, enforce the visibility rule,
//! consult the override table, and only then reach the real member through
//! the introspection facility.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use overloader_core::{
    Access, Caller, Introspect, MemberKind, MethodFn, ObjectRef, OverloadError, OverloadResult,
    Value, Visibility,
};

/// Transparent proxy over a single wrapped object.
///
/// Holds the instance by shared handle (identity preserved, never cloned)
/// plus one override table per member kind. Both tables start empty and only
/// grow; re-registering a name replaces the previous entry.
///
/// Single-threaded by design: the proxy, its tables, and the wrapped object
/// are unsynchronized shared mutable state.
pub struct Overloader {
    /// The wrapped instance. Other holders of the same handle see writes
    /// made through the proxy to non-overridden fields.
    object: ObjectRef,
    /// Replacement method bodies by name.
    methods: FxHashMap<String, MethodFn>,
    /// Replacement property values by name.
    properties: FxHashMap<String, Value>,
}

impl Overloader {
    /// Wrap an instance, taking ownership and allocating the shared handle.
    pub fn new(object: impl Introspect + 'static) -> Self {
        Self::from_shared(Rc::new(RefCell::new(object)))
    }

    /// Wrap an already-shared instance. Existing holders keep direct access
    /// to the same object for the proxy's whole lifetime.
    pub fn from_shared(object: ObjectRef) -> Self {
        Self {
            object,
            methods: FxHashMap::default(),
            properties: FxHashMap::default(),
        }
    }

    /// Wrap a dynamic value. Fails with `InvalidArgument` unless the value
    /// is an object instance.
    pub fn wrap(value: Value) -> OverloadResult<Self> {
        match value {
            Value::Object(object) => Ok(Self::from_shared(object)),
            other => Err(OverloadError::InvalidArgument {
                actual: other.type_name(),
            }),
        }
    }

    /// Hand back the wrapped instance.
    pub fn object(&self) -> ObjectRef {
        Rc::clone(&self.object)
    }

    // === Registration ===

    /// Register a replacement body for a declared method.
    ///
    /// Fails with `NotFound` if the name is not a declared method; the
    /// tables are left unchanged in that case. The replacement shadows the
    /// original for all future proxy-mediated calls. When invoked it
    /// receives a receiver handle bound to this proxy with an external
    /// caller context, so its own member access stays checked.
    pub fn method<F>(&mut self, name: &str, f: F) -> OverloadResult<&mut Self>
    where
        F: Fn(&mut dyn Access, &[Value]) -> OverloadResult<Value> + 'static,
    {
        self.ensure_declared(MemberKind::Method, name)?;
        debug!(method = name, "method override registered");
        self.methods.insert(name.to_owned(), Rc::new(f));
        Ok(self)
    }

    /// Register a replacement value for a declared field.
    ///
    /// Fails with `NotFound` if the name is not a declared field. The real
    /// field on the wrapped instance is left untouched; reads and writes for
    /// this name stay in the shadow entry from now on.
    pub fn property(&mut self, name: &str, value: Value) -> OverloadResult<&mut Self> {
        self.ensure_declared(MemberKind::Field, name)?;
        debug!(field = name, "property override registered");
        self.properties.insert(name.to_owned(), value);
        Ok(self)
    }

    /// Whether an override is currently registered for the name.
    pub fn is_overridden(&self, kind: MemberKind, name: &str) -> bool {
        match kind {
            MemberKind::Method => self.methods.contains_key(name),
            MemberKind::Field => self.properties.contains_key(name),
        }
    }

    // === External surface ===

    /// Invoke a method as outside code.
    pub fn call(&mut self, name: &str, args: &[Value]) -> OverloadResult<Value> {
        self.call_from(Caller::External, name, args)
    }

    /// Read a field as outside code.
    pub fn get(&mut self, name: &str) -> OverloadResult<Value> {
        self.get_from(Caller::External, name)
    }

    /// Write a field as outside code. Returns the proxy for chaining.
    pub fn set(&mut self, name: &str, value: Value) -> OverloadResult<&mut Self> {
        self.set_from(Caller::External, name, value)?;
        Ok(self)
    }

    // === Dispatch with explicit caller context ===

    /// Invoke a method with an explicit caller context.
    ///
    /// 1. the member must be declared, else `NotFound`;
    /// 2. a non-public member requires the caller's declaring type to equal
    ///    the wrapped type's, else `AccessDenied`;
    /// 3. a registered override runs instead of the original, with an
    ///    external-context receiver;
    /// 4. otherwise the original body runs, rebound to a receiver whose
    ///    context is the wrapped type itself — its internal self-access
    ///    re-enters this dispatch with the declaring type as the caller.
    pub fn call_from(
        &mut self,
        caller: Caller,
        name: &str,
        args: &[Value],
    ) -> OverloadResult<Value> {
        let (type_name, visibility) = self.declared(MemberKind::Method, name)?;
        self.check_access(caller, MemberKind::Method, name, type_name, visibility)?;

        if let Some(replacement) = self.methods.get(name).map(Rc::clone) {
            trace!(method = name, "invoking override");
            let mut receiver = Receiver::new(self, Caller::External);
            return replacement(&mut receiver, args);
        }

        // The borrow on the object ends before the body runs, so the body's
        // re-entrant access through the receiver can borrow it again.
        let body = self
            .object
            .borrow()
            .method(name)
            .ok_or_else(|| OverloadError::not_found(MemberKind::Method, name, type_name))?;
        trace!(method = name, "invoking original");
        let mut receiver = Receiver::new(self, Caller::Type(type_name));
        body(&mut receiver, args)
    }

    /// Read a field with an explicit caller context. A shadow entry wins
    /// over the real storage.
    pub fn get_from(&mut self, caller: Caller, name: &str) -> OverloadResult<Value> {
        let (type_name, visibility) = self.declared(MemberKind::Field, name)?;
        self.check_access(caller, MemberKind::Field, name, type_name, visibility)?;

        if let Some(value) = self.properties.get(name) {
            return Ok(value.clone());
        }
        self.object
            .borrow()
            .raw_get(name)
            .ok_or_else(|| OverloadError::not_found(MemberKind::Field, name, type_name))
    }

    /// Write a field with an explicit caller context. Once a name is
    /// shadowed, writes stay in the shadow; otherwise the real storage is
    /// mutated and other holders of the instance see the write.
    pub fn set_from(&mut self, caller: Caller, name: &str, value: Value) -> OverloadResult<()> {
        let (type_name, visibility) = self.declared(MemberKind::Field, name)?;
        self.check_access(caller, MemberKind::Field, name, type_name, visibility)?;

        if let Some(shadow) = self.properties.get_mut(name) {
            *shadow = value;
            return Ok(());
        }
        if self.object.borrow_mut().raw_set(name, value) {
            Ok(())
        } else {
            Err(OverloadError::not_found(MemberKind::Field, name, type_name))
        }
    }

    // === Internals ===

    fn declared(
        &self,
        kind: MemberKind,
        name: &str,
    ) -> OverloadResult<(&'static str, Visibility)> {
        let object = self.object.borrow();
        let type_name = object.type_name();
        let visibility = object
            .member(kind, name)
            .ok_or_else(|| OverloadError::not_found(kind, name, type_name))?;
        Ok((type_name, visibility))
    }

    fn ensure_declared(&self, kind: MemberKind, name: &str) -> OverloadResult<()> {
        self.declared(kind, name).map(|_| ())
    }

    fn check_access(
        &self,
        caller: Caller,
        kind: MemberKind,
        name: &str,
        type_name: &'static str,
        visibility: Visibility,
    ) -> OverloadResult<()> {
        if visibility.is_public() || caller.declares(type_name) {
            return Ok(());
        }
        trace!(member = name, %visibility, ?caller, "access denied");
        Err(OverloadError::access_denied(kind, name, type_name, visibility))
    }
}

impl fmt::Debug for Overloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overloader")
            .field("type_name", &self.object.borrow().type_name())
            .field("method_overrides", &self.methods.len())
            .field("property_overrides", &self.properties.len())
            .finish()
    }
}

/// Receiver handle bound to an [`Overloader`] with a fixed caller context.
///
/// This is the value method bodies and replacements see as their receiver.
/// Everything it does goes back through the proxy's checked dispatch.
pub struct Receiver<'a> {
    proxy: &'a mut Overloader,
    caller: Caller,
}

impl<'a> Receiver<'a> {
    fn new(proxy: &'a mut Overloader, caller: Caller) -> Self {
        Self { proxy, caller }
    }

    /// The caller context this handle dispatches with.
    pub fn caller(&self) -> Caller {
        self.caller
    }
}

impl Access for Receiver<'_> {
    fn call(&mut self, name: &str, args: &[Value]) -> OverloadResult<Value> {
        self.proxy.call_from(self.caller, name, args)
    }

    fn get(&mut self, name: &str) -> OverloadResult<Value> {
        self.proxy.get_from(self.caller, name)
    }

    fn set(&mut self, name: &str, value: Value) -> OverloadResult<()> {
        self.proxy.set_from(self.caller, name, value)
    }
}
