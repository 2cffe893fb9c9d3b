//! Overload methods and properties of a wrapped object instance.
//!
//! [`Overloader`] is a transparent proxy around a single object. Callers
//! reach the object's fields and methods through the proxy, which
//! re-enforces the declared visibility rules (public/protected/private) and
//! consults its override tables before touching the real member. Overrides —
//! replacement method bodies and replacement property values — shadow the
//! original member for all proxy-mediated access without modifying the
//! wrapped instance.
//!
//! The wrapped type describes itself through the [`Introspect`] trait.
//! Method bodies never touch their instance directly: they receive a
//! receiver handle bound to the proxy, so nested self-access re-enters the
//! checked dispatch path. That is what lets a public method read a protected
//! sibling field while an outside caller is denied the same read.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use overloader::{
//!     Access, Introspect, MemberKind, MethodFn, Overloader, OverloadResult,
//!     Value, Visibility,
//! };
//!
//! struct Counter {
//!     count: i64,
//! }
//!
//! impl Introspect for Counter {
//!     fn type_name(&self) -> &'static str {
//!         "Counter"
//!     }
//!
//!     fn member(&self, kind: MemberKind, name: &str) -> Option<Visibility> {
//!         match (kind, name) {
//!             (MemberKind::Field, "count") => Some(Visibility::Public),
//!             (MemberKind::Method, "add") => Some(Visibility::Public),
//!             _ => None,
//!         }
//!     }
//!
//!     fn raw_get(&self, field: &str) -> Option<Value> {
//!         match field {
//!             "count" => Some(Value::Int(self.count)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn raw_set(&mut self, field: &str, value: Value) -> bool {
//!         match (field, value) {
//!             ("count", Value::Int(i)) => {
//!                 self.count = i;
//!                 true
//!             }
//!             _ => false,
//!         }
//!     }
//!
//!     fn method(&self, name: &str) -> Option<MethodFn> {
//!         match name {
//!             "add" => Some(Rc::new(
//!                 |_recv: &mut dyn Access, args: &[Value]| -> OverloadResult<Value> {
//!                     let a = args.first().and_then(Value::as_int).unwrap_or(0);
//!                     let b = args.get(1).and_then(Value::as_int).unwrap_or(0);
//!                     Ok(Value::Int(a + b))
//!                 },
//!             )),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut proxy = Overloader::new(Counter { count: 0 });
//! assert_eq!(proxy.call("add", &[Value::Int(5), Value::Int(5)]).unwrap(), Value::Int(10));
//!
//! proxy
//!     .method("add", |_recv, args| {
//!         let a = args.first().and_then(Value::as_int).unwrap_or(0);
//!         let b = args.get(1).and_then(Value::as_int).unwrap_or(0);
//!         Ok(Value::Int(a * b))
//!     })
//!     .unwrap();
//! assert_eq!(proxy.call("add", &[Value::Int(5), Value::Int(5)]).unwrap(), Value::Int(25));
//! ```

mod overloader;

pub use crate::overloader::{Overloader, Receiver};
pub use overloader_core::{
    Access, Caller, Introspect, MemberKind, MethodFn, ObjectRef, OverloadError, OverloadResult,
    Value, Visibility,
};

pub mod prelude {
    pub use crate::overloader::{Overloader, Receiver};
    pub use overloader_core::caller::Caller;
    pub use overloader_core::error::{OverloadError, OverloadResult};
    pub use overloader_core::introspect::{Access, Introspect, MethodFn};
    pub use overloader_core::types::{MemberKind, ObjectRef, Value, Visibility};
}
