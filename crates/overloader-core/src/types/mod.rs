//! Shared type definitions: values, member kinds, and visibility.

pub mod member;
pub mod value;
pub mod visibility;

pub use member::MemberKind;
pub use value::{ObjectRef, Value};
pub use visibility::Visibility;
