//! # Private Member Renaming
//!
//! Rewrites conventionally private members (`_name`) of JavaScript and
//! TypeScript classes and object literals to short opaque aliases (`$1`, `$2`,
//! ...), so outside code cannot reach them by name.
//!
//! ## What gets renamed
//!
//! 1. **Declarations**: class fields, methods, getters, setters and accessor
//!    properties; object literal properties and methods; object destructuring keys.
//! 2. **Accesses**: `this._name`, and the target of `Foo.prototype._name = ...`.
//! 3. **Everything else is kept**: `obj._name` on arbitrary objects, `[_name]`
//!    computed keys, `#private` names, and names matching the blacklist.
//!
//! Setting `only_class_members` to false drops the restrictions of point 2
//! and lets string keys of object literals through as well.
//!
//! ## Blacklist
//!
//! The blacklist is one regex anchored at the end of the name. The built-in
//! entries keep `_super*`, `_extend*`, `__*`, `_` and every name without a
//! leading underscore.
//!
//! ## Aliases
//!
//! Within a run the same name always maps to the same alias, whether it was
//! first seen as a declaration or as an access. Runs restart at `$1` unless
//! `memoize` is set.

#[cfg(feature = "napi")]
mod binding;
mod blacklist;
mod error;
mod names;
mod options;
mod policy;
mod renamer;
mod transform;

#[cfg(test)]
mod transform_tests;

#[cfg(feature = "napi")]
pub use binding::{transform_private_members, PrivateMembersTransformer};
pub use blacklist::{Blacklist, ExclusionPattern};
pub use error::{Result, TransformError};
pub use names::NameAllocator;
pub use options::TransformOptions;
pub use policy::{AccessObject, KeyShape, MemberKind, Rewrite, RewritePolicy};
pub use renamer::{prototype_assignment_base, PrivateMemberRenamer};
pub use transform::{PrivateMembersTransform, TransformOutput, TransformReport};
