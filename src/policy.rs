//! Eligibility rules for private member renaming.
//!
//! The renamer reduces each candidate node to one of the shapes below and asks
//! [`RewritePolicy`] what to do with it. The policy never touches the AST.

use log::{debug, trace};
use oxc_syntax::identifier::is_identifier_name;

use crate::blacklist::Blacklist;
use crate::names::NameAllocator;

// ═══════════════════════════════════════════════════════════════════════════════
// CANDIDATE SHAPES
// ═══════════════════════════════════════════════════════════════════════════════

/// Where a member declaration lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Class field or accessor property.
    ClassProperty,
    /// Class method, getter, setter or constructor.
    ClassMethod,
    /// Property, method or accessor of an object literal.
    ObjectMember,
}

impl MemberKind {
    fn is_class_member(self) -> bool {
        matches!(self, MemberKind::ClassProperty | MemberKind::ClassMethod)
    }
}

/// The key of a declaration or the property of an access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape<'s> {
    /// `_foo` in `{ _foo: 1 }` or `this._foo`.
    Identifier(&'s str),
    /// `[_foo]`: evaluated as an expression.
    ComputedIdentifier,
    /// `'_foo'` or `['_foo']`.
    StringLiteral(&'s str),
    /// Numbers, templates, private names, arbitrary expressions.
    Other,
}

/// The object side of a member access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessObject {
    This,
    /// Target of `Foo.prototype.x = ...`.
    PrototypeExtension,
    Other,
}

/// What to put in the name slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    Keep,
    Identifier(String),
    StringLiteral(String),
}

impl Rewrite {
    pub fn is_keep(&self) -> bool {
        matches!(self, Rewrite::Keep)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// POLICY
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy)]
pub struct RewritePolicy<'c> {
    blacklist: &'c Blacklist,
    only_class_members: bool,
}

impl<'c> RewritePolicy<'c> {
    pub fn new(blacklist: &'c Blacklist, only_class_members: bool) -> Self {
        RewritePolicy {
            blacklist,
            only_class_members,
        }
    }

    /// Decides a class or object member declaration.
    pub fn declaration(
        &self,
        names: &mut NameAllocator,
        kind: MemberKind,
        key: KeyShape<'_>,
    ) -> Rewrite {
        let plain_identifier = matches!(key, KeyShape::Identifier(_));

        if self.only_class_members && !kind.is_class_member() && !plain_identifier {
            return Rewrite::Keep;
        }

        let name = match key {
            KeyShape::Identifier(name) | KeyShape::StringLiteral(name) => name,
            KeyShape::ComputedIdentifier | KeyShape::Other => return Rewrite::Keep,
        };

        self.rename(names, name, plain_identifier)
    }

    /// Decides a member access such as `this._foo`.
    pub fn access(
        &self,
        names: &mut NameAllocator,
        object: AccessObject,
        property: KeyShape<'_>,
    ) -> Rewrite {
        if self.only_class_members && object == AccessObject::Other {
            return Rewrite::Keep;
        }

        match property {
            KeyShape::Identifier(name) => self.rename(names, name, true),
            _ => Rewrite::Keep,
        }
    }

    fn rename(&self, names: &mut NameAllocator, name: &str, plain_identifier: bool) -> Rewrite {
        if self.blacklist.is_excluded(name) {
            trace!("keeping blacklisted member `{}`", name);
            return Rewrite::Keep;
        }

        let alias = names.alias(name);
        debug!("renaming member `{}` -> `{}`", name, alias);

        if plain_identifier && is_valid_identifier(&alias) {
            Rewrite::Identifier(alias)
        } else {
            Rewrite::StringLiteral(alias)
        }
    }
}

/// True when `name` has the lexical form of an identifier. Reserved words
/// are not rejected.
pub fn is_valid_identifier(name: &str) -> bool {
    is_identifier_name(name)
}
