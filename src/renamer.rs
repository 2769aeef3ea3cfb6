//! AST side of private member renaming.
//!
//! `PrivateMemberRenamer` walks an oxc program pre-order. Each candidate node is
//! reduced to a shape from [`crate::policy`], and when the policy answers with a
//! rewrite only the name slot is replaced. Values, bodies and member objects are
//! still visited afterwards.

use log::trace;
use oxc_allocator::{Allocator, CloneIn};
use oxc_ast::ast::*;
use oxc_ast::AstBuilder;
use oxc_ast_visit::walk_mut::{
    walk_accessor_property, walk_assignment_expression, walk_assignment_target_property,
    walk_binding_property, walk_member_expression, walk_method_definition,
    walk_object_property, walk_property_definition,
};
use oxc_ast_visit::VisitMut;
use oxc_span::GetSpan;

use crate::names::NameAllocator;
use crate::policy::{AccessObject, KeyShape, MemberKind, Rewrite, RewritePolicy};

/// Returns `Foo` when the assignment target is `Foo.prototype.<name>`.
pub fn prototype_assignment_base<'s>(expr: &'s AssignmentExpression<'_>) -> Option<&'s str> {
    let AssignmentTarget::StaticMemberExpression(member) = &expr.left else {
        return None;
    };
    let Expression::StaticMemberExpression(target) = &member.object else {
        return None;
    };
    if target.property.name != "prototype" {
        return None;
    }
    match &target.object {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

pub struct PrivateMemberRenamer<'a, 'r> {
    ast: AstBuilder<'a>,
    policy: RewritePolicy<'r>,
    names: &'r mut NameAllocator,
    pub renamed_declarations: usize,
    pub renamed_accesses: usize,
}

impl<'a, 'r> PrivateMemberRenamer<'a, 'r> {
    pub fn new(
        allocator: &'a Allocator,
        policy: RewritePolicy<'r>,
        names: &'r mut NameAllocator,
    ) -> Self {
        PrivateMemberRenamer {
            ast: AstBuilder::new(allocator),
            policy,
            names,
            renamed_declarations: 0,
            renamed_accesses: 0,
        }
    }

    fn alloc_name(&self, alias: &str) -> &'a str {
        self.ast.allocator.alloc_str(alias)
    }

    /// Renames a declaration key in place. Returns true when the key changed.
    fn rename_key(&mut self, kind: MemberKind, key: &mut PropertyKey<'a>, computed: bool) -> bool {
        let shape = match &*key {
            PropertyKey::StaticIdentifier(ident) if !computed => {
                KeyShape::Identifier(ident.name.as_str())
            }
            PropertyKey::StaticIdentifier(_) | PropertyKey::Identifier(_) => {
                KeyShape::ComputedIdentifier
            }
            PropertyKey::StringLiteral(lit) => KeyShape::StringLiteral(lit.value.as_str()),
            _ => KeyShape::Other,
        };

        let span = key.span();
        match self.policy.declaration(self.names, kind, shape) {
            Rewrite::Keep => false,
            Rewrite::Identifier(alias) => {
                let name = self.alloc_name(&alias);
                *key = PropertyKey::StaticIdentifier(
                    self.ast.alloc(self.ast.identifier_name(span, name)),
                );
                self.renamed_declarations += 1;
                true
            }
            Rewrite::StringLiteral(alias) => {
                let value = self.alloc_name(&alias);
                *key = PropertyKey::StringLiteral(
                    self.ast.alloc(self.ast.string_literal(span, value, None)),
                );
                self.renamed_declarations += 1;
                true
            }
        }
    }

    /// Renames `object.name` in place, or returns a computed replacement
    /// (`object['alias']`) when the alias cannot be written as an identifier.
    fn rename_access(
        &mut self,
        member: &mut StaticMemberExpression<'a>,
        object: AccessObject,
    ) -> Option<MemberExpression<'a>> {
        let property = KeyShape::Identifier(member.property.name.as_str());

        match self.policy.access(self.names, object, property) {
            Rewrite::Keep => None,
            Rewrite::Identifier(alias) => {
                member.property.name = self.alloc_name(&alias).into();
                self.renamed_accesses += 1;
                None
            }
            Rewrite::StringLiteral(alias) => {
                let value = self.alloc_name(&alias);
                let object = member.object.clone_in(self.ast.allocator);
                let property =
                    self.ast
                        .expression_string_literal(member.property.span, value, None);
                self.renamed_accesses += 1;
                Some(self.ast.member_expression_computed(
                    member.span,
                    object,
                    property,
                    member.optional,
                ))
            }
        }
    }

    /// Turns `{ _x } = obj` into `{ $1: _x } = obj` when `_x` is renamed.
    fn expand_shorthand_target(
        &mut self,
        shorthand: &AssignmentTargetPropertyIdentifier<'a>,
    ) -> Option<AssignmentTargetProperty<'a>> {
        let ident = &shorthand.binding;
        let mut key = PropertyKey::StaticIdentifier(
            self.ast.alloc(self.ast.identifier_name(ident.span, ident.name.clone())),
        );
        if !self.rename_key(MemberKind::ObjectMember, &mut key, false) {
            return None;
        }

        let binding = match &shorthand.init {
            Some(init) => {
                let target = AssignmentTarget::AssignmentTargetIdentifier(
                    self.ast.alloc(ident.clone_in(self.ast.allocator)),
                );
                let init = init.clone_in(self.ast.allocator);
                AssignmentTargetMaybeDefault::AssignmentTargetWithDefault(self.ast.alloc(
                    self.ast.assignment_target_with_default(shorthand.span, target, init),
                ))
            }
            None => AssignmentTargetMaybeDefault::AssignmentTargetIdentifier(
                self.ast.alloc(ident.clone_in(self.ast.allocator)),
            ),
        };

        Some(AssignmentTargetProperty::AssignmentTargetPropertyProperty(
            self.ast.alloc(self.ast.assignment_target_property_property(
                shorthand.span,
                key,
                binding,
                false,
            )),
        ))
    }
}

impl<'a, 'r> VisitMut<'a> for PrivateMemberRenamer<'a, 'r> {
    fn visit_object_property(&mut self, prop: &mut ObjectProperty<'a>) {
        if self.rename_key(MemberKind::ObjectMember, &mut prop.key, prop.computed) {
            // `{ _foo }` has to become `{ $1: _foo }`
            prop.shorthand = false;
        }
        walk_object_property(self, prop);
    }

    fn visit_binding_property(&mut self, prop: &mut BindingProperty<'a>) {
        if self.rename_key(MemberKind::ObjectMember, &mut prop.key, prop.computed) {
            prop.shorthand = false;
        }
        walk_binding_property(self, prop);
    }

    fn visit_assignment_target_property(&mut self, prop: &mut AssignmentTargetProperty<'a>) {
        let expanded = match prop {
            AssignmentTargetProperty::AssignmentTargetPropertyIdentifier(shorthand) => {
                self.expand_shorthand_target(shorthand)
            }
            AssignmentTargetProperty::AssignmentTargetPropertyProperty(property) => {
                let computed = property.computed;
                self.rename_key(MemberKind::ObjectMember, &mut property.name, computed);
                None
            }
        };
        if let Some(expanded) = expanded {
            *prop = expanded;
        }
        walk_assignment_target_property(self, prop);
    }

    fn visit_property_definition(&mut self, def: &mut PropertyDefinition<'a>) {
        self.rename_key(MemberKind::ClassProperty, &mut def.key, def.computed);
        walk_property_definition(self, def);
    }

    fn visit_accessor_property(&mut self, def: &mut AccessorProperty<'a>) {
        self.rename_key(MemberKind::ClassProperty, &mut def.key, def.computed);
        walk_accessor_property(self, def);
    }

    fn visit_method_definition(&mut self, def: &mut MethodDefinition<'a>) {
        self.rename_key(MemberKind::ClassMethod, &mut def.key, def.computed);
        walk_method_definition(self, def);
    }

    fn visit_member_expression(&mut self, expr: &mut MemberExpression<'a>) {
        let replacement = match expr {
            MemberExpression::StaticMemberExpression(member) => {
                let object = if matches!(member.object, Expression::ThisExpression(_)) {
                    AccessObject::This
                } else {
                    AccessObject::Other
                };
                self.rename_access(member, object)
            }
            _ => None,
        };
        if let Some(replacement) = replacement {
            *expr = replacement;
        }
        walk_member_expression(self, expr);
    }

    fn visit_assignment_expression(&mut self, expr: &mut AssignmentExpression<'a>) {
        let Some(base) = prototype_assignment_base(expr).map(str::to_string) else {
            walk_assignment_expression(self, expr);
            return;
        };
        trace!("assignment extends `{}.prototype`", base);

        let replacement = match &mut expr.left {
            AssignmentTarget::StaticMemberExpression(member) => {
                self.rename_access(member, AccessObject::PrototypeExtension)
            }
            _ => None,
        };
        if let Some(replacement) = replacement {
            expr.left = AssignmentTarget::from(SimpleAssignmentTarget::from(replacement));
        }

        // The target's name slot is settled; only its object is left to visit.
        match &mut expr.left {
            AssignmentTarget::StaticMemberExpression(member) => {
                self.visit_expression(&mut member.object)
            }
            AssignmentTarget::ComputedMemberExpression(member) => {
                self.visit_expression(&mut member.object)
            }
            _ => {}
        }
        self.visit_expression(&mut expr.right);
    }
}
