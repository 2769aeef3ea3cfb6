//! Run lifecycle for private member renaming.
//!
//! A `PrivateMembersTransform` compiles its blacklist once and owns the name
//! allocator. Every run ends with [`PrivateMembersTransform::finish_run`], which
//! restarts the aliases at `$1` unless `memoize` is set.

use log::info;
use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_ast_visit::VisitMut;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::blacklist::Blacklist;
use crate::error::{Result, TransformError};
use crate::names::NameAllocator;
use crate::options::TransformOptions;
use crate::policy::RewritePolicy;
use crate::renamer::PrivateMemberRenamer;

/// What a single run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    pub renamed_declarations: usize,
    pub renamed_accesses: usize,
    /// Every alias known at the end of the run, in first-seen order. With
    /// `memoize` this includes aliases from earlier runs.
    pub aliases: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub code: String,
    pub report: TransformReport,
}

pub struct PrivateMembersTransform {
    options: TransformOptions,
    blacklist: Blacklist,
    names: NameAllocator,
}

impl PrivateMembersTransform {
    pub fn new(options: TransformOptions) -> Result<Self> {
        let blacklist = Blacklist::compile(&options.blacklist)?;
        Ok(PrivateMembersTransform {
            options,
            blacklist,
            names: NameAllocator::new(),
        })
    }

    pub fn from_json(options: &str) -> Result<Self> {
        Self::new(TransformOptions::from_json(options)?)
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    pub fn names(&self) -> &NameAllocator {
        &self.names
    }

    /// Renames private members of `program` in place and ends the run.
    pub fn transform_program<'a>(
        &mut self,
        allocator: &'a Allocator,
        program: &mut Program<'a>,
    ) -> TransformReport {
        let policy = RewritePolicy::new(&self.blacklist, self.options.only_class_members);
        let mut renamer = PrivateMemberRenamer::new(allocator, policy, &mut self.names);
        renamer.visit_program(program);

        let report = TransformReport {
            renamed_declarations: renamer.renamed_declarations,
            renamed_accesses: renamer.renamed_accesses,
            aliases: self
                .names
                .iter()
                .map(|(name, alias)| (name.to_string(), alias.to_string()))
                .collect(),
        };
        info!(
            "renamed {} declarations and {} accesses ({} aliases)",
            report.renamed_declarations,
            report.renamed_accesses,
            report.aliases.len()
        );

        self.finish_run();
        report
    }

    /// Parses `source`, renames private members and prints the result.
    pub fn transform_source(
        &mut self,
        source: &str,
        source_type: SourceType,
    ) -> Result<TransformOutput> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, source_type).parse();
        if !ret.errors.is_empty() {
            return Err(TransformError::Parse {
                errors: ret.errors.iter().map(|e| e.to_string()).collect(),
            });
        }

        let mut program = ret.program;
        let report = self.transform_program(&allocator, &mut program);
        let code = Codegen::new().build(&program).code;

        Ok(TransformOutput { code, report })
    }

    /// Clears the allocator unless aliases are memoized across runs.
    pub fn finish_run(&mut self) {
        if !self.options.memoize {
            self.names.reset();
        }
    }

    /// Clears the allocator regardless of `memoize`.
    pub fn reset(&mut self) {
        self.names.reset();
    }
}
