//! Schema lint: layout patterns that compile but deserve a second look.
//!
//! ## Rules
//!
//! - **DoubleEncodedCount** (info): a `varLen` count reads a sibling that is also marshalled
//!   at its own position, so the wire carries the count twice and nothing checks that the
//!   two agree (see [`CodecOptions::strict_counts`](crate::codec::CodecOptions)).
//! - **CountAfterArray** (warning): the count sibling is declared after the array, so a reader
//!   of the wire sees the elements before the field that claims to count them.
//! - **UngatedCount** (warning): an `optional` `varLen` array whose count sibling is not
//!   gated by the same expression.
//!
//! The `mcdgen --lint` command prints these findings before generating code.

use crate::routine::CompiledSchema;
use crate::schema::Shape;

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Info,
}

/// Identifies which rule produced the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintRule {
    DoubleEncodedCount,
    CountAfterArray,
    UngatedCount,
}

impl LintRule {
    pub fn id(self) -> &'static str {
        match self {
            LintRule::DoubleEncodedCount => "double-encoded-count",
            LintRule::CountAfterArray => "count-after-array",
            LintRule::UngatedCount => "ungated-count",
        }
    }
}

/// A single lint message, located by struct and member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintMessage {
    pub structure: String,
    pub member: String,
    pub rule: LintRule,
    pub severity: Severity,
    pub message: String,
}

/// Run all rules. Messages follow struct and field declaration order.
pub fn lint(compiled: &CompiledSchema) -> Vec<LintMessage> {
    let mut out = Vec::new();
    for s in &compiled.resolved().structs {
        for (pos, f) in s.fields.iter().enumerate() {
            let count = match &f.shape {
                Shape::Var(count) => count,
                _ => continue,
            };
            for sibling in count.fields() {
                let (sib_pos, sib) = match s.position(sibling) {
                    Some(p) => (p, &s.fields[p]),
                    None => continue,
                };
                let mut push = |rule: LintRule, severity: Severity, message: String| {
                    out.push(LintMessage {
                        structure: s.name.clone(),
                        member: f.member.clone(),
                        rule,
                        severity,
                        message,
                    })
                };
                push(
                    LintRule::DoubleEncodedCount,
                    Severity::Info,
                    format!(
                        "length of `{}` is encoded twice: as its count prefix and as field `{}`",
                        f.member, sib.member
                    ),
                );
                if sib_pos > pos {
                    push(
                        LintRule::CountAfterArray,
                        Severity::Warning,
                        format!("count field `{}` is declared after array `{}`", sib.member, f.member),
                    );
                }
                if let Some(gate) = &f.optional {
                    if sib.optional.as_ref() != Some(gate) {
                        push(
                            LintRule::UngatedCount,
                            Severity::Warning,
                            format!(
                                "array `{}` is gated by {} but its count field `{}` is not",
                                f.member, gate, sib.member
                            ),
                        );
                    }
                }
            }
        }
    }
    out
}
