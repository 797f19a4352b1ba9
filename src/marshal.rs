//! Marshal pass: per struct, the ordered steps that serialize an instance.
//!
//! For each field, in declared order:
//! 1. `optional`: a one-byte presence flag from the gate; the payload follows only when set.
//! 2. `fixedLen`: a `u32` count equal to the constant, then that many inline elements.
//! 3. `varLen`: a `u32` count from the live length expression, then that many heap elements.
//! 4. otherwise: the single value.

use crate::expr::Expr;
use crate::schema::{Elem, ResolvedSchema, Shape};

/// Number of elements a marshal step writes.
#[derive(Debug, Clone, PartialEq)]
pub enum MarshalCount {
    One,
    /// Inline array; the prefix is the constant.
    Const(u32),
    /// Heap array; the prefix is evaluated from the instance, not from the storage length.
    Live(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarshalStep {
    pub member: String,
    pub elem: Elem,
    pub presence: Option<Expr>,
    pub count: MarshalCount,
}

impl MarshalStep {
    pub fn has_prefix(&self) -> bool {
        !matches!(self.count, MarshalCount::One)
    }
}

/// Marshal routine for struct `id`.
pub fn generate(schema: &ResolvedSchema, id: usize) -> Vec<MarshalStep> {
    schema.structs[id]
        .fields
        .iter()
        .map(|f| MarshalStep {
            member: f.member.clone(),
            elem: f.elem,
            presence: f.optional.clone(),
            count: match &f.shape {
                Shape::Scalar => MarshalCount::One,
                Shape::Fixed(n) => MarshalCount::Const(*n),
                Shape::Var(e) => MarshalCount::Live(e.clone()),
            },
        })
        .collect()
}
