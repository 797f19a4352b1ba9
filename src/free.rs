//! Free pass: release routines for freeable structs, children before parents.
//!
//! Only fields with something to release produce a step. Embedded values and inline
//! arrays are never released themselves; their elements are visited when freeable.

use crate::expr::Expr;
use crate::freeable::FreeTable;
use crate::schema::{Elem, ResolvedSchema, Shape};

#[derive(Debug, Clone, PartialEq)]
pub enum FreeAction {
    /// Free each element of an inline array of freeable structs.
    EachInline { elem: usize, count: u32 },
    /// Free the first `count` elements (when `elem` is a freeable struct), then release the array.
    Heap { count: Expr, elem: Option<usize> },
    /// Free an embedded freeable struct.
    Embedded(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FreeStep {
    pub member: String,
    /// Step runs only while the field's `optional` gate holds.
    pub guard: Option<Expr>,
    pub action: FreeAction,
}

/// Free routine for struct `id`, or `None` when it holds nothing to release.
pub fn generate(schema: &ResolvedSchema, table: &FreeTable, id: usize) -> Option<Vec<FreeStep>> {
    if !table.freeable(id) {
        return None;
    }
    let mut steps = Vec::new();
    for f in &schema.structs[id].fields {
        let freeable_elem = match f.elem {
            Elem::Struct(s) if table.freeable(s) => Some(s),
            _ => None,
        };
        let action = match (&f.shape, freeable_elem) {
            (Shape::Var(count), elem) => FreeAction::Heap { count: count.clone(), elem },
            (Shape::Fixed(n), Some(elem)) => FreeAction::EachInline { elem, count: *n },
            (Shape::Scalar, Some(elem)) => FreeAction::Embedded(elem),
            (Shape::Fixed(_), None) | (Shape::Scalar, None) => continue,
        };
        steps.push(FreeStep {
            member: f.member.clone(),
            guard: f.optional.clone(),
            action,
        });
    }
    Some(steps)
}
