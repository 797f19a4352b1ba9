//! Unmarshal pass: per struct, the steps that decode an instance, mirroring the marshal order.
//!
//! The decoder never evaluates length expressions: every array length comes from the
//! wire count, and presence comes from the wire flag.

use crate::schema::{Elem, ResolvedSchema, Shape};

/// Where decoded elements are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Single value, decoded in place.
    Value,
    /// Inline array with a fixed capacity; the wire count says how many slots are filled.
    Inline(u32),
    /// Heap array allocated for exactly the wire count; no allocation for a zero count.
    Heap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmarshalStep {
    pub member: String,
    pub elem: Elem,
    /// A presence byte precedes the payload.
    pub presence_flag: bool,
    pub storage: Storage,
}

/// Unmarshal routine for struct `id`.
pub fn generate(schema: &ResolvedSchema, id: usize) -> Vec<UnmarshalStep> {
    schema.structs[id]
        .fields
        .iter()
        .map(|f| UnmarshalStep {
            member: f.member.clone(),
            elem: f.elem,
            presence_flag: f.optional.is_some(),
            storage: match f.shape {
                Shape::Scalar => Storage::Value,
                Shape::Fixed(n) => Storage::Inline(n),
                Shape::Var(_) => Storage::Heap,
            },
        })
        .collect()
}
