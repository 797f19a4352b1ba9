//! Compile driver: resolve, analyze, then run the three generator passes over every struct.
//!
//! The output is one [`CompiledStruct`] per schema struct, in declaration order. Backends
//! declare every type before emitting any routine, so no ordering between structs is needed.

use crate::free::{self, FreeStep};
use crate::freeable::{self, FreeTable};
use crate::marshal::{self, MarshalStep};
use crate::primitive::PrimitiveRegistry;
use crate::schema::{ResolvedSchema, Schema, SchemaError};
use crate::unmarshal::{self, UnmarshalStep};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// The routines generated for one struct.
#[derive(Debug, Clone)]
pub struct CompiledStruct {
    pub name: String,
    /// Member identifiers in wire order.
    pub members: Vec<String>,
    pub marshal: Vec<MarshalStep>,
    pub unmarshal: Vec<UnmarshalStep>,
    /// `None` when the struct is not freeable.
    pub free: Option<Vec<FreeStep>>,
}

impl CompiledStruct {
    pub fn is_freeable(&self) -> bool {
        self.free.is_some()
    }
}

/// A resolved schema together with its freeability verdicts and compiled routines.
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    resolved: ResolvedSchema,
    freeable: FreeTable,
    structs: Vec<CompiledStruct>,
}

impl CompiledSchema {
    pub fn resolved(&self) -> &ResolvedSchema {
        &self.resolved
    }

    pub fn primitives(&self) -> &PrimitiveRegistry {
        &self.resolved.primitives
    }

    pub fn constants(&self) -> &BTreeMap<String, u64> {
        &self.resolved.constants
    }

    pub fn free_table(&self) -> &FreeTable {
        &self.freeable
    }

    /// Compiled structs, in declaration order.
    pub fn structs(&self) -> &[CompiledStruct] {
        &self.structs
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.resolved.struct_index(name)
    }

    pub fn get(&self, name: &str) -> Option<&CompiledStruct> {
        self.index_of(name).map(|i| &self.structs[i])
    }

    pub fn at(&self, id: usize) -> &CompiledStruct {
        &self.structs[id]
    }

    pub fn is_freeable(&self, name: &str) -> Option<bool> {
        self.index_of(name).map(|i| self.freeable.freeable(i))
    }
}

/// Compile `schema` against `registry`.
///
/// Fails on any resolution error, or with [`SchemaError::Cycle`] when the struct graph is cyclic.
pub fn compile(schema: &Schema, registry: &PrimitiveRegistry) -> Result<CompiledSchema, SchemaError> {
    let resolved = schema.resolve(registry)?;
    let table = freeable::analyze(&resolved)?;

    let mut structs = Vec::with_capacity(resolved.structs.len());
    for (id, s) in resolved.structs.iter().enumerate() {
        let compiled = CompiledStruct {
            name: s.name.clone(),
            members: s.fields.iter().map(|f| f.member.clone()).collect(),
            marshal: marshal::generate(&resolved, id),
            unmarshal: unmarshal::generate(&resolved, id),
            free: free::generate(&resolved, &table, id),
        };
        debug!(
            structure = %compiled.name,
            fields = compiled.members.len(),
            free_steps = compiled.free.as_ref().map_or(0, Vec::len),
            "routines generated"
        );
        structs.push(compiled);
    }

    info!(
        structs = structs.len(),
        freeable = table.count(),
        primitives = resolved.primitives.len(),
        "schema compiled"
    );
    Ok(CompiledSchema { resolved, freeable: table, structs })
}
