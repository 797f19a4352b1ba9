//! Freeability analysis: which structs may own heap storage after decoding.
//!
//! A struct is freeable when one of its fields is a `varLen` array, or when a field's
//! element type is a freeable struct (plain, `fixedLen` or `varLen`). The walk keeps a
//! tri-state mark per struct, so every verdict is computed once and a revisited
//! in-progress node is reported as a cycle instead of recursing forever.

use crate::schema::{Elem, ResolvedSchema, SchemaError, Shape};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Resolved(bool),
}

/// Memoized graph walk over a resolved schema.
#[derive(Debug)]
pub struct FreeAnalysis<'a> {
    schema: &'a ResolvedSchema,
    marks: Vec<Mark>,
    stack: Vec<usize>,
}

impl<'a> FreeAnalysis<'a> {
    pub fn new(schema: &'a ResolvedSchema) -> Self {
        FreeAnalysis {
            schema,
            marks: vec![Mark::Unvisited; schema.structs.len()],
            stack: Vec::new(),
        }
    }

    /// Verdict for struct `id`; cached after the first query.
    pub fn freeable(&mut self, id: usize) -> Result<bool, SchemaError> {
        match self.marks[id] {
            Mark::Resolved(verdict) => return Ok(verdict),
            Mark::InProgress => return Err(self.cycle_through(id)),
            Mark::Unvisited => {}
        }
        self.marks[id] = Mark::InProgress;
        self.stack.push(id);

        // No short-circuit: every struct edge is followed so that any cycle is reported.
        let schema = self.schema;
        let mut verdict = false;
        for f in &schema.structs[id].fields {
            if matches!(f.shape, Shape::Var(_)) {
                verdict = true;
            }
            if let Elem::Struct(child) = f.elem {
                if self.freeable(child)? {
                    verdict = true;
                }
            }
        }

        self.stack.pop();
        self.marks[id] = Mark::Resolved(verdict);
        debug!(structure = %schema.structs[id].name, freeable = verdict, "freeability resolved");
        Ok(verdict)
    }

    fn cycle_through(&self, id: usize) -> SchemaError {
        let start = self.stack.iter().position(|&s| s == id).unwrap_or(0);
        let mut path: Vec<String> = self.stack[start..]
            .iter()
            .map(|&s| self.schema.structs[s].name.clone())
            .collect();
        path.push(self.schema.structs[id].name.clone());
        SchemaError::Cycle { path }
    }

    /// Resolve every struct and return the verdict table.
    pub fn finish(mut self) -> Result<FreeTable, SchemaError> {
        for id in 0..self.marks.len() {
            self.freeable(id)?;
        }
        let verdicts = self
            .marks
            .iter()
            .map(|m| matches!(m, Mark::Resolved(true)))
            .collect();
        Ok(FreeTable { verdicts })
    }
}

/// Per-struct freeability verdicts, indexed like [`ResolvedSchema::structs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeTable {
    verdicts: Vec<bool>,
}

impl FreeTable {
    pub fn freeable(&self, id: usize) -> bool {
        self.verdicts[id]
    }

    pub fn count(&self) -> usize {
        self.verdicts.iter().filter(|v| **v).count()
    }
}

/// Run the analysis over every struct of `schema`.
pub fn analyze(schema: &ResolvedSchema) -> Result<FreeTable, SchemaError> {
    FreeAnalysis::new(schema).finish()
}
