//! Schema model: struct definitions, field modifiers, and resolution into an indexed graph.

use crate::expr::Expr;
use crate::primitive::PrimitiveRegistry;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Compile-time repetition count of an inline array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedLen {
    Literal(u32),
    Const(String),
}

/// Per-field encoding strategy.
///
/// `fixed_len` and `var_len` are mutually exclusive; either may combine with `optional`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modifier {
    /// Member identifier used in instances and generated code (defaults to the field name).
    pub rename: Option<String>,
    pub fixed_len: Option<FixedLen>,
    /// Runtime count, read from a sibling of the same instance.
    pub var_len: Option<Expr>,
    /// Presence gate, evaluated against the same instance.
    pub optional: Option<Expr>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(mut self, member: impl Into<String>) -> Self {
        self.rename = Some(member.into());
        self
    }

    pub fn fixed_len(mut self, len: FixedLen) -> Self {
        self.fixed_len = Some(len);
        self
    }

    pub fn fixed(self, len: u32) -> Self {
        self.fixed_len(FixedLen::Literal(len))
    }

    pub fn fixed_const(self, name: impl Into<String>) -> Self {
        self.fixed_len(FixedLen::Const(name.into()))
    }

    pub fn var_len(mut self, count: Expr) -> Self {
        self.var_len = Some(count);
        self
    }

    pub fn optional(mut self, gate: Expr) -> Self {
        self.optional = Some(gate);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    /// Element type name: a registered primitive or another struct.
    pub ty: String,
    pub modifier: Modifier,
}

impl FieldDef {
    /// Identifier of the field in instances and generated code.
    pub fn member(&self) -> &str {
        self.modifier.rename.as_deref().unwrap_or(&self.name)
    }
}

/// Named, ordered field list. Field order is the wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl StructDef {
    pub fn new(name: impl Into<String>) -> Self {
        StructDef { name: name.into(), fields: Vec::new() }
    }

    pub fn field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.field_with(name, ty, Modifier::default())
    }

    pub fn field_with(mut self, name: impl Into<String>, ty: impl Into<String>, modifier: Modifier) -> Self {
        self.fields.push(FieldDef { name: name.into(), ty: ty.into(), modifier });
        self
    }
}

/// The struct catalogue plus the named constants it refers to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub constants: BTreeMap<String, u64>,
    pub structs: Vec<StructDef>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_constant(&mut self, name: impl Into<String>, value: u64) {
        self.constants.insert(name.into(), value);
    }

    pub fn with_constant(mut self, name: impl Into<String>, value: u64) -> Self {
        self.set_constant(name, value);
        self
    }

    pub fn add_struct(&mut self, def: StructDef) {
        self.structs.push(def);
    }

    pub fn with_struct(mut self, def: StructDef) -> Self {
        self.add_struct(def);
        self
    }

    pub fn get_struct(&self, name: &str) -> Option<&StructDef> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// Resolve type references against `registry` and check modifiers.
    pub fn resolve(&self, registry: &PrimitiveRegistry) -> Result<ResolvedSchema, SchemaError> {
        ResolvedSchema::resolve(self, registry)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate struct name: {0}")]
    DuplicateStruct(String),
    #[error("duplicate primitive name: {0}")]
    DuplicatePrimitive(String),
    #[error("{name}: manual codec decodes {value}, wider than the in-memory maximum {max}")]
    DecodedValueTooWide { name: String, value: u64, max: u64 },
    #[error("struct {0} has the same name as a primitive")]
    NameClash(String),
    #[error("{name}: unsupported primitive width {width} (expected 1, 2, 4 or 8)")]
    UnsupportedWidth { name: String, width: usize },
    #[error("struct {0} has no fields")]
    EmptyStruct(String),
    #[error("{structure}: duplicate member {member}")]
    DuplicateMember { structure: String, member: String },
    #[error("{structure}.{field}: unknown type {ty}")]
    UnknownType { structure: String, field: String, ty: String },
    #[error("{structure}.{field}: fixed_len and var_len are mutually exclusive")]
    ConflictingLength { structure: String, field: String },
    #[error("{structure}.{field}: invalid fixed length: {reason}")]
    InvalidFixedLen { structure: String, field: String, reason: String },
    #[error("{structure}.{field}: unknown constant {name}")]
    UnknownConstant { structure: String, field: String, name: String },
    #[error("{structure}.{field}: expression refers to unknown field {name}")]
    UnknownField { structure: String, field: String, name: String },
    #[error("{structure}.{field}: expression refers to {name}, which is not a scalar primitive")]
    NonScalarReference { structure: String, field: String, name: String },
    #[error("cyclic struct graph: {}", .path.join(" -> "))]
    Cycle { path: Vec<String> },
}

/// Resolved element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Elem {
    /// Index into the primitive registry.
    Primitive(usize),
    /// Index into [`ResolvedSchema::structs`].
    Struct(usize),
}

/// Resolved repetition shape of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Scalar,
    /// Inline array; the constant is resolved.
    Fixed(u32),
    /// Heap array sized by an expression over siblings.
    Var(Expr),
}

impl Shape {
    pub fn is_array(&self) -> bool {
        !matches!(self, Shape::Scalar)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    pub name: String,
    pub member: String,
    pub elem: Elem,
    pub shape: Shape,
    pub optional: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStruct {
    pub name: String,
    pub fields: Vec<ResolvedField>,
}

impl ResolvedStruct {
    pub fn field(&self, member: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|f| f.member == member)
    }

    pub fn position(&self, member: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.member == member)
    }
}

/// Schema with every type reference replaced by an index.
#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    pub constants: BTreeMap<String, u64>,
    pub primitives: PrimitiveRegistry,
    pub structs: Vec<ResolvedStruct>,
    structs_by_name: HashMap<String, usize>,
}

impl ResolvedSchema {
    pub fn resolve(schema: &Schema, registry: &PrimitiveRegistry) -> Result<Self, SchemaError> {
        let mut structs_by_name = HashMap::new();
        for (i, s) in schema.structs.iter().enumerate() {
            if registry.get(&s.name).is_some() {
                return Err(SchemaError::NameClash(s.name.clone()));
            }
            if structs_by_name.insert(s.name.clone(), i).is_some() {
                return Err(SchemaError::DuplicateStruct(s.name.clone()));
            }
        }

        let mut structs = Vec::with_capacity(schema.structs.len());
        for s in &schema.structs {
            // Every element must occupy at least one wire byte.
            if s.fields.is_empty() {
                return Err(SchemaError::EmptyStruct(s.name.clone()));
            }
            let mut members = HashSet::new();
            let mut fields = Vec::with_capacity(s.fields.len());
            for f in &s.fields {
                if !members.insert(f.member()) {
                    return Err(SchemaError::DuplicateMember {
                        structure: s.name.clone(),
                        member: f.member().to_string(),
                    });
                }
                let elem = match (registry.index_of(&f.ty), structs_by_name.get(&f.ty)) {
                    (Some(p), _) => Elem::Primitive(p),
                    (None, Some(&st)) => Elem::Struct(st),
                    (None, None) => {
                        return Err(SchemaError::UnknownType {
                            structure: s.name.clone(),
                            field: f.name.clone(),
                            ty: f.ty.clone(),
                        })
                    }
                };
                let shape = match (&f.modifier.fixed_len, &f.modifier.var_len) {
                    (Some(_), Some(_)) => {
                        return Err(SchemaError::ConflictingLength {
                            structure: s.name.clone(),
                            field: f.name.clone(),
                        })
                    }
                    (Some(len), None) => Shape::Fixed(resolve_fixed_len(schema, s, f, len)?),
                    (None, Some(count)) => Shape::Var(count.clone()),
                    (None, None) => Shape::Scalar,
                };
                fields.push(ResolvedField {
                    name: f.name.clone(),
                    member: f.member().to_string(),
                    elem,
                    shape,
                    optional: f.modifier.optional.clone(),
                });
            }
            structs.push(ResolvedStruct { name: s.name.clone(), fields });
        }

        for s in &structs {
            for f in &s.fields {
                let exprs = f.optional.iter().chain(match &f.shape {
                    Shape::Var(e) => Some(e),
                    _ => None,
                });
                for e in exprs {
                    check_expr(schema, s, f, e)?;
                }
            }
        }

        Ok(ResolvedSchema {
            constants: schema.constants.clone(),
            primitives: registry.clone(),
            structs,
            structs_by_name,
        })
    }

    pub fn struct_index(&self, name: &str) -> Option<usize> {
        self.structs_by_name.get(name).copied()
    }

    pub fn get_struct(&self, name: &str) -> Option<&ResolvedStruct> {
        self.struct_index(name).map(|i| &self.structs[i])
    }

    /// Display name of an element type.
    pub fn elem_name(&self, elem: Elem) -> &str {
        match elem {
            Elem::Primitive(p) => &self.primitives.spec(p).name,
            Elem::Struct(s) => &self.structs[s].name,
        }
    }
}

fn resolve_fixed_len(schema: &Schema, s: &StructDef, f: &FieldDef, len: &FixedLen) -> Result<u32, SchemaError> {
    let value = match len {
        FixedLen::Literal(n) => u64::from(*n),
        FixedLen::Const(name) => *schema.constants.get(name).ok_or_else(|| SchemaError::UnknownConstant {
            structure: s.name.clone(),
            field: f.name.clone(),
            name: name.clone(),
        })?,
    };
    if value == 0 {
        return Err(SchemaError::InvalidFixedLen {
            structure: s.name.clone(),
            field: f.name.clone(),
            reason: "length must be nonzero".to_string(),
        });
    }
    u32::try_from(value).map_err(|_| SchemaError::InvalidFixedLen {
        structure: s.name.clone(),
        field: f.name.clone(),
        reason: format!("{} does not fit the u32 count prefix", value),
    })
}

fn check_expr(schema: &Schema, s: &ResolvedStruct, f: &ResolvedField, e: &Expr) -> Result<(), SchemaError> {
    for name in e.constants() {
        if !schema.constants.contains_key(name) {
            return Err(SchemaError::UnknownConstant {
                structure: s.name.clone(),
                field: f.name.clone(),
                name: name.to_string(),
            });
        }
    }
    for name in e.fields() {
        let target = s.field(name).ok_or_else(|| SchemaError::UnknownField {
            structure: s.name.clone(),
            field: f.name.clone(),
            name: name.to_string(),
        })?;
        if !matches!(target.elem, Elem::Primitive(_)) || target.shape.is_array() {
            return Err(SchemaError::NonScalarReference {
                structure: s.name.clone(),
                field: f.name.clone(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
