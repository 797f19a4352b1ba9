//! TOML schema description files.
//!
//! A description holds the named constants, extra primitives (on top of the fixed-width
//! integers) and the struct catalogue. Fields are listed in wire order:
//!
//! ```toml
//! [constants]
//! MCD_RET_ACT_NONE = 0
//!
//! [[primitive]]
//! name = "mcd_bool_t"
//! width = 4
//! manual = "normalized_bool"
//!
//! [[struct]]
//! name = "mcd_tx_st"
//!
//! [[struct.field]]
//! name = "num_bytes"
//! type = "uint32_t"
//!
//! [[struct.field]]
//! name = "data"
//! type = "uint8_t"
//! var_len = { field = "num_bytes" }
//! ```
//!
//! `fixed_len` takes a number or a constant name; `var_len` and `optional` take expressions
//! such as `{ eq = [{ field = "ret" }, { const = "MCD_RET_ACT_NONE" }] }`.

use crate::expr::Expr;
use crate::primitive::{NormalizedBool, PrimitiveRegistry, PrimitiveSpec};
use crate::schema::{FixedLen, Modifier, Schema, SchemaError, StructDef};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("primitive {name}: {reason}")]
    Primitive { name: String, reason: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaFile {
    #[serde(default)]
    constants: BTreeMap<String, u64>,
    #[serde(default, rename = "primitive")]
    primitives: Vec<PrimitiveEntry>,
    #[serde(default, rename = "struct")]
    structs: Vec<StructEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ManualKind {
    NormalizedBool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PrimitiveEntry {
    name: String,
    width: usize,
    manual: Option<ManualKind>,
    true_value: Option<u64>,
    false_value: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StructEntry {
    name: String,
    #[serde(default, rename = "field")]
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FixedLenEntry {
    Literal(u32),
    Const(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    name: String,
    #[serde(rename = "type")]
    ty: String,
    rename: Option<String>,
    fixed_len: Option<FixedLenEntry>,
    var_len: Option<Expr>,
    optional: Option<Expr>,
}

impl PrimitiveEntry {
    fn into_spec(self) -> Result<PrimitiveSpec, ConfigError> {
        match self.manual {
            Some(ManualKind::NormalizedBool) => {
                let defaults = NormalizedBool::default();
                let codec = NormalizedBool {
                    true_value: self.true_value.unwrap_or(defaults.true_value),
                    false_value: self.false_value.unwrap_or(defaults.false_value),
                };
                Ok(PrimitiveSpec::manual(self.name, self.width, codec))
            }
            None if self.true_value.is_some() || self.false_value.is_some() => Err(ConfigError::Primitive {
                name: self.name,
                reason: "true_value/false_value require manual = \"normalized_bool\"".to_string(),
            }),
            None => Ok(PrimitiveSpec::uniform(self.name, self.width)),
        }
    }
}

impl FieldEntry {
    fn into_parts(self) -> (String, String, Modifier) {
        let modifier = Modifier {
            rename: self.rename,
            fixed_len: self.fixed_len.map(|len| match len {
                FixedLenEntry::Literal(n) => FixedLen::Literal(n),
                FixedLenEntry::Const(name) => FixedLen::Const(name),
            }),
            var_len: self.var_len,
            optional: self.optional,
        };
        (self.name, self.ty, modifier)
    }
}

/// Parse a schema description. Primitives extend the fixed-width integer registry.
pub fn from_toml_str(src: &str) -> Result<(Schema, PrimitiveRegistry), ConfigError> {
    let file: SchemaFile = toml::from_str(src)?;

    let mut registry = PrimitiveRegistry::with_fixed_width_integers();
    for entry in file.primitives {
        registry.register(entry.into_spec()?)?;
    }

    let mut schema = Schema { constants: file.constants, structs: Vec::new() };
    for entry in file.structs {
        let mut def = StructDef::new(entry.name);
        for field in entry.fields {
            let (name, ty, modifier) = field.into_parts();
            def = def.field_with(name, ty, modifier);
        }
        schema.add_struct(def);
    }
    debug!(
        structs = schema.structs.len(),
        constants = schema.constants.len(),
        primitives = registry.len(),
        "schema description parsed"
    );
    Ok((schema, registry))
}

/// Read and parse a schema description file.
pub fn load(path: impl AsRef<Path>) -> Result<(Schema, PrimitiveRegistry), ConfigError> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_toml_str(&src)
}
