//! # mcdgen: schema-to-codec compiler for debug RPC messages
//!
//! Compiles a catalogue of structured messages (the MCD debug RPC structs exchanged
//! between client and server) into marshal, unmarshal and free routines with a
//! byte-exact wire layout.
//!
//! ## Pipeline
//!
//! - **Schema**: structs with ordered fields; each field has an element type (primitive or
//!   struct) and a [`Modifier`] (rename, fixed length, variable length, optional).
//! - **Resolve + analyze**: type references become indices, then the
//!   [freeability analysis](freeable) decides which structs own heap storage after decoding.
//! - **Generate**: the [marshal], [unmarshal] and [free] passes compile every struct into
//!   a [`CompiledSchema`].
//! - **Backends**: the in-process [`Codec`] runs the routines over [`Value`] instances;
//!   [`emit_rust`] renders them as Rust source.
//!
//! ## Wire format
//!
//! - Fields in declared order, no tags, no padding.
//! - `optional`: one presence byte, payload only when nonzero.
//! - `fixedLen` / `varLen`: `u32` count, then the elements.
//! - Multi-byte primitives are little-endian regardless of host.
//!
//! ## Example
//!
//! ```
//! use mcdgen::{compile, Codec, CodecOptions, Expr, Modifier, PrimitiveRegistry, Schema, StructDef, Value};
//!
//! let mut schema = Schema::new();
//! schema.add_struct(
//!     StructDef::new("blob")
//!         .field("len", "uint32_t")
//!         .field_with("data", "uint8_t", Modifier::new().var_len(Expr::field("len"))),
//! );
//! let compiled = compile(&schema, &PrimitiveRegistry::with_fixed_width_integers()).unwrap();
//! let codec = Codec::new(compiled, CodecOptions::default());
//!
//! let mut blob = codec.default_value("blob").unwrap();
//! blob.set("len", Value::U32(3));
//! blob.set("data", Value::bytes(&[9, 8, 7]));
//! let bytes = codec.marshal_to_vec("blob", &blob).unwrap();
//! assert_eq!(bytes, [3, 0, 0, 0, 3, 0, 0, 0, 9, 8, 7]);
//! ```

pub mod codec;
pub mod config;
pub mod emit;
pub mod expr;
pub mod free;
pub mod freeable;
pub mod lint;
pub mod marshal;
pub mod primitive;
pub mod routine;
pub mod schema;
pub mod unmarshal;
pub mod value;
pub mod walk;

pub use codec::{Codec, CodecError, CodecOptions, Endianness, FreeObserver};
pub use emit::{emit_rust, write_module, EmitOptions, Visibility};
pub use expr::Expr;
pub use primitive::{CodecRule, ManualCodec, NormalizedBool, PrimitiveRegistry, PrimitiveSpec};
pub use routine::{compile, CompiledSchema, CompiledStruct};
pub use schema::{Elem, FieldDef, FixedLen, Modifier, Schema, SchemaError, Shape, StructDef};
pub use value::Value;
pub use walk::message_extent;
