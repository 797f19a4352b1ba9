//! Primitive registry: byte widths and codec rules for the leaf types of a schema.
//!
//! Every primitive is either encoded by the **uniform** rule (a canonical little-endian copy
//! of its in-memory bytes) or by a **manual** codec supplied with the registry entry, for
//! types whose memory form is not a byte-for-byte copy of their wire form.

use crate::codec::Endianness;
use crate::schema::SchemaError;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Hand-written codec for a primitive whose wire form differs from its memory form.
///
/// The in-process pair works on the logical value (zero-extended to `u64`); the body pair
/// is pasted verbatim into the functions emitted by [`emit`](crate::emit):
///
/// ```text
/// fn marshal_<name>(obj: <name>, buf: &mut [u8]) -> usize { <marshal_body> }
/// fn unmarshal_<name>(buf: &[u8], obj: &mut <name>) -> usize { <unmarshal_body> }
/// ```
///
/// Emitted bodies may call the wire helpers `wire_put_u8`, `wire_get_u8`, `wire_put_u32`
/// and `wire_get_u32`.
pub trait ManualCodec: fmt::Debug + Send + Sync {
    /// Bytes this codec occupies on the wire.
    fn wire_width(&self) -> usize;

    /// Write `value` into `buf` (at least `wire_width()` bytes) and return bytes written.
    fn marshal(&self, value: u64, buf: &mut [u8]) -> usize;

    /// Read the value from `buf` (at least `wire_width()` bytes).
    fn unmarshal(&self, buf: &[u8]) -> u64;

    /// Largest value [`unmarshal`](Self::unmarshal) can return; must fit the in-memory width.
    fn max_decoded(&self) -> u64;

    fn marshal_body(&self) -> Cow<'_, str>;

    fn unmarshal_body(&self) -> Cow<'_, str>;
}

/// Boolean-like type: canonical `0`/`1` byte on the wire, distinct sentinels in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedBool {
    pub true_value: u64,
    pub false_value: u64,
}

impl Default for NormalizedBool {
    fn default() -> Self {
        NormalizedBool { true_value: 1, false_value: 0 }
    }
}

impl ManualCodec for NormalizedBool {
    fn wire_width(&self) -> usize {
        1
    }

    fn marshal(&self, value: u64, buf: &mut [u8]) -> usize {
        buf[0] = u8::from(value != 0);
        1
    }

    fn unmarshal(&self, buf: &[u8]) -> u64 {
        if buf[0] != 0 {
            self.true_value
        } else {
            self.false_value
        }
    }

    fn max_decoded(&self) -> u64 {
        self.true_value.max(self.false_value)
    }

    fn marshal_body(&self) -> Cow<'_, str> {
        Cow::Borrowed("wire_put_u8(if obj != 0 { 1 } else { 0 }, buf)")
    }

    fn unmarshal_body(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "let mut b = 0u8;\nlet len = wire_get_u8(buf, &mut b);\n*obj = if b != 0 {{ {} }} else {{ {} }};\nlen",
            self.true_value, self.false_value
        ))
    }
}

/// How a primitive's codec is produced.
#[derive(Debug, Clone)]
pub enum CodecRule {
    /// Generated canonical-order copy of `width` bytes.
    Uniform,
    /// Supplied codec, used instead of the uniform rule.
    Manual(Arc<dyn ManualCodec>),
}

/// A leaf type: name, in-memory byte width and codec rule.
#[derive(Debug, Clone)]
pub struct PrimitiveSpec {
    pub name: String,
    pub width: usize,
    pub rule: CodecRule,
}

impl PrimitiveSpec {
    pub fn uniform(name: impl Into<String>, width: usize) -> Self {
        PrimitiveSpec { name: name.into(), width, rule: CodecRule::Uniform }
    }

    pub fn manual(name: impl Into<String>, width: usize, codec: impl ManualCodec + 'static) -> Self {
        PrimitiveSpec { name: name.into(), width, rule: CodecRule::Manual(Arc::new(codec)) }
    }

    /// Bytes one value occupies on the wire.
    pub fn wire_width(&self) -> usize {
        match &self.rule {
            CodecRule::Uniform => self.width,
            CodecRule::Manual(codec) => codec.wire_width(),
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self.rule, CodecRule::Manual(_))
    }

    /// Rust integer type backing this primitive in memory.
    pub fn rust_type(&self) -> &'static str {
        match self.width {
            1 => "u8",
            2 => "u16",
            4 => "u32",
            _ => "u64",
        }
    }

    /// Largest value representable in `width` bytes.
    pub fn max_value(&self) -> u64 {
        if self.width >= 8 {
            u64::MAX
        } else {
            (1u64 << (self.width * 8)) - 1
        }
    }
}

/// Ordered set of primitives, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct PrimitiveRegistry {
    specs: Vec<PrimitiveSpec>,
    by_name: HashMap<String, usize>,
}

impl PrimitiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `uint8_t`, `uint16_t`, `uint32_t` and `uint64_t`.
    pub fn with_fixed_width_integers() -> Self {
        let mut registry = Self::new();
        for (name, width) in [("uint8_t", 1), ("uint16_t", 2), ("uint32_t", 4), ("uint64_t", 8)] {
            registry.specs.push(PrimitiveSpec::uniform(name, width));
            registry.by_name.insert(name.to_string(), registry.specs.len() - 1);
        }
        registry
    }

    pub fn register(&mut self, spec: PrimitiveSpec) -> Result<(), SchemaError> {
        if !matches!(spec.width, 1 | 2 | 4 | 8) {
            return Err(SchemaError::UnsupportedWidth { name: spec.name, width: spec.width });
        }
        if let CodecRule::Manual(codec) = &spec.rule {
            if codec.wire_width() == 0 {
                return Err(SchemaError::UnsupportedWidth { name: spec.name, width: 0 });
            }
            let max = spec.max_value();
            if codec.max_decoded() > max {
                return Err(SchemaError::DecodedValueTooWide { value: codec.max_decoded(), max, name: spec.name });
            }
        }
        if self.by_name.contains_key(&spec.name) {
            return Err(SchemaError::DuplicatePrimitive(spec.name));
        }
        self.by_name.insert(spec.name.clone(), self.specs.len());
        self.specs.push(spec);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, spec: PrimitiveSpec) -> Result<Self, SchemaError> {
        self.register(spec)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&PrimitiveSpec> {
        self.index_of(name).map(|i| &self.specs[i])
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn spec(&self, index: usize) -> &PrimitiveSpec {
        &self.specs[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrimitiveSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Copy a value laid out in `host` memory order to its canonical wire bytes.
///
/// On a big-endian host multi-byte values are reversed while copying.
pub fn copy_to_wire(mem: &[u8], host: Endianness, wire: &mut [u8]) {
    let n = mem.len();
    if host == Endianness::Big && n > 1 {
        for i in 0..n {
            wire[i] = mem[n - 1 - i];
        }
    } else {
        wire[..n].copy_from_slice(mem);
    }
}

/// Inverse of [`copy_to_wire`].
pub fn copy_from_wire(wire: &[u8], host: Endianness, mem: &mut [u8]) {
    let n = mem.len();
    if host == Endianness::Big && n > 1 {
        for i in 0..n {
            mem[i] = wire[n - 1 - i];
        }
    } else {
        mem.copy_from_slice(&wire[..n]);
    }
}

/// Uniform marshal: lay `value` out in host memory, then copy it to the wire.
pub fn marshal_uniform(value: u64, width: usize, host: Endianness, wire: &mut [u8]) -> usize {
    let mut mem = [0u8; 8];
    host.write_uint(&mut mem[..width], value);
    copy_to_wire(&mem[..width], host, wire);
    width
}

/// Uniform unmarshal: copy wire bytes into host memory, then read the value back.
pub fn unmarshal_uniform(wire: &[u8], width: usize, host: Endianness) -> u64 {
    let mut mem = [0u8; 8];
    copy_from_wire(wire, host, &mut mem[..width]);
    host.read_uint(&mem[..width])
}
