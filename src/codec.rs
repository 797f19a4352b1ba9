//! In-process execution of compiled routines over dynamic [`Value`] instances.
//!
//! Marshal writes the wire layout produced by the marshal pass, unmarshal rebuilds an
//! instance from the wire counts and presence flags, and free releases heap arrays in
//! post-order. Buffer and instance problems surface as [`CodecError`]s instead of
//! out-of-bounds access.

use crate::expr::ExprError;
use crate::free::FreeAction;
use crate::marshal::{MarshalCount, MarshalStep};
use crate::primitive::{marshal_uniform, unmarshal_uniform, CodecRule};
use crate::routine::{CompiledSchema, CompiledStruct};
use crate::schema::Elem;
use crate::unmarshal::{Storage, UnmarshalStep};
use crate::value::Value;
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::collections::HashMap;
use std::io::{self, Cursor, Read, Write};

/// Byte order of the (simulated) host memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }

    /// Store the low `buf.len()` bytes of `value` in this byte order.
    pub fn write_uint(&self, buf: &mut [u8], value: u64) {
        let n = buf.len();
        let value = if n >= 8 { value } else { value & ((1u64 << (n * 8)) - 1) };
        match self {
            Endianness::Big => BigEndian::write_uint(buf, value, n),
            Endianness::Little => LittleEndian::write_uint(buf, value, n),
        }
    }

    pub fn read_uint(&self, buf: &[u8]) -> u64 {
        match self {
            Endianness::Big => BigEndian::read_uint(buf, buf.len()),
            Endianness::Little => LittleEndian::read_uint(buf, buf.len()),
        }
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Endianness::native()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    pub host: Endianness,
    /// Reject `varLen` arrays whose element count differs from their length expression.
    /// Off by default: the wire count alone decides, as in the lenient wire format.
    pub strict_counts: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("IO: {0}")]
    Io(#[from] io::Error),
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
    #[error("input truncated at offset {offset}")]
    Truncated { offset: usize },
    #[error("unknown struct: {0}")]
    UnknownStruct(String),
    #[error("value for {0} is not a struct")]
    NotStruct(String),
    #[error("{structure}: missing member {member}")]
    MissingField { structure: String, member: String },
    #[error("{structure}.{member}: expected {expected}")]
    TypeMismatch { structure: String, member: String, expected: &'static str },
    #[error("{structure}.{member}: value {value} exceeds {max}")]
    ValueOutOfRange { structure: String, member: String, value: u64, max: u64 },
    #[error("{structure}.{member}: array holds {actual} elements, {expected} required")]
    LengthMismatch { structure: String, member: String, expected: usize, actual: usize },
    #[error("{structure}.{member}: wire count {count} exceeds inline capacity {capacity}")]
    FixedCountOverflow { structure: String, member: String, count: u32, capacity: u32 },
    #[error("{structure}.{member}: count field says {count}, array holds {actual}")]
    CountMismatch { structure: String, member: String, count: u64, actual: usize },
    #[error("{structure}.{member}: {source}")]
    Expr {
        structure: String,
        member: String,
        #[source]
        source: ExprError,
    },
}

/// Receives the events of a free routine in execution order.
pub trait FreeObserver {
    /// A free routine started on an instance of `structure`.
    fn free_called(&mut self, _structure: &str) {}

    /// Heap array `member` of `structure`, holding `len` elements, was released.
    fn storage_released(&mut self, _structure: &str, _member: &str, _len: usize) {}
}

struct NoopObserver;

impl FreeObserver for NoopObserver {}

/// Write sink that only counts bytes.
#[derive(Default)]
struct ByteCounter(usize);

impl Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Codec {
    compiled: CompiledSchema,
    options: CodecOptions,
}

impl Codec {
    pub fn new(compiled: CompiledSchema, options: CodecOptions) -> Self {
        Codec { compiled, options }
    }

    pub fn compiled(&self) -> &CompiledSchema {
        &self.compiled
    }

    pub fn options(&self) -> CodecOptions {
        self.options
    }

    /// Marshal `value` into `buf`, returning bytes written.
    pub fn marshal(&self, name: &str, value: &Value, buf: &mut [u8]) -> Result<usize, CodecError> {
        let id = self.struct_id(name)?;
        let needed = self.marshalled_len(name, value)?;
        if needed > buf.len() {
            return Err(CodecError::BufferTooSmall { needed, available: buf.len() });
        }
        let mut w = Cursor::new(buf);
        self.marshal_struct(&mut w, id, value)?;
        Ok(w.position() as usize)
    }

    pub fn marshal_to_vec(&self, name: &str, value: &Value) -> Result<Vec<u8>, CodecError> {
        let id = self.struct_id(name)?;
        let mut out = Vec::new();
        self.marshal_struct(&mut out, id, value)?;
        Ok(out)
    }

    /// Exact number of bytes [`marshal`](Self::marshal) writes for `value`.
    pub fn marshalled_len(&self, name: &str, value: &Value) -> Result<usize, CodecError> {
        let id = self.struct_id(name)?;
        let mut counter = ByteCounter::default();
        self.marshal_struct(&mut counter, id, value)?;
        Ok(counter.0)
    }

    /// Decode one `name` instance from the start of `buf`; returns the value and bytes consumed.
    pub fn unmarshal(&self, name: &str, buf: &[u8]) -> Result<(Value, usize), CodecError> {
        let id = self.struct_id(name)?;
        let mut r = Cursor::new(buf);
        let value = self.unmarshal_struct(&mut r, id)?;
        Ok((value, r.position() as usize))
    }

    /// Release every heap array reachable from `value`. No-op for structs that are not freeable.
    pub fn free(&self, name: &str, value: &mut Value) -> Result<(), CodecError> {
        self.free_with(name, value, &mut NoopObserver)
    }

    pub fn free_with(
        &self,
        name: &str,
        value: &mut Value,
        observer: &mut dyn FreeObserver,
    ) -> Result<(), CodecError> {
        let id = self.struct_id(name)?;
        self.free_struct(id, value, observer)
    }

    /// Zeroed instance: primitives 0, inline arrays filled with defaults, heap arrays empty.
    pub fn default_value(&self, name: &str) -> Result<Value, CodecError> {
        Ok(self.default_struct(self.struct_id(name)?))
    }

    fn struct_id(&self, name: &str) -> Result<usize, CodecError> {
        self.compiled
            .index_of(name)
            .ok_or_else(|| CodecError::UnknownStruct(name.to_string()))
    }

    fn marshal_struct<W: Write>(&self, w: &mut W, id: usize, value: &Value) -> Result<(), CodecError> {
        let s = self.compiled.at(id);
        let fields = value.as_struct().ok_or_else(|| CodecError::NotStruct(s.name.clone()))?;
        let lookup = |m: &str| fields.get(m).and_then(Value::as_u64);
        let constants = self.compiled.constants();

        for step in &s.marshal {
            if let Some(gate) = &step.presence {
                let present = gate
                    .holds(&lookup, constants)
                    .map_err(|e| expr_error(s, &step.member, e))?;
                w.write_u8(u8::from(present))?;
                if !present {
                    continue;
                }
            }
            let member = fields.get(&step.member).ok_or_else(|| missing(s, &step.member))?;
            match &step.count {
                MarshalCount::One => self.marshal_elem(w, s, step, member)?,
                MarshalCount::Const(n) => {
                    let list = list_of(s, &step.member, member)?;
                    if list.len() != *n as usize {
                        return Err(CodecError::LengthMismatch {
                            structure: s.name.clone(),
                            member: step.member.clone(),
                            expected: *n as usize,
                            actual: list.len(),
                        });
                    }
                    w.write_u32::<LittleEndian>(*n)?;
                    for v in list {
                        self.marshal_elem(w, s, step, v)?;
                    }
                }
                MarshalCount::Live(count) => {
                    let n = count.eval(&lookup, constants).map_err(|e| expr_error(s, &step.member, e))?;
                    let n32 = u32::try_from(n).map_err(|_| CodecError::ValueOutOfRange {
                        structure: s.name.clone(),
                        member: step.member.clone(),
                        value: n,
                        max: u64::from(u32::MAX),
                    })?;
                    let list = list_of(s, &step.member, member)?;
                    if self.options.strict_counts && list.len() as u64 != n {
                        return Err(CodecError::CountMismatch {
                            structure: s.name.clone(),
                            member: step.member.clone(),
                            count: n,
                            actual: list.len(),
                        });
                    }
                    if list.len() < n32 as usize {
                        return Err(CodecError::LengthMismatch {
                            structure: s.name.clone(),
                            member: step.member.clone(),
                            expected: n32 as usize,
                            actual: list.len(),
                        });
                    }
                    w.write_u32::<LittleEndian>(n32)?;
                    for v in &list[..n32 as usize] {
                        self.marshal_elem(w, s, step, v)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn marshal_elem<W: Write>(
        &self,
        w: &mut W,
        s: &CompiledStruct,
        step: &MarshalStep,
        value: &Value,
    ) -> Result<(), CodecError> {
        let p = match step.elem {
            Elem::Struct(child) => return self.marshal_struct(w, child, value),
            Elem::Primitive(p) => self.compiled.primitives().spec(p),
        };
        let v = value.as_u64().ok_or_else(|| CodecError::TypeMismatch {
            structure: s.name.clone(),
            member: step.member.clone(),
            expected: "unsigned integer",
        })?;
        if v > p.max_value() {
            return Err(CodecError::ValueOutOfRange {
                structure: s.name.clone(),
                member: step.member.clone(),
                value: v,
                max: p.max_value(),
            });
        }
        match &p.rule {
            CodecRule::Uniform => {
                let mut wire = [0u8; 8];
                let n = marshal_uniform(v, p.width, self.options.host, &mut wire);
                w.write_all(&wire[..n])?;
            }
            CodecRule::Manual(codec) => {
                let mut wire = vec![0u8; codec.wire_width()];
                let n = codec.marshal(v, &mut wire);
                w.write_all(&wire[..n])?;
            }
        }
        Ok(())
    }

    fn unmarshal_struct(&self, r: &mut Cursor<&[u8]>, id: usize) -> Result<Value, CodecError> {
        let s = self.compiled.at(id);
        let mut fields = HashMap::with_capacity(s.unmarshal.len());
        let mut heap_counts = Vec::new();

        for (i, step) in s.unmarshal.iter().enumerate() {
            if step.presence_flag && read_u8(r)? == 0 {
                fields.insert(step.member.clone(), self.default_storage(step));
                continue;
            }
            let v = match step.storage {
                Storage::Value => self.unmarshal_elem(r, step.elem)?,
                Storage::Inline(capacity) => {
                    let n = read_u32(r)?;
                    if n > capacity {
                        return Err(CodecError::FixedCountOverflow {
                            structure: s.name.clone(),
                            member: step.member.clone(),
                            count: n,
                            capacity,
                        });
                    }
                    let mut list = Vec::with_capacity(capacity as usize);
                    for _ in 0..n {
                        list.push(self.unmarshal_elem(r, step.elem)?);
                    }
                    list.resize_with(capacity as usize, || self.default_elem(step.elem));
                    Value::List(list)
                }
                Storage::Heap => {
                    let n = read_u32(r)? as usize;
                    let mut list = if n == 0 {
                        Vec::new()
                    } else {
                        Vec::with_capacity(n.min(remaining(r)))
                    };
                    for _ in 0..n {
                        list.push(self.unmarshal_elem(r, step.elem)?);
                    }
                    heap_counts.push((i, n));
                    Value::List(list)
                }
            };
            fields.insert(step.member.clone(), v);
        }

        if self.options.strict_counts {
            self.check_heap_counts(s, &fields, &heap_counts)?;
        }
        Ok(Value::Struct(fields))
    }

    /// Compare decoded heap array lengths with their length expressions.
    fn check_heap_counts(
        &self,
        s: &CompiledStruct,
        fields: &HashMap<String, Value>,
        heap_counts: &[(usize, usize)],
    ) -> Result<(), CodecError> {
        let lookup = |m: &str| fields.get(m).and_then(Value::as_u64);
        for &(i, actual) in heap_counts {
            let step = &s.marshal[i];
            if let MarshalCount::Live(count) = &step.count {
                let n = count
                    .eval(&lookup, self.compiled.constants())
                    .map_err(|e| expr_error(s, &step.member, e))?;
                if n != actual as u64 {
                    return Err(CodecError::CountMismatch {
                        structure: s.name.clone(),
                        member: step.member.clone(),
                        count: n,
                        actual,
                    });
                }
            }
        }
        Ok(())
    }

    fn unmarshal_elem(&self, r: &mut Cursor<&[u8]>, elem: Elem) -> Result<Value, CodecError> {
        let p = match elem {
            Elem::Struct(child) => return self.unmarshal_struct(r, child),
            Elem::Primitive(p) => self.compiled.primitives().spec(p),
        };
        let v = match &p.rule {
            CodecRule::Uniform => {
                let mut wire = [0u8; 8];
                read_exact(r, &mut wire[..p.width])?;
                unmarshal_uniform(&wire[..p.width], p.width, self.options.host)
            }
            CodecRule::Manual(codec) => {
                let mut wire = vec![0u8; codec.wire_width()];
                read_exact(r, &mut wire)?;
                codec.unmarshal(&wire)
            }
        };
        Ok(Value::from_width(p.width, v))
    }

    fn free_struct(
        &self,
        id: usize,
        value: &mut Value,
        observer: &mut dyn FreeObserver,
    ) -> Result<(), CodecError> {
        let s = self.compiled.at(id);
        let steps = match &s.free {
            Some(steps) => steps,
            None => return Ok(()),
        };
        observer.free_called(&s.name);
        let constants = self.compiled.constants();

        for step in steps {
            let (run, count) = {
                let fields = value.as_struct().ok_or_else(|| CodecError::NotStruct(s.name.clone()))?;
                let lookup = |m: &str| fields.get(m).and_then(Value::as_u64);
                let run = match &step.guard {
                    Some(gate) => gate
                        .holds(&lookup, constants)
                        .map_err(|e| expr_error(s, &step.member, e))?,
                    None => true,
                };
                let count = match &step.action {
                    FreeAction::Heap { count, .. } if run => count
                        .eval(&lookup, constants)
                        .map_err(|e| expr_error(s, &step.member, e))?,
                    FreeAction::EachInline { count, .. } => u64::from(*count),
                    _ => 0,
                };
                (run, usize::try_from(count).unwrap_or(usize::MAX))
            };
            if !run {
                continue;
            }
            let member = value.get_mut(&step.member).ok_or_else(|| missing(s, &step.member))?;
            match &step.action {
                FreeAction::EachInline { elem, .. } => {
                    let list = list_of_mut(s, &step.member, member)?;
                    for v in list.iter_mut().take(count) {
                        self.free_struct(*elem, v, observer)?;
                    }
                }
                FreeAction::Heap { elem, .. } => {
                    let list = list_of_mut(s, &step.member, member)?;
                    if let Some(elem) = elem {
                        for v in list.iter_mut().take(count) {
                            self.free_struct(*elem, v, observer)?;
                        }
                    }
                    if !list.is_empty() {
                        observer.storage_released(&s.name, &step.member, list.len());
                        *list = Vec::new();
                    }
                }
                FreeAction::Embedded(elem) => self.free_struct(*elem, member, observer)?,
            }
        }
        Ok(())
    }

    fn default_struct(&self, id: usize) -> Value {
        let s = self.compiled.at(id);
        Value::Struct(
            s.unmarshal
                .iter()
                .map(|step| (step.member.clone(), self.default_storage(step)))
                .collect(),
        )
    }

    fn default_storage(&self, step: &UnmarshalStep) -> Value {
        match step.storage {
            Storage::Value => self.default_elem(step.elem),
            Storage::Inline(n) => Value::List((0..n).map(|_| self.default_elem(step.elem)).collect()),
            Storage::Heap => Value::List(Vec::new()),
        }
    }

    fn default_elem(&self, elem: Elem) -> Value {
        match elem {
            Elem::Primitive(p) => Value::from_width(self.compiled.primitives().spec(p).width, 0),
            Elem::Struct(child) => self.default_struct(child),
        }
    }
}

fn missing(s: &CompiledStruct, member: &str) -> CodecError {
    CodecError::MissingField { structure: s.name.clone(), member: member.to_string() }
}

fn expr_error(s: &CompiledStruct, member: &str, source: ExprError) -> CodecError {
    CodecError::Expr { structure: s.name.clone(), member: member.to_string(), source }
}

fn list_of<'v>(s: &CompiledStruct, member: &str, value: &'v Value) -> Result<&'v [Value], CodecError> {
    value.as_list().ok_or_else(|| CodecError::TypeMismatch {
        structure: s.name.clone(),
        member: member.to_string(),
        expected: "list",
    })
}

fn list_of_mut<'v>(
    s: &CompiledStruct,
    member: &str,
    value: &'v mut Value,
) -> Result<&'v mut Vec<Value>, CodecError> {
    value.as_list_mut().ok_or_else(|| CodecError::TypeMismatch {
        structure: s.name.clone(),
        member: member.to_string(),
        expected: "list",
    })
}

fn remaining(r: &Cursor<&[u8]>) -> usize {
    r.get_ref().len().saturating_sub(r.position() as usize)
}

fn truncated(at: u64) -> impl FnOnce(io::Error) -> CodecError {
    move |_| CodecError::Truncated { offset: at as usize }
}

fn read_u8(r: &mut Cursor<&[u8]>) -> Result<u8, CodecError> {
    let at = r.position();
    r.read_u8().map_err(truncated(at))
}

fn read_u32(r: &mut Cursor<&[u8]>) -> Result<u32, CodecError> {
    let at = r.position();
    r.read_u32::<LittleEndian>().map_err(truncated(at))
}

fn read_exact(r: &mut Cursor<&[u8]>, buf: &mut [u8]) -> Result<(), CodecError> {
    let at = r.position();
    r.read_exact(buf).map_err(truncated(at))
}
