//! Structure-only walk over marshalled bytes.
//!
//! The walker follows the unmarshal routine of a struct (presence flags, count prefixes,
//! primitive wire widths) and advances a position without building values or allocating.
//! Use [`message_extent`] to learn how long a message is, and whether the buffer holds all
//! of it, before handing it to [`Codec::unmarshal`](crate::codec::Codec::unmarshal).

use crate::codec::CodecError;
use crate::routine::CompiledSchema;
use crate::schema::Elem;
use crate::unmarshal::Storage;
use byteorder::{ByteOrder, LittleEndian};

/// Cursor over a byte slice that skips whole structs.
#[derive(Debug)]
pub struct BinaryWalker<'a> {
    data: &'a [u8],
    pos: usize,
    compiled: &'a CompiledSchema,
}

impl<'a> BinaryWalker<'a> {
    pub fn new(data: &'a [u8], compiled: &'a CompiledSchema) -> Self {
        BinaryWalker { data, pos: 0, compiled }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &[u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    /// Skip one `name` instance; returns the number of bytes skipped.
    pub fn skip_struct(&mut self, name: &str) -> Result<usize, CodecError> {
        let id = self
            .compiled
            .index_of(name)
            .ok_or_else(|| CodecError::UnknownStruct(name.to_string()))?;
        let start = self.pos;
        self.skip_id(id)?;
        Ok(self.pos - start)
    }

    fn skip_id(&mut self, id: usize) -> Result<(), CodecError> {
        let compiled = self.compiled;
        let s = compiled.at(id);
        for step in &s.unmarshal {
            if step.presence_flag && self.take(1)?[0] == 0 {
                continue;
            }
            let count = match step.storage {
                Storage::Value => 1,
                Storage::Inline(capacity) => {
                    let n = self.read_count()?;
                    if n > capacity {
                        return Err(CodecError::FixedCountOverflow {
                            structure: s.name.clone(),
                            member: step.member.clone(),
                            count: n,
                            capacity,
                        });
                    }
                    n
                }
                Storage::Heap => self.read_count()?,
            };
            self.skip_elems(step.elem, count)?;
        }
        Ok(())
    }

    fn skip_elems(&mut self, elem: Elem, count: u32) -> Result<(), CodecError> {
        match elem {
            Elem::Primitive(p) => {
                let width = self.compiled.primitives().spec(p).wire_width();
                let total = width.checked_mul(count as usize).ok_or(CodecError::Truncated { offset: self.pos })?;
                self.take(total)?;
            }
            Elem::Struct(child) => {
                // Non-empty structs take at least one byte, so a hostile count hits the end of input.
                for _ in 0..count {
                    self.skip_id(child)?;
                }
            }
        }
        Ok(())
    }

    fn read_count(&mut self) -> Result<u32, CodecError> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let end = self.pos.checked_add(n).filter(|&end| end <= self.data.len());
        match end {
            Some(end) => {
                let bytes = &self.data[self.pos..end];
                self.pos = end;
                Ok(bytes)
            }
            None => Err(CodecError::Truncated { offset: self.pos }),
        }
    }
}

/// Byte extent of one `name` message at the start of `data`.
///
/// Equals the byte count [`Codec::unmarshal`](crate::codec::Codec::unmarshal) consumes for
/// the same buffer; fails with [`CodecError::Truncated`] when `data` ends early.
pub fn message_extent(compiled: &CompiledSchema, name: &str, data: &[u8]) -> Result<usize, CodecError> {
    BinaryWalker::new(data, compiled).skip_struct(name)
}
