//! Dynamic instances handled by the in-process codec.
//!
//! A struct instance is a map from member name to value. Inline arrays are lists holding
//! exactly their fixed length; heap arrays are lists whose emptiness means "not allocated".

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Struct(HashMap<String, Value>),
    List(Vec<Value>),
}

impl Value {
    /// Unsigned value stored in a primitive of `width` bytes.
    pub fn from_width(width: usize, v: u64) -> Value {
        match width {
            1 => Value::U8(v as u8),
            2 => Value::U16(v as u16),
            4 => Value::U32(v as u32),
            _ => Value::U64(v),
        }
    }

    /// List of `U8` elements, the usual shape of a byte array field.
    pub fn bytes(data: &[u8]) -> Value {
        Value::List(data.iter().map(|b| Value::U8(*b)).collect())
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U8(x) => Some(*x as u64),
            Value::U16(x) => Some(*x as u64),
            Value::U32(x) => Some(*x as u64),
            Value::U64(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Struct(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_struct_mut(&mut self) -> Option<&mut HashMap<String, Value>> {
        match self {
            Value::Struct(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    /// Bytes of a list of `U8` elements.
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        self.as_list()?
            .iter()
            .map(|v| match v {
                Value::U8(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    /// Member of a struct instance.
    pub fn get(&self, member: &str) -> Option<&Value> {
        self.as_struct()?.get(member)
    }

    pub fn get_mut(&mut self, member: &str) -> Option<&mut Value> {
        self.as_struct_mut()?.get_mut(member)
    }

    /// Set a member of a struct instance. No-op on non-struct values.
    pub fn set(&mut self, member: impl Into<String>, value: Value) {
        if let Value::Struct(m) = self {
            m.insert(member.into(), value);
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, member: impl Into<String>, value: Value) -> Value {
        self.set(member, value);
        self
    }
}
