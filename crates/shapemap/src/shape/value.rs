// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value types.

use crate::shape::ValueKind;
use std::fmt;
use uuid::Uuid;

/// A dynamic value for any shape.
///
/// `Struct` holds one value per field, in the shape's field order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // Scalars
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    Text(String),
    Guid(Uuid),

    // Composites
    Struct(Vec<Value>),
    Sequence(Vec<Value>),
}

impl Value {
    /// Default value for a scalar kind.
    pub fn default_for(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Bool => Self::Bool(false),
            ValueKind::U8 => Self::U8(0),
            ValueKind::U16 => Self::U16(0),
            ValueKind::U32 => Self::U32(0),
            ValueKind::U64 => Self::U64(0),
            ValueKind::I8 => Self::I8(0),
            ValueKind::I16 => Self::I16(0),
            ValueKind::I32 => Self::I32(0),
            ValueKind::I64 => Self::I64(0),
            ValueKind::F32 => Self::F32(0.0),
            ValueKind::F64 => Self::F64(0.0),
            ValueKind::Char => Self::Char('\0'),
            ValueKind::Text => Self::Text(String::new()),
            ValueKind::Guid => Self::Guid(Uuid::nil()),
        }
    }

    /// Scalar kind of this value (None for composites).
    pub fn kind(&self) -> Option<ValueKind> {
        Some(match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::U8(_) => ValueKind::U8,
            Self::U16(_) => ValueKind::U16,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::I8(_) => ValueKind::I8,
            Self::I16(_) => ValueKind::I16,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Char(_) => ValueKind::Char,
            Self::Text(_) => ValueKind::Text,
            Self::Guid(_) => ValueKind::Guid,
            Self::Struct(_) | Self::Sequence(_) => return None,
        })
    }

    /// Short description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Struct(_) => "struct",
            Self::Sequence(_) => "sequence",
            scalar => scalar.kind().map_or("unknown", |k| k.name()),
        }
    }

    /// Canonical text form (same as `Display`).
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Try to get as i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u32.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::U32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as guid.
    pub fn as_guid(&self) -> Option<Uuid> {
        match self {
            Self::Guid(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get struct field values.
    pub fn as_struct(&self) -> Option<&[Value]> {
        match self {
            Self::Struct(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get sequence elements.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::U16(v) => write!(f, "{}", v),
            Self::U32(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::I8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::Char(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
            Self::Guid(v) => write!(f, "{}", v.hyphenated()),
            Self::Struct(values) | Self::Sequence(values) => {
                let open = if matches!(self, Self::Struct(_)) { '{' } else { '[' };
                let close = if open == '{' { '}' } else { ']' };
                write!(f, "{}", open)?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "{}", close)
            }
        }
    }
}

// Conversion traits
macro_rules! impl_from_scalar {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }
    };
}

impl_from_scalar!(bool, Bool);
impl_from_scalar!(u8, U8);
impl_from_scalar!(u16, U16);
impl_from_scalar!(u32, U32);
impl_from_scalar!(u64, U64);
impl_from_scalar!(i8, I8);
impl_from_scalar!(i16, I16);
impl_from_scalar!(i32, I32);
impl_from_scalar!(i64, I64);
impl_from_scalar!(f32, F32);
impl_from_scalar!(f64, F64);
impl_from_scalar!(char, Char);
impl_from_scalar!(String, Text);
impl_from_scalar!(Uuid, Guid);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}
