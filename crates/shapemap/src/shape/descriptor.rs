// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape descriptors for runtime structural information.

use std::fmt;
use std::sync::Arc;

/// Scalar value kinds a field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Char,
    /// The text kind. Target of the stringify correspondence.
    Text,
    /// 128-bit globally unique identifier.
    Guid,
}

impl ValueKind {
    /// Check if this is the text kind.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Short lowercase name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::Text => "text",
            Self::Guid => "guid",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read/write capability of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldAccess {
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl FieldAccess {
    pub fn is_readable(&self) -> bool {
        matches!(self, Self::ReadWrite | Self::ReadOnly)
    }

    pub fn is_writable(&self) -> bool {
        matches!(self, Self::ReadWrite | Self::WriteOnly)
    }
}

/// Shape kind enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Plain object with named fields.
    Struct(Vec<FieldDescriptor>),
    /// Single-level ordered sequence.
    Sequence(SequenceDescriptor),
    /// Any other parameterized container (sets, maps, optionals...).
    Parameterized(ParameterizedDescriptor),
}

/// A complete shape descriptor.
///
/// Equality and hashing are structural: two independently built shapes
/// with the same name, kind and fields are the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Shape name.
    pub name: String,
    /// Shape kind.
    pub kind: ShapeKind,
}

impl Shape {
    /// Create a new shape descriptor.
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create an object shape.
    pub fn struct_shape(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self::new(name, ShapeKind::Struct(fields))
    }

    /// Create an unbounded sequence shape.
    pub fn sequence(name: impl Into<String>, element: Arc<Shape>) -> Self {
        Self::new(name, ShapeKind::Sequence(SequenceDescriptor::unbounded(element)))
    }

    /// Create a parameterized, non-sequence shape.
    pub fn parameterized(
        name: impl Into<String>,
        constructor: impl Into<String>,
        params: Vec<Arc<Shape>>,
    ) -> Self {
        Self::new(
            name,
            ShapeKind::Parameterized(ParameterizedDescriptor::new(constructor, params)),
        )
    }

    /// Check if this is an object shape.
    pub fn is_struct(&self) -> bool {
        matches!(self.kind, ShapeKind::Struct(_))
    }

    /// Check if this is an ordered sequence shape.
    pub fn is_sequence(&self) -> bool {
        matches!(self.kind, ShapeKind::Sequence(_))
    }

    /// Check if this shape takes type parameters (sequences included).
    pub fn is_parameterized(&self) -> bool {
        matches!(
            self.kind,
            ShapeKind::Sequence(_) | ShapeKind::Parameterized(_)
        )
    }

    /// Get fields if this is an object shape.
    pub fn fields(&self) -> Option<&[FieldDescriptor]> {
        match &self.kind {
            ShapeKind::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields()?.iter().find(|f| f.name == name)
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields()?.iter().position(|f| f.name == name)
    }

    /// Get the sequence descriptor if this is a sequence shape.
    pub fn as_sequence(&self) -> Option<&SequenceDescriptor> {
        match &self.kind {
            ShapeKind::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// First field name that appears more than once, if any.
    pub fn duplicate_field(&self) -> Option<&str> {
        let fields = self.fields()?;
        fields.iter().enumerate().find_map(|(i, f)| {
            fields[..i]
                .iter()
                .any(|earlier| earlier.name == f.name)
                .then_some(f.name.as_str())
        })
    }
}

/// Field descriptor for object members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Field value kind.
    pub kind: ValueKind,
    /// Read/write capability.
    pub access: FieldAccess,
}

impl FieldDescriptor {
    /// Create a new read/write field descriptor.
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
            access: FieldAccess::ReadWrite,
        }
    }

    /// Mark as read-only.
    pub fn read_only(mut self) -> Self {
        self.access = FieldAccess::ReadOnly;
        self
    }

    /// Mark as write-only.
    pub fn write_only(mut self) -> Self {
        self.access = FieldAccess::WriteOnly;
        self
    }
}

/// Sequence shape descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceDescriptor {
    /// Element shape.
    pub element: Arc<Shape>,
    /// Maximum length (None = unbounded).
    pub max_length: Option<usize>,
}

impl SequenceDescriptor {
    /// Create unbounded sequence.
    pub fn unbounded(element: Arc<Shape>) -> Self {
        Self {
            element,
            max_length: None,
        }
    }

    /// Create bounded sequence.
    pub fn bounded(element: Arc<Shape>, max_length: usize) -> Self {
        Self {
            element,
            max_length: Some(max_length),
        }
    }
}

/// Descriptor for parameterized shapes that are not ordered sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterizedDescriptor {
    /// Constructor name, e.g. `Set` or `Map`.
    pub constructor: String,
    /// Type parameters in declaration order.
    pub params: Vec<Arc<Shape>>,
}

impl ParameterizedDescriptor {
    pub fn new(constructor: impl Into<String>, params: Vec<Arc<Shape>>) -> Self {
        Self {
            constructor: constructor.into(),
            params,
        }
    }
}
