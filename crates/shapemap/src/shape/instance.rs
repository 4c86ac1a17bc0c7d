// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Instance container for runtime data manipulation.

use crate::shape::{Shape, ShapeKind, Value, ValueKind};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Errors for Instance operations.
#[derive(Debug, Clone, PartialEq)]
pub enum InstanceError {
    FieldNotFound(String),
    TypeMismatch { expected: String, got: String },
    InvalidOperation(String),
    IndexOutOfBounds { index: usize, length: usize },
    SequenceTooLong { length: usize, max: usize },
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldNotFound(name) => write!(f, "Field not found: {}", name),
            Self::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
            Self::InvalidOperation(msg) => write!(f, "Invalid operation for shape: {}", msg),
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "Index out of bounds: {} >= {}", index, length)
            }
            Self::SequenceTooLong { length, max } => {
                write!(f, "Sequence length exceeds maximum: {} > {}", length, max)
            }
        }
    }
}

impl std::error::Error for InstanceError {}

/// A value together with the shape it conforms to.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Shape descriptor.
    shape: Arc<Shape>,
    /// Actual value.
    value: Value,
}

impl Instance {
    /// Create a new default-initialized instance.
    pub fn new(shape: &Arc<Shape>) -> Self {
        Self {
            shape: shape.clone(),
            value: default_value(shape),
        }
    }

    /// Create from an existing value, checking it against the shape.
    pub fn from_value(shape: &Arc<Shape>, value: Value) -> Result<Self, InstanceError> {
        conforms(shape, &value)?;
        Ok(Self {
            shape: shape.clone(),
            value,
        })
    }

    /// Wrap a value produced by a compiled procedure (already conforming).
    pub(crate) fn from_trusted(shape: Arc<Shape>, value: Value) -> Self {
        Self { shape, value }
    }

    /// Get the shape descriptor.
    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    /// Get the shape name.
    pub fn type_name(&self) -> &str {
        &self.shape.name
    }

    /// Get the underlying value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Into inner value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Get a field value by name.
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T, InstanceError> {
        T::from_value(self.get_field(name)?)
    }

    /// Set a field value by name. The value kind must match the field kind.
    pub fn set<T: IntoValue>(&mut self, name: &str, value: T) -> Result<(), InstanceError> {
        let (index, field) = self
            .shape
            .fields()
            .and_then(|fields| fields.iter().enumerate().find(|(_, f)| f.name == name))
            .ok_or_else(|| InstanceError::FieldNotFound(name.to_string()))?;

        let value = value.into_value();
        if value.kind() != Some(field.kind) {
            return Err(InstanceError::TypeMismatch {
                expected: field.kind.to_string(),
                got: value.describe().to_string(),
            });
        }

        match &mut self.value {
            Value::Struct(values) if index < values.len() => {
                values[index] = value;
                Ok(())
            }
            _ => Err(InstanceError::InvalidOperation(
                "set requires struct shape".into(),
            )),
        }
    }

    /// Get field by name.
    pub fn get_field(&self, name: &str) -> Result<&Value, InstanceError> {
        let index = self
            .shape
            .field_index(name)
            .ok_or_else(|| InstanceError::FieldNotFound(name.to_string()))?;

        match &self.value {
            Value::Struct(values) => values
                .get(index)
                .ok_or_else(|| InstanceError::FieldNotFound(name.to_string())),
            _ => Err(InstanceError::InvalidOperation(
                "get_field requires struct shape".into(),
            )),
        }
    }

    /// Iterate over `(field name, value)` pairs in field order (for structs).
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        let names = self.shape.fields().unwrap_or(&[]);
        let values = self.value.as_struct().unwrap_or(&[]);
        names.iter().map(|f| f.name.as_str()).zip(values.iter())
    }

    /// Get sequence element by index, as an instance of the element shape.
    pub fn element(&self, index: usize) -> Result<Instance, InstanceError> {
        let seq = self.shape.as_sequence().ok_or_else(|| {
            InstanceError::InvalidOperation("element requires sequence shape".into())
        })?;
        let elements = self.value.as_sequence().unwrap_or(&[]);
        let value = elements
            .get(index)
            .ok_or(InstanceError::IndexOutOfBounds {
                index,
                length: elements.len(),
            })?;
        Ok(Self::from_trusted(seq.element.clone(), value.clone()))
    }

    /// Append an element instance to a sequence.
    pub fn push(&mut self, element: Instance) -> Result<(), InstanceError> {
        let seq = self.shape.as_sequence().ok_or_else(|| {
            InstanceError::InvalidOperation("push requires sequence shape".into())
        })?;
        if *element.shape != *seq.element {
            return Err(InstanceError::TypeMismatch {
                expected: seq.element.name.clone(),
                got: element.shape.name.clone(),
            });
        }

        match &mut self.value {
            Value::Sequence(values) => {
                // Check max length if bounded
                if let Some(max) = seq.max_length {
                    if values.len() >= max {
                        return Err(InstanceError::SequenceTooLong {
                            length: values.len() + 1,
                            max,
                        });
                    }
                }
                values.push(element.value);
                Ok(())
            }
            _ => Err(InstanceError::InvalidOperation(
                "push requires sequence value".into(),
            )),
        }
    }

    /// Get sequence length.
    pub fn len(&self) -> Result<usize, InstanceError> {
        match &self.value {
            Value::Sequence(values) => Ok(values.len()),
            _ => Err(InstanceError::InvalidOperation(
                "len requires sequence shape".into(),
            )),
        }
    }

    /// Check if sequence is empty.
    pub fn is_empty(&self) -> Result<bool, InstanceError> {
        self.len().map(|l| l == 0)
    }

    /// Iterate over raw element values (for sequences).
    pub fn elements(&self) -> impl Iterator<Item = &Value> {
        self.value.as_sequence().unwrap_or(&[]).iter()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.value == other.value
    }
}

/// Default value for a shape.
pub(crate) fn default_value(shape: &Shape) -> Value {
    match &shape.kind {
        ShapeKind::Struct(fields) => {
            Value::Struct(fields.iter().map(|f| Value::default_for(f.kind)).collect())
        }
        ShapeKind::Sequence(_) => Value::Sequence(Vec::new()),
        // Opaque container; contents are never interpreted.
        ShapeKind::Parameterized(_) => Value::Sequence(Vec::new()),
    }
}

/// Check that `value` is well formed for `shape`.
pub(crate) fn conforms(shape: &Shape, value: &Value) -> Result<(), InstanceError> {
    match (&shape.kind, value) {
        (ShapeKind::Struct(fields), Value::Struct(values)) => {
            if fields.len() != values.len() {
                return Err(InstanceError::InvalidOperation(format!(
                    "{} expects {} field values, got {}",
                    shape.name,
                    fields.len(),
                    values.len()
                )));
            }
            for (field, v) in fields.iter().zip(values) {
                if v.kind() != Some(field.kind) {
                    return Err(InstanceError::TypeMismatch {
                        expected: format!("{}.{}: {}", shape.name, field.name, field.kind),
                        got: v.describe().to_string(),
                    });
                }
            }
            Ok(())
        }
        (ShapeKind::Sequence(seq), Value::Sequence(values)) => {
            if let Some(max) = seq.max_length {
                if values.len() > max {
                    return Err(InstanceError::SequenceTooLong {
                        length: values.len(),
                        max,
                    });
                }
            }
            values.iter().try_for_each(|v| conforms(&seq.element, v))
        }
        (ShapeKind::Parameterized(_), Value::Sequence(_)) => Ok(()),
        (_, other) => Err(InstanceError::TypeMismatch {
            expected: shape.name.clone(),
            got: other.describe().to_string(),
        }),
    }
}

/// Trait for converting from Value.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, InstanceError>;
}

/// Trait for converting to Value.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

// Implement FromValue for scalars
macro_rules! impl_from_value {
    ($ty:ty, $variant:ident, $name:expr) => {
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self, InstanceError> {
                match value {
                    Value::$variant(v) => Ok(*v),
                    other => Err(InstanceError::TypeMismatch {
                        expected: $name.to_string(),
                        got: other.describe().to_string(),
                    }),
                }
            }
        }
    };
}

impl_from_value!(bool, Bool, "bool");
impl_from_value!(u8, U8, "u8");
impl_from_value!(u16, U16, "u16");
impl_from_value!(u32, U32, "u32");
impl_from_value!(u64, U64, "u64");
impl_from_value!(i8, I8, "i8");
impl_from_value!(i16, I16, "i16");
impl_from_value!(i32, I32, "i32");
impl_from_value!(i64, I64, "i64");
impl_from_value!(f32, F32, "f32");
impl_from_value!(f64, F64, "f64");
impl_from_value!(char, Char, "char");
impl_from_value!(Uuid, Guid, "guid");

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, InstanceError> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            other => Err(InstanceError::TypeMismatch {
                expected: ValueKind::Text.to_string(),
                got: other.describe().to_string(),
            }),
        }
    }
}

impl<T: Into<Value>> IntoValue for T {
    fn into_value(self) -> Value {
        self.into()
    }
}
