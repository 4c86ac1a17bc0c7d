// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for Shape.

use crate::shape::{FieldDescriptor, Shape, ShapeKind, SequenceDescriptor, ValueKind};
use std::sync::Arc;

/// Builder for object shapes.
#[derive(Debug)]
pub struct ShapeBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl ShapeBuilder {
    /// Create a new builder for an object shape.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a read/write field.
    pub fn field(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.fields.push(FieldDescriptor::new(name, kind));
        self
    }

    /// Add a text field.
    pub fn text_field(self, name: impl Into<String>) -> Self {
        self.field(name, ValueKind::Text)
    }

    /// Add a field that can be read but not assigned.
    pub fn read_only_field(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.fields
            .push(FieldDescriptor::new(name, kind).read_only());
        self
    }

    /// Add a field that can be assigned but not read.
    pub fn write_only_field(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.fields
            .push(FieldDescriptor::new(name, kind).write_only());
        self
    }

    /// Add a prebuilt field descriptor.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Build the Shape.
    pub fn build(self) -> Shape {
        Shape::struct_shape(self.name, self.fields)
    }
}

/// Builder for sequence shapes.
#[derive(Debug)]
pub struct SequenceBuilder {
    name: String,
    element: Arc<Shape>,
    max_length: Option<usize>,
}

impl SequenceBuilder {
    /// Create a sequence of `element`, named `Seq<Element>`.
    pub fn of(element: Arc<Shape>) -> Self {
        Self {
            name: format!("Seq<{}>", element.name),
            element,
            max_length: None,
        }
    }

    /// Override the generated name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set maximum length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Build the Shape.
    pub fn build(self) -> Shape {
        let seq = match self.max_length {
            Some(max) => SequenceDescriptor::bounded(self.element, max),
            None => SequenceDescriptor::unbounded(self.element),
        };
        Shape::new(self.name, ShapeKind::Sequence(seq))
    }
}
