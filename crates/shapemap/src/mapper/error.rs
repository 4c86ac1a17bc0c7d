// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Mapper errors.

use crate::shape::InstanceError;
use std::fmt;

/// Errors raised while registering or invoking a mapping.
///
/// Looking up an unregistered pair is not an error: translation returns
/// `Ok(None)` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// The shape pair already has a registry entry.
    AlreadyRegistered { origin: String, destination: String },
    /// Both shapes are parameterized but not both ordered sequences.
    AmbiguousSequence { origin: String, destination: String },
    /// One shape is an object and the other is parameterized.
    IncompatibleShapes { origin: String, destination: String },
    /// Sequence element shape is not an object shape.
    UnsupportedElement { shape: String },
    /// An object shape declares the same field name twice.
    DuplicateField { shape: String, field: String },
    /// The instance handed to a translation is not of the registered origin shape.
    InstanceShapeMismatch { expected: String, got: String },
    /// The instance value does not match its own shape.
    MalformedValue(String),
    /// Origin sequence is longer than the destination bound.
    SequenceTooLong { length: usize, max: usize },
    /// Typed conversion to or from an instance failed.
    Instance(InstanceError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRegistered {
                origin,
                destination,
            } => write!(f, "Mapping already registered: {} -> {}", origin, destination),
            Self::AmbiguousSequence {
                origin,
                destination,
            } => write!(
                f,
                "Cannot map {} -> {}: both shapes are parameterized but not both ordered sequences",
                origin, destination
            ),
            Self::IncompatibleShapes {
                origin,
                destination,
            } => write!(
                f,
                "Cannot map {} -> {}: object and parameterized shapes do not correspond",
                origin, destination
            ),
            Self::UnsupportedElement { shape } => {
                write!(f, "Unsupported sequence element shape: {}", shape)
            }
            Self::DuplicateField { shape, field } => {
                write!(f, "Duplicate field '{}' in shape {}", field, shape)
            }
            Self::InstanceShapeMismatch { expected, got } => {
                write!(f, "Instance shape mismatch: expected {}, got {}", expected, got)
            }
            Self::MalformedValue(msg) => write!(f, "Malformed value: {}", msg),
            Self::SequenceTooLong { length, max } => {
                write!(f, "Sequence length exceeds maximum: {} > {}", length, max)
            }
            Self::Instance(e) => write!(f, "Instance error: {}", e),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Instance(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InstanceError> for MapError {
    fn from(e: InstanceError) -> Self {
        Self::Instance(e)
    }
}
