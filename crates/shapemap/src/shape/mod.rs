// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shapes and instances.
//!
//! Runtime description of data records without compile-time type knowledge.
//!
//! # Features
//!
//! - **Shape**: Structural description (object with named, typed fields,
//!   ordered sequence, or other parameterized container)
//! - **Instance**: Shape-checked value container with field access
//! - **Builder API**: Fluent interface for building shapes
//! - **Shaped**: Host Rust types that describe themselves
//!
//! # Example
//!
//! ```rust
//! use shapemap::shape::{Instance, ShapeBuilder, ValueKind};
//! use std::sync::Arc;
//!
//! let shape = Arc::new(ShapeBuilder::new("SensorReading")
//!     .field("sensor_id", ValueKind::U32)
//!     .field("temperature", ValueKind::F64)
//!     .text_field("location")
//!     .build());
//!
//! let mut data = Instance::new(&shape);
//! data.set("sensor_id", 42u32).unwrap();
//! data.set("temperature", 23.5f64).unwrap();
//!
//! let temp: f64 = data.get("temperature").unwrap();
//! assert_eq!(temp, 23.5);
//! ```

mod builder;
mod descriptor;
mod instance;
mod shaped;
mod value;

pub use builder::{SequenceBuilder, ShapeBuilder};
pub use descriptor::{
    FieldAccess, FieldDescriptor, ParameterizedDescriptor, SequenceDescriptor, Shape, ShapeKind,
    ValueKind,
};
pub(crate) use instance::default_value;
pub use instance::{FromValue, Instance, InstanceError, IntoValue};
pub use shaped::Shaped;
pub use value::Value;

#[cfg(test)]
mod tests;
