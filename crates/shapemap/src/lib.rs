// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # shapemap - runtime shape-to-shape mapping
//!
//! Copies compatible fields from an instance of one data shape into a fresh
//! instance of another, by field name and kind, with text as the only
//! coercion target. The per-pair conversion is analyzed once, compiled into
//! a reusable procedure, and cached in a registry keyed by the shape pair.
//!
//! ## Quick Start
//!
//! ```rust
//! use shapemap::{MapperRegistry, Result};
//! use shapemap::shape::{Instance, ShapeBuilder, ValueKind};
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     let origin = Arc::new(ShapeBuilder::new("Reading")
//!         .field("sensor", ValueKind::Guid)
//!         .field("celsius", ValueKind::F64)
//!         .build());
//!     let destination = Arc::new(ShapeBuilder::new("ReadingRow")
//!         .text_field("sensor")
//!         .field("celsius", ValueKind::F64)
//!         .build());
//!
//!     let registry = MapperRegistry::new();
//!     registry.register(&origin, &destination)?;
//!
//!     let mut reading = Instance::new(&origin);
//!     reading.set("celsius", 21.5f64)?;
//!
//!     let row = registry.translate(&origin, &destination, &reading)?;
//!     assert!(row.is_some());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------+
//! |  MapperRegistry   DashMap<ShapePair, Arc<RegistryEntry>>      |
//! |                   entry = Route + OnceLock<ConversionProcedure>|
//! +---------------------------------------------------------------+
//! |  Compiler         analyze(): classify + validate the pair     |
//! |                   ScalarPlan / SequencePlan: resolved rules   |
//! +---------------------------------------------------------------+
//! |  Shapes           Shape, FieldDescriptor, Instance, Value     |
//! +---------------------------------------------------------------+
//! ```
//!
//! ## Features
//!
//! - `config-loaders` (default): load [`MapperConfig`] from YAML.

pub mod config;
pub mod mapper;
pub mod shape;

pub use config::{CompileMode, MapperConfig};
pub use mapper::{ConversionProcedure, MapError, MapperRegistry, RegistryStats, ShapePair};
pub use shape::{Instance, Shape, ShapeBuilder, Shaped, Value, ValueKind};
pub use uuid::Uuid;

/// Result alias for mapper operations.
pub type Result<T> = std::result::Result<T, MapError>;
