// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape-to-shape mapping compiler and registry.
//!
//! Two object shapes correspond field by field, by name:
//!
//! | Origin field | Destination field | Rule |
//! |---|---|---|
//! | same name, same kind | any kind | copy unchanged |
//! | same name, other kind | text | canonical text of the origin value |
//! | absent, or kinds differ and destination is not text | any | keep default |
//!
//! Only readable origin fields and writable destination fields take part.
//! Two ordered sequences of object shapes map element by element with the
//! same rules. Any other combination is rejected at registration.
//!
//! # Example
//!
//! ```rust
//! use shapemap::mapper::MapperRegistry;
//! use shapemap::shape::{Instance, ShapeBuilder, ValueKind};
//! use std::sync::Arc;
//!
//! let person = Arc::new(ShapeBuilder::new("Person")
//!     .text_field("name")
//!     .field("age", ValueKind::I32)
//!     .build());
//! let row = Arc::new(ShapeBuilder::new("PersonRow")
//!     .text_field("name")
//!     .text_field("age")
//!     .build());
//!
//! let registry = MapperRegistry::new();
//! registry.register(&person, &row).unwrap();
//!
//! let mut p = Instance::new(&person);
//! p.set("name", "Ada").unwrap();
//! p.set("age", 36i32).unwrap();
//!
//! let r = registry.translate(&person, &row, &p).unwrap().expect("registered");
//! assert_eq!(r.get::<String>("age").unwrap(), "36");
//! ```

mod error;
mod plan;
mod procedure;
mod registry;
mod sequence;

pub use error::MapError;
pub use plan::{Correspondence, FieldBinding, ScalarPlan};
pub use procedure::{analyze, compile, ConversionProcedure, Route};
pub use registry::{MapperRegistry, RegistryEntry, RegistryStats, ShapePair};
pub use sequence::SequencePlan;
