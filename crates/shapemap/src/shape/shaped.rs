// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Host types that describe themselves as shapes.
//!
//! Implementing [`Shaped`] lets a Rust type take part in typed mapping
//! (`MapperRegistry::create_map::<O, D>()` / `map::<O, D>(&o)`). `Vec<T>`
//! is shaped as an ordered sequence of `T`.

use crate::shape::{Instance, InstanceError, SequenceBuilder, Shape, Value};
use std::sync::Arc;

/// A host type with a known shape.
pub trait Shaped: Sized {
    /// Shape describing this type.
    fn shape() -> Arc<Shape>;

    /// Capture `self` as an instance of [`Shaped::shape`].
    fn to_instance(&self) -> Instance;

    /// Rebuild the host value from an instance of [`Shaped::shape`].
    fn from_instance(instance: &Instance) -> Result<Self, InstanceError>;
}

impl<T: Shaped> Shaped for Vec<T> {
    fn shape() -> Arc<Shape> {
        Arc::new(SequenceBuilder::of(T::shape()).build())
    }

    fn to_instance(&self) -> Instance {
        let values = self
            .iter()
            .map(|item| item.to_instance().into_value())
            .collect();
        Instance::from_trusted(Self::shape(), Value::Sequence(values))
    }

    fn from_instance(instance: &Instance) -> Result<Self, InstanceError> {
        let len = instance.len()?;
        let mut out = Vec::with_capacity(len);
        for index in 0..len {
            out.push(T::from_instance(&instance.element(index)?)?);
        }
        Ok(out)
    }
}
