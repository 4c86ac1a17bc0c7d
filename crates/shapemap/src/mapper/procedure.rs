// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape-pair classification and compiled conversion procedures.

use crate::mapper::plan::{FieldBinding, ScalarPlan};
use crate::mapper::sequence::SequencePlan;
use crate::mapper::MapError;
use crate::shape::{Instance, Shape, ShapeKind};
use std::sync::Arc;

/// How a shape pair is mapped, decided before any plan is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Object to object.
    Scalar,
    /// Ordered sequence to ordered sequence, element by element.
    Sequence {
        origin_element: Arc<Shape>,
        destination_element: Arc<Shape>,
        max_length: Option<usize>,
    },
}

/// Classify and validate a shape pair.
///
/// Every rejection happens here, so building the procedure afterwards
/// cannot fail.
pub fn analyze(origin: &Shape, destination: &Shape) -> Result<Route, MapError> {
    match (&origin.kind, &destination.kind) {
        (ShapeKind::Struct(_), ShapeKind::Struct(_)) => {
            check_fields(origin)?;
            check_fields(destination)?;
            Ok(Route::Scalar)
        }
        (ShapeKind::Sequence(o), ShapeKind::Sequence(d)) => {
            for element in [&o.element, &d.element] {
                if !element.is_struct() {
                    return Err(MapError::UnsupportedElement {
                        shape: element.name.clone(),
                    });
                }
                check_fields(element)?;
            }
            Ok(Route::Sequence {
                origin_element: Arc::clone(&o.element),
                destination_element: Arc::clone(&d.element),
                max_length: d.max_length,
            })
        }
        _ if origin.is_parameterized() && destination.is_parameterized() => {
            Err(MapError::AmbiguousSequence {
                origin: origin.name.clone(),
                destination: destination.name.clone(),
            })
        }
        _ => Err(MapError::IncompatibleShapes {
            origin: origin.name.clone(),
            destination: destination.name.clone(),
        }),
    }
}

fn check_fields(shape: &Shape) -> Result<(), MapError> {
    match shape.duplicate_field() {
        Some(field) => Err(MapError::DuplicateField {
            shape: shape.name.clone(),
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

/// Compiled, immutable conversion between two shapes.
#[derive(Debug, Clone)]
pub enum ConversionProcedure {
    /// Origin object to a fresh destination object.
    Scalar(ScalarPlan),
    /// Origin sequence to a destination sequence of the same length.
    Sequence {
        origin: Arc<Shape>,
        destination: Arc<Shape>,
        plan: SequencePlan,
    },
}

impl ConversionProcedure {
    /// Build the procedure for an analyzed pair.
    pub(crate) fn build(route: &Route, origin: &Arc<Shape>, destination: &Arc<Shape>) -> Self {
        match route {
            Route::Scalar => Self::Scalar(ScalarPlan::derive(origin, destination)),
            Route::Sequence {
                origin_element,
                destination_element,
                max_length,
            } => Self::Sequence {
                origin: Arc::clone(origin),
                destination: Arc::clone(destination),
                plan: SequencePlan::derive(origin_element, destination_element, *max_length),
            },
        }
    }

    pub fn origin(&self) -> &Arc<Shape> {
        match self {
            Self::Scalar(plan) => plan.origin(),
            Self::Sequence { origin, .. } => origin,
        }
    }

    pub fn destination(&self) -> &Arc<Shape> {
        match self {
            Self::Scalar(plan) => plan.destination(),
            Self::Sequence { destination, .. } => destination,
        }
    }

    /// Field bindings (per element for sequences).
    pub fn bindings(&self) -> Vec<FieldBinding> {
        match self {
            Self::Scalar(plan) => plan.bindings(),
            Self::Sequence { plan, .. } => plan.bindings(),
        }
    }

    /// Translate one origin instance into a fresh destination instance.
    ///
    /// The instance's shape is not compared with [`Self::origin`]; only its
    /// value layout is checked.
    pub fn invoke(&self, origin: &Instance) -> Result<Instance, MapError> {
        let value = match self {
            Self::Scalar(plan) => plan.apply(origin.value())?,
            Self::Sequence { plan, .. } => plan.apply(origin.value())?,
        };
        Ok(Instance::from_trusted(Arc::clone(self.destination()), value))
    }
}

/// Analyze and build in one step, without caching.
pub fn compile(
    origin: &Arc<Shape>,
    destination: &Arc<Shape>,
) -> Result<ConversionProcedure, MapError> {
    let route = analyze(origin, destination)?;
    Ok(ConversionProcedure::build(&route, origin, destination))
}
