// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field-correspondence plan between two object shapes.
//!
//! The plan is derived once from the two shapes: field names are resolved to
//! positions and every destination field gets at most one rule. Applying the
//! plan afterwards is a clone of the default destination plus one store per
//! rule.

use crate::mapper::MapError;
use crate::shape::{default_value, Shape, Value, ValueKind};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// How a destination field is filled from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Correspondence {
    /// Same name, same kind: value copied unchanged.
    Copy,
    /// Same name, destination is text: canonical text of the origin value.
    Stringify,
}

impl fmt::Display for Correspondence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => f.write_str("copy"),
            Self::Stringify => f.write_str("stringify"),
        }
    }
}

/// One bound destination field, for reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub destination: String,
    pub origin: String,
    pub rule: Correspondence,
}

#[derive(Debug, Clone, Copy)]
struct FieldRule {
    origin: usize,
    origin_kind: ValueKind,
    destination: usize,
    rule: Correspondence,
}

/// Compiled correspondence between an origin and a destination object shape.
#[derive(Debug, Clone)]
pub struct ScalarPlan {
    origin: Arc<Shape>,
    destination: Arc<Shape>,
    origin_width: usize,
    template: Vec<Value>,
    rules: Vec<FieldRule>,
}

impl ScalarPlan {
    /// Derive the plan. Both shapes must be object shapes; anything else
    /// yields an empty plan.
    pub(crate) fn derive(origin: &Arc<Shape>, destination: &Arc<Shape>) -> Self {
        let origin_fields = origin.fields().unwrap_or(&[]);
        let readable: HashMap<&str, (usize, ValueKind)> = origin_fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.access.is_readable())
            .map(|(i, f)| (f.name.as_str(), (i, f.kind)))
            .collect();

        let mut rules = Vec::new();
        for (index, field) in destination.fields().unwrap_or(&[]).iter().enumerate() {
            if !field.access.is_writable() {
                continue;
            }
            let rule = match readable.get(field.name.as_str()) {
                Some(&(src, kind)) if kind == field.kind => Some((src, kind, Correspondence::Copy)),
                Some(&(src, kind)) if field.kind.is_text() => {
                    Some((src, kind, Correspondence::Stringify))
                }
                _ => None,
            };
            if let Some((src, origin_kind, rule)) = rule {
                rules.push(FieldRule {
                    origin: src,
                    origin_kind,
                    destination: index,
                    rule,
                });
            }
        }

        let template = match default_value(destination) {
            Value::Struct(values) => values,
            _ => Vec::new(),
        };

        Self {
            origin: Arc::clone(origin),
            destination: Arc::clone(destination),
            origin_width: origin_fields.len(),
            template,
            rules,
        }
    }

    pub fn origin(&self) -> &Arc<Shape> {
        &self.origin
    }

    pub fn destination(&self) -> &Arc<Shape> {
        &self.destination
    }

    /// Bound destination fields, in destination field order.
    pub fn bindings(&self) -> Vec<FieldBinding> {
        let origin_fields = self.origin.fields().unwrap_or(&[]);
        let destination_fields = self.destination.fields().unwrap_or(&[]);
        self.rules
            .iter()
            .filter_map(|r| {
                Some(FieldBinding {
                    destination: destination_fields.get(r.destination)?.name.clone(),
                    origin: origin_fields.get(r.origin)?.name.clone(),
                    rule: r.rule,
                })
            })
            .collect()
    }

    /// Build a fresh destination value from an origin value.
    ///
    /// The origin is checked before anything is built, so a malformed origin
    /// never produces a partial result.
    pub(crate) fn apply(&self, origin: &Value) -> Result<Value, MapError> {
        let values = match origin {
            Value::Struct(values) if values.len() == self.origin_width => values,
            other => {
                return Err(width_error(&self.origin, other));
            }
        };
        for r in &self.rules {
            let found = values[r.origin].kind();
            if found != Some(r.origin_kind) {
                return Err(MapError::MalformedValue(format!(
                    "{} field #{} holds {}, shape says {}",
                    self.origin.name,
                    r.origin,
                    values[r.origin].describe(),
                    r.origin_kind
                )));
            }
        }

        let mut slots = self.template.clone();
        for r in &self.rules {
            let source = &values[r.origin];
            slots[r.destination] = match r.rule {
                Correspondence::Copy => source.clone(),
                Correspondence::Stringify => Value::Text(source.to_text()),
            };
        }
        Ok(Value::Struct(slots))
    }
}

fn width_error(shape: &Shape, got: &Value) -> MapError {
    let detail = match got {
        Value::Struct(values) => format!(
            "{} expects {} field values, got {}",
            shape.name,
            shape.fields().map_or(0, <[_]>::len),
            values.len()
        ),
        other => format!("{} expects a struct value, got {}", shape.name, other.describe()),
    };
    MapError::MalformedValue(detail)
}
