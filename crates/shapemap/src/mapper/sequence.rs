// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Element-wise plan between two ordered sequence shapes.

use crate::mapper::plan::{FieldBinding, ScalarPlan};
use crate::mapper::MapError;
use crate::shape::{Shape, Value};
use std::sync::Arc;

/// Applies one [`ScalarPlan`] to every element, index by index.
#[derive(Debug, Clone)]
pub struct SequencePlan {
    element: ScalarPlan,
    /// Destination bound.
    max_length: Option<usize>,
}

impl SequencePlan {
    pub(crate) fn derive(
        origin_element: &Arc<Shape>,
        destination_element: &Arc<Shape>,
        max_length: Option<usize>,
    ) -> Self {
        Self {
            element: ScalarPlan::derive(origin_element, destination_element),
            max_length,
        }
    }

    pub fn bindings(&self) -> Vec<FieldBinding> {
        self.element.bindings()
    }

    /// Map `origin[i]` to `output[i]` for every index.
    #[allow(clippy::needless_range_loop)]
    pub(crate) fn apply(&self, origin: &Value) -> Result<Value, MapError> {
        let items = origin.as_sequence().ok_or_else(|| {
            MapError::MalformedValue(format!(
                "expected a sequence of {}, got {}",
                self.element.origin().name,
                origin.describe()
            ))
        })?;

        let length = items.len();
        if let Some(max) = self.max_length {
            if length > max {
                return Err(MapError::SequenceTooLong { length, max });
            }
        }

        let mut out = Vec::with_capacity(length);
        for index in 0..length {
            out.push(self.element.apply(&items[index])?);
        }
        Ok(Value::Sequence(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{ShapeBuilder, ValueKind};

    fn plan(max_length: Option<usize>) -> SequencePlan {
        let origin = Arc::new(ShapeBuilder::new("O").field("n", ValueKind::U32).build());
        let destination = Arc::new(ShapeBuilder::new("D").text_field("n").build());
        SequencePlan::derive(&origin, &destination, max_length)
    }

    #[test]
    fn test_preserves_order_and_length() {
        let input = Value::Sequence((0..5u32).map(|n| Value::Struct(vec![Value::U32(n)])).collect());
        let out = plan(None).apply(&input).expect("apply");

        let texts: Vec<_> = out
            .as_sequence()
            .unwrap()
            .iter()
            .map(|v| v.as_struct().unwrap()[0].to_text())
            .collect();
        assert_eq!(texts, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_empty_sequence() {
        let out = plan(None).apply(&Value::Sequence(Vec::new())).unwrap();
        assert_eq!(out, Value::Sequence(Vec::new()));
    }

    #[test]
    fn test_bound_checked_before_building() {
        let input = Value::Sequence(vec![
            Value::Struct(vec![Value::U32(1)]),
            Value::Struct(vec![Value::U32(2)]),
            Value::Struct(vec![Value::U32(3)]),
        ]);
        assert_eq!(
            plan(Some(2)).apply(&input),
            Err(MapError::SequenceTooLong { length: 3, max: 2 })
        );
        assert!(plan(Some(3)).apply(&input).is_ok());
    }

    #[test]
    fn test_malformed_element_fails_whole_sequence() {
        let input = Value::Sequence(vec![
            Value::Struct(vec![Value::U32(1)]),
            Value::Bool(true),
        ]);
        assert!(matches!(
            plan(None).apply(&input),
            Err(MapError::MalformedValue(_))
        ));
        assert!(matches!(
            plan(None).apply(&Value::Struct(Vec::new())),
            Err(MapError::MalformedValue(_))
        ));
    }
}
