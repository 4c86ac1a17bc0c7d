// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Integration tests for shape module.

use super::*;
use std::sync::Arc;
use uuid::Uuid;

#[test]
fn test_full_workflow() {
    // 1. Build shape at runtime
    let sensor = Arc::new(
        ShapeBuilder::new("SensorReading")
            .field("sensor_id", ValueKind::U32)
            .field("temperature", ValueKind::F64)
            .field("humidity", ValueKind::F32)
            .field("timestamp", ValueKind::U64)
            .field("device", ValueKind::Guid)
            .text_field("location")
            .build(),
    );

    // 2. Create and populate data
    let device = Uuid::from_u128(7);
    let mut data = Instance::new(&sensor);
    data.set("sensor_id", 42u32).expect("set sensor_id");
    data.set("temperature", 23.5f64).expect("set temperature");
    data.set("humidity", 65.0f32).expect("set humidity");
    data.set("timestamp", 1702900000u64).expect("set timestamp");
    data.set("device", device).expect("set device");
    data.set("location", "Building A").expect("set location");

    // 3. Verify data
    assert_eq!(data.get::<u32>("sensor_id").unwrap(), 42);
    assert_eq!(data.get::<f64>("temperature").unwrap(), 23.5);
    assert_eq!(data.get::<f32>("humidity").unwrap(), 65.0);
    assert_eq!(data.get::<u64>("timestamp").unwrap(), 1702900000);
    assert_eq!(data.get::<Uuid>("device").unwrap(), device);
    assert_eq!(data.get::<String>("location").unwrap(), "Building A");

    // 4. Rebuild from raw value
    let copy = Instance::from_value(&sensor, data.value().clone()).expect("conforming");
    assert_eq!(copy, data);
}

#[test]
fn test_sequence_of_records() {
    let point = Arc::new(
        ShapeBuilder::new("Point")
            .field("x", ValueKind::I32)
            .field("y", ValueKind::I32)
            .build(),
    );
    let path = Arc::new(SequenceBuilder::of(point.clone()).named("Path").build());

    let mut data = Instance::new(&path);
    for i in 0..3 {
        let mut p = Instance::new(&point);
        p.set("x", i).expect("set x");
        p.set("y", i * 10).expect("set y");
        data.push(p).expect("push");
    }

    assert_eq!(data.len(), Ok(3));
    let xs: Vec<_> = data
        .elements()
        .map(|v| v.as_struct().and_then(|f| f[0].as_i32()))
        .collect();
    assert_eq!(xs, vec![Some(0), Some(1), Some(2)]);
    assert_eq!(data.element(2).unwrap().get::<i32>("y").unwrap(), 20);
}

#[test]
fn test_parameterized_shape_is_opaque() {
    let key = Arc::new(ShapeBuilder::new("Key").text_field("k").build());
    let set = Arc::new(Shape::parameterized("Set<Key>", "Set", vec![key]));
    assert!(set.is_parameterized());
    assert!(!set.is_sequence());

    let data = Instance::new(&set);
    assert!(data.get_field("k").is_err());
    assert!(data.element(0).is_err());
}

#[test]
fn test_shape_introspection() {
    let desc = ShapeBuilder::new("TestStruct")
        .field("a", ValueKind::I32)
        .field("b", ValueKind::F64)
        .text_field("c")
        .read_only_field("d", ValueKind::U8)
        .build();

    assert_eq!(desc.name, "TestStruct");
    assert!(desc.is_struct());

    let fields = desc.fields().unwrap();
    assert_eq!(fields.len(), 4);

    assert_eq!(desc.field_index("a"), Some(0));
    assert_eq!(desc.field_index("b"), Some(1));
    assert_eq!(desc.field_index("c"), Some(2));
    assert_eq!(desc.field_index("d"), Some(3));
    assert_eq!(desc.field_index("e"), None);
}

#[test]
fn test_unicode_text() {
    let desc = Arc::new(ShapeBuilder::new("Message").text_field("text").build());

    let mut data = Instance::new(&desc);
    data.set("text", "Hello 世界! [*]").unwrap();
    assert_eq!(data.get::<String>("text").unwrap(), "Hello 世界! [*]");
}
