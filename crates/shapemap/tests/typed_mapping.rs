// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test/bench code readability over pedantic
#![allow(clippy::cast_possible_truncation)] // Test parameters
#![allow(clippy::missing_panics_doc)] // Tests/examples panic on failure
#![allow(clippy::missing_errors_doc)] // Test documentation

//! Typed mapping integration tests
//!
//! Host structs describe themselves through `Shaped` and are mapped through
//! the public registry API.

use shapemap::shape::{Instance, InstanceError, ShapeBuilder};
use shapemap::{MapError, MapperRegistry, Shape, Shaped, ValueKind};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: i32,
    id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
struct PersonDto {
    name: String,
    age: i32,
    id: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Badge {
    id: String,
    nickname: String,
}

impl Shaped for Person {
    fn shape() -> Arc<Shape> {
        Arc::new(
            ShapeBuilder::new("Person")
                .text_field("Name")
                .field("Age", ValueKind::I32)
                .field("Id", ValueKind::Guid)
                .build(),
        )
    }

    fn to_instance(&self) -> Instance {
        let mut instance = Instance::new(&Self::shape());
        let _ = instance.set("Name", self.name.as_str());
        let _ = instance.set("Age", self.age);
        let _ = instance.set("Id", self.id);
        instance
    }

    fn from_instance(instance: &Instance) -> Result<Self, InstanceError> {
        Ok(Self {
            name: instance.get("Name")?,
            age: instance.get("Age")?,
            id: instance.get("Id")?,
        })
    }
}

impl Shaped for PersonDto {
    fn shape() -> Arc<Shape> {
        Arc::new(
            ShapeBuilder::new("PersonDto")
                .text_field("Name")
                .field("Age", ValueKind::I32)
                .text_field("Id")
                .build(),
        )
    }

    fn to_instance(&self) -> Instance {
        let mut instance = Instance::new(&Self::shape());
        let _ = instance.set("Name", self.name.as_str());
        let _ = instance.set("Age", self.age);
        let _ = instance.set("Id", self.id.as_str());
        instance
    }

    fn from_instance(instance: &Instance) -> Result<Self, InstanceError> {
        Ok(Self {
            name: instance.get("Name")?,
            age: instance.get("Age")?,
            id: instance.get("Id")?,
        })
    }
}

impl Shaped for Badge {
    fn shape() -> Arc<Shape> {
        Arc::new(
            ShapeBuilder::new("Badge")
                .text_field("Id")
                .text_field("Nickname")
                .build(),
        )
    }

    fn to_instance(&self) -> Instance {
        let mut instance = Instance::new(&Self::shape());
        let _ = instance.set("Id", self.id.as_str());
        let _ = instance.set("Nickname", self.nickname.as_str());
        instance
    }

    fn from_instance(instance: &Instance) -> Result<Self, InstanceError> {
        Ok(Self {
            id: instance.get("Id")?,
            nickname: instance.get("Nickname")?,
        })
    }
}

fn sample(n: u128) -> Person {
    Person {
        name: format!("person-{}", n),
        age: n as i32 * 10,
        id: Uuid::from_u128(n),
    }
}

#[test]
fn test_map_single() {
    let registry = MapperRegistry::new();
    registry.create_map::<Person, PersonDto>().expect("create_map");

    let p = sample(5);
    let dto: PersonDto = registry
        .map::<Person, PersonDto>(&p)
        .expect("map")
        .expect("registered");

    assert_eq!(
        dto,
        PersonDto {
            name: p.name.clone(),
            age: p.age,
            id: p.id.to_string(),
        }
    );
}

#[test]
fn test_map_sequence() {
    let registry = MapperRegistry::new();
    registry
        .create_map::<Vec<Person>, Vec<PersonDto>>()
        .expect("create_map");

    let people = vec![sample(1), sample(2)];
    let dtos = registry
        .map::<Vec<Person>, Vec<PersonDto>>(&people)
        .expect("map")
        .expect("registered");

    assert_eq!(dtos.len(), 2);
    assert_eq!(dtos[0].name, "person-1");
    assert_eq!(dtos[1].name, "person-2");
    assert_eq!(dtos[1].id, Uuid::from_u128(2).to_string());
}

#[test]
fn test_unregistered_is_none() {
    let registry = MapperRegistry::new();
    registry.create_map::<Person, PersonDto>().expect("create_map");

    // Registered in one direction only.
    let back = registry
        .map::<PersonDto, Person>(&PersonDto {
            name: "x".into(),
            age: 1,
            id: "y".into(),
        })
        .expect("soft miss");
    assert!(back.is_none());

    // Scalar registration does not cover sequences.
    let none = registry
        .map::<Vec<Person>, Vec<PersonDto>>(&vec![sample(1)])
        .expect("soft miss");
    assert!(none.is_none());
}

#[test]
fn test_missing_fields_keep_defaults() {
    let registry = MapperRegistry::new();
    registry.create_map::<Person, Badge>().expect("create_map");

    let badge = registry
        .map::<Person, Badge>(&sample(9))
        .expect("map")
        .expect("registered");
    assert_eq!(badge.id, Uuid::from_u128(9).to_string());
    assert_eq!(badge.nickname, "");
}

#[test]
fn test_duplicate_create_map() {
    let registry = MapperRegistry::new();
    registry.create_map::<Person, PersonDto>().expect("first");
    assert!(matches!(
        registry.create_map::<Person, PersonDto>(),
        Err(MapError::AlreadyRegistered { .. })
    ));
}

#[test]
fn test_mixed_scalar_and_sequence_rejected() {
    let registry = MapperRegistry::new();
    assert!(matches!(
        registry.create_map::<Person, Vec<PersonDto>>(),
        Err(MapError::IncompatibleShapes { .. })
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(MapperRegistry::new());
    registry.create_map::<Person, PersonDto>().expect("create_map");

    let handles: Vec<_> = (0..4u128)
        .map(|n| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .map::<Person, PersonDto>(&sample(n))
                    .expect("map")
                    .expect("registered")
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let dto = handle.join().expect("thread");
        assert_eq!(dto.age, n as i32 * 10);
    }
    assert_eq!(registry.stats().compilations, 1);
}
