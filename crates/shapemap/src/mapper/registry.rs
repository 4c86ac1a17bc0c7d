// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry of compiled shape-pair mappings.
//!
//! Entries are inserted once per `(origin, destination)` pair and never
//! removed. Each entry carries a build-once cell: the conversion procedure
//! is built on first use (or at registration in eager mode) and reused by
//! every later translation, from any thread.
//!
//! # Concurrency
//!
//! - `DashMap` sharding: registrations of different pairs do not contend on
//!   a global lock; registrations of the same pair serialize on the entry API.
//! - `OnceLock`: the build runs at most once per entry even when many threads
//!   translate the pair concurrently for the first time.
//! - Entries are cloned out as `Arc` before the build, so no shard lock is
//!   held while compiling or invoking.

use crate::config::{CompileMode, MapperConfig};
use crate::mapper::plan::FieldBinding;
use crate::mapper::procedure::{self, ConversionProcedure, Route};
use crate::mapper::MapError;
use crate::shape::{Instance, Shape, Shaped};
use arc_swap::ArcSwap;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Registry key: origin and destination shapes in their roles.
///
/// Equality and hashing are structural over both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapePair {
    pub origin: Arc<Shape>,
    pub destination: Arc<Shape>,
}

impl ShapePair {
    pub fn new(origin: &Arc<Shape>, destination: &Arc<Shape>) -> Self {
        Self {
            origin: Arc::clone(origin),
            destination: Arc::clone(destination),
        }
    }
}

impl fmt::Display for ShapePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin.name, self.destination.name)
    }
}

/// A registered pair and its deferred procedure.
#[derive(Debug)]
pub struct RegistryEntry {
    pair: ShapePair,
    route: Route,
    procedure: OnceLock<ConversionProcedure>,
}

impl RegistryEntry {
    fn new(pair: ShapePair, route: Route) -> Self {
        Self {
            pair,
            route,
            procedure: OnceLock::new(),
        }
    }

    pub fn pair(&self) -> &ShapePair {
        &self.pair
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// True once the procedure has been built.
    pub fn is_compiled(&self) -> bool {
        self.procedure.get().is_some()
    }

    /// Force the procedure, building it on first call.
    fn procedure(&self, compilations: &AtomicU64) -> &ConversionProcedure {
        self.procedure.get_or_init(|| {
            compilations.fetch_add(1, Ordering::Relaxed);
            let procedure =
                ConversionProcedure::build(&self.route, &self.pair.origin, &self.pair.destination);
            log::debug!(
                "[mapper] compiled {} ({} bound fields)",
                self.pair,
                procedure.bindings().len()
            );
            procedure
        })
    }
}

/// Registry counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Successful registrations.
    pub registered: u64,
    /// Procedures built.
    pub compilations: u64,
    /// Translations that found an entry.
    pub hits: u64,
    /// Translations of unregistered pairs.
    pub misses: u64,
}

#[derive(Debug, Default)]
struct Counters {
    registered: AtomicU64,
    compilations: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Cache of conversion procedures keyed by shape pair.
///
/// Create one per process or session and share it (`Arc<MapperRegistry>`);
/// all methods take `&self`.
pub struct MapperRegistry {
    entries: DashMap<ShapePair, Arc<RegistryEntry>>,
    config: ArcSwap<MapperConfig>,
    counters: Counters,
}

impl MapperRegistry {
    /// Create an empty registry with default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    /// Create an empty registry.
    #[must_use]
    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            entries: DashMap::new(),
            config: ArcSwap::from_pointee(config),
            counters: Counters::default(),
        }
    }

    /// Current config.
    #[must_use]
    pub fn config(&self) -> MapperConfig {
        MapperConfig::clone(&self.config.load())
    }

    /// Replace the config. Applies to later calls; entries already
    /// registered keep their state.
    pub fn set_config(&self, config: MapperConfig) {
        self.config.store(Arc::new(config));
    }

    /// Register a shape pair.
    ///
    /// The pair is classified and validated here; errors surface to the
    /// caller and nothing is inserted. The procedure itself is built later
    /// unless the config asks for [`CompileMode::Eager`].
    pub fn register(&self, origin: &Arc<Shape>, destination: &Arc<Shape>) -> Result<(), MapError> {
        let route = procedure::analyze(origin, destination).map_err(|e| {
            log::warn!(
                "[mapper] rejected {} -> {}: {}",
                origin.name,
                destination.name,
                e
            );
            e
        })?;

        let pair = ShapePair::new(origin, destination);
        let entry = match self.entries.entry(pair.clone()) {
            Entry::Occupied(_) => {
                log::warn!("[mapper] duplicate registration of {}", pair);
                return Err(MapError::AlreadyRegistered {
                    origin: origin.name.clone(),
                    destination: destination.name.clone(),
                });
            }
            Entry::Vacant(slot) => {
                let entry = Arc::new(RegistryEntry::new(pair, route));
                slot.insert(Arc::clone(&entry));
                entry
            }
        };

        self.counters.registered.fetch_add(1, Ordering::Relaxed);
        log::debug!("[mapper] registered {}", entry.pair);

        if self.config.load().compile_mode == CompileMode::Eager {
            entry.procedure(&self.counters.compilations);
        }
        Ok(())
    }

    /// Translate `value` from `origin` to `destination`.
    ///
    /// Returns `Ok(None)` when the pair was never registered. Errors are
    /// reserved for instances that do not fit the registered origin.
    pub fn translate(
        &self,
        origin: &Arc<Shape>,
        destination: &Arc<Shape>,
        value: &Instance,
    ) -> Result<Option<Instance>, MapError> {
        let Some(entry) = self.lookup(origin, destination) else {
            self.counters.misses.fetch_add(1, Ordering::Relaxed);
            log::trace!(
                "[mapper] no mapping registered for {} -> {}",
                origin.name,
                destination.name
            );
            return Ok(None);
        };
        self.counters.hits.fetch_add(1, Ordering::Relaxed);

        if self.config.load().verify_instances
            && !Arc::ptr_eq(value.shape(), origin)
            && value.shape() != origin
        {
            return Err(MapError::InstanceShapeMismatch {
                expected: origin.name.clone(),
                got: value.type_name().to_string(),
            });
        }

        entry
            .procedure(&self.counters.compilations)
            .invoke(value)
            .map(Some)
    }

    /// Translate using the instance's own shape as origin.
    pub fn translate_instance(
        &self,
        value: &Instance,
        destination: &Arc<Shape>,
    ) -> Result<Option<Instance>, MapError> {
        self.translate(value.shape(), destination, value)
    }

    /// Register the shapes of two host types.
    pub fn create_map<O: Shaped, D: Shaped>(&self) -> Result<(), MapError> {
        self.register(&O::shape(), &D::shape())
    }

    /// Translate a host value into another host type.
    ///
    /// `Ok(None)` when `create_map::<O, D>()` was never called.
    pub fn map<O: Shaped, D: Shaped>(&self, origin: &O) -> Result<Option<D>, MapError> {
        let instance = origin.to_instance();
        match self.translate_instance(&instance, &D::shape())? {
            Some(out) => Ok(Some(D::from_instance(&out)?)),
            None => Ok(None),
        }
    }

    /// Field bindings of a registered pair (builds it if needed).
    pub fn bindings(
        &self,
        origin: &Arc<Shape>,
        destination: &Arc<Shape>,
    ) -> Option<Vec<FieldBinding>> {
        let entry = self.lookup(origin, destination)?;
        Some(entry.procedure(&self.counters.compilations).bindings())
    }

    /// Registry entry for a pair, if registered.
    pub fn entry(&self, origin: &Arc<Shape>, destination: &Arc<Shape>) -> Option<Arc<RegistryEntry>> {
        self.lookup(origin, destination)
    }

    #[must_use]
    pub fn contains(&self, origin: &Arc<Shape>, destination: &Arc<Shape>) -> bool {
        self.entries
            .contains_key(&ShapePair::new(origin, destination))
    }

    /// Number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            registered: self.counters.registered.load(Ordering::Relaxed),
            compilations: self.counters.compilations.load(Ordering::Relaxed),
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
        }
    }

    fn lookup(&self, origin: &Arc<Shape>, destination: &Arc<Shape>) -> Option<Arc<RegistryEntry>> {
        self.entries
            .get(&ShapePair::new(origin, destination))
            .map(|e| Arc::clone(e.value()))
    }
}

impl Default for MapperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperRegistry")
            .field("entries", &self.entries.len())
            .field("config", &self.config())
            .field("stats", &self.stats())
            .finish()
    }
}
