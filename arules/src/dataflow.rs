// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Data-parallel collection operations used by the rule pipeline.
//!
//! The pipeline is written against a handful of bulk operations: fallible map, fallible
//! filter-map and an inner equi-join against a keyed lookup table. Each operation runs either on
//! the rayon worker pool or on the calling thread; both modes produce the same multiset of
//! results, only the element order may differ.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

use rayon::prelude::*;

use crate::error::Error;

/// How the pipeline stages are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Split each stage across the rayon global thread pool.
    #[default]
    Parallel,
    /// Run every stage on the calling thread.
    Sequential,
}

/// Applies a fallible function to every element, stopping at the first error.
pub(crate) fn try_map<T, U, F>(input: &[T], mode: ExecutionMode, f: F) -> Result<Vec<U>, Error>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Result<U, Error> + Sync + Send,
{
    match mode {
        ExecutionMode::Parallel => input.par_iter().map(f).collect(),
        ExecutionMode::Sequential => input.iter().map(f).collect(),
    }
}

/// Applies a fallible function producing zero or more outputs per element, then flattens.
pub(crate) fn try_flat_map<T, U, F>(
    input: &[T],
    mode: ExecutionMode,
    f: F,
) -> Result<Vec<U>, Error>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> Result<Vec<U>, Error> + Sync + Send,
{
    let nested = try_map(input, mode, f)?;
    Ok(match mode {
        ExecutionMode::Parallel => nested.into_par_iter().flatten().collect(),
        ExecutionMode::Sequential => nested.into_iter().flatten().collect(),
    })
}

/// Consumes the input, keeping the `Some` outputs of a fallible function.
pub(crate) fn try_filter_map<T, U, F>(
    input: Vec<T>,
    mode: ExecutionMode,
    f: F,
) -> Result<Vec<U>, Error>
where
    T: Send,
    U: Send,
    F: Fn(T) -> Result<Option<U>, Error> + Sync + Send,
{
    match mode {
        ExecutionMode::Parallel => input
            .into_par_iter()
            .filter_map(|value| f(value).transpose())
            .collect(),
        ExecutionMode::Sequential => input
            .into_iter()
            .filter_map(|value| f(value).transpose())
            .collect(),
    }
}

/// Build side of a hash equi-join: a lookup table with unique keys.
#[derive(Debug, Clone)]
pub(crate) struct KeyedIndex<K, V> {
    table: HashMap<K, V>,
}

impl<K, V> KeyedIndex<K, V>
where
    K: Eq + Hash + Debug,
{
    /// Builds an index from `(key, value)` pairs.
    ///
    /// `name` identifies the source table in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidData`](crate::error::ErrorKind::InvalidData) if a key occurs
    /// more than once.
    pub fn build(
        name: &'static str,
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, Error> {
        let pairs = pairs.into_iter();
        let mut table = HashMap::with_capacity(pairs.size_hint().0);
        for (key, value) in pairs {
            match table.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(Error::invalid_data("duplicate join key")
                        .with_context("table", name)
                        .with_context("key", format!("{:?}", entry.key())));
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
        Ok(Self { table })
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.table.get(key)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }
}

/// Inner equi-join of a keyed probe collection against an index.
///
/// Every probe row whose key is present in `index` is emitted once, paired with the indexed
/// value. Rows without a match are dropped.
pub(crate) fn inner_join<K, L, V>(
    probe: Vec<(K, L)>,
    index: &KeyedIndex<K, V>,
    mode: ExecutionMode,
) -> Vec<(K, (L, V))>
where
    K: Eq + Hash + Debug + Send + Sync,
    L: Send,
    V: Clone + Send + Sync,
{
    let lookup = |(key, left): (K, L)| {
        let right = index.get(&key)?.clone();
        Some((key, (left, right)))
    };
    match mode {
        ExecutionMode::Parallel => probe.into_par_iter().filter_map(lookup).collect(),
        ExecutionMode::Sequential => probe.into_iter().filter_map(lookup).collect(),
    }
}
