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

//! Frequent itemsets and their canonical join keys.

use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::Error;

/// Item types that rules can be generated over.
///
/// Items must be hashable and totally ordered so that an itemset always has one canonical,
/// order-independent key, displayable so that every [`Rule`](crate::rules::Rule) has a
/// human-readable rendering, and thread-safe so that the pipeline stages can run on a worker
/// pool.
/// This trait is implemented for every type satisfying its bounds.
pub trait Item: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync {}

impl<T> Item for T where T: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync {}

/// A set of items that co-occur in the source transactions, with its occurrence count.
///
/// The items are kept in the order the miner produced them. Identity for joining is the set of
/// items, see [`FreqItemset::key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqItemset<T> {
    items: Vec<T>,
    freq: u64,
}

impl<T> FreqItemset<T> {
    /// Creates an itemset from its items and frequency.
    pub fn new(items: Vec<T>, freq: u64) -> Self {
        Self { items, freq }
    }

    /// Returns the items in their original order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of transactions containing every item of this itemset.
    pub fn freq(&self) -> u64 {
        self.freq
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the itemset holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Item> FreqItemset<T> {
    /// Returns the canonical key of this itemset.
    ///
    /// Two itemsets holding the same items in different orders have equal keys.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidData`](crate::error::ErrorKind::InvalidData) if an item
    /// appears more than once.
    pub fn key(&self) -> Result<ItemsetKey<T>, Error> {
        ItemsetKey::from_items(self.items.clone())
            .map_err(|err| err.with_context("freq", self.freq))
    }
}

/// Canonical, order-independent representation of a set of items.
///
/// The items are stored sorted ascending and free of duplicates, so equality and hashing follow
/// set semantics. Single items are represented as one-element keys, which lets itemsets and item
/// frequency records be looked up through the same index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemsetKey<T> {
    items: Box<[T]>,
}

impl<T: Item> ItemsetKey<T> {
    /// Builds a key from items in any order.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidData`](crate::error::ErrorKind::InvalidData) if an item
    /// appears more than once.
    pub fn from_items(mut items: Vec<T>) -> Result<Self, Error> {
        items.sort_unstable();
        if let Some(pair) = items.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(Error::invalid_data("itemset contains duplicate items")
                .with_context("item", format!("{:?}", pair[0])));
        }
        Ok(Self {
            items: items.into_boxed_slice(),
        })
    }

    /// Returns true if `item` is a member of this set.
    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// Returns the key obtained by removing the item at `index`.
    ///
    /// Removing one element keeps the remaining items sorted and unique.
    pub(crate) fn without(&self, index: usize) -> Self {
        let mut items = Vec::with_capacity(self.items.len().saturating_sub(1));
        items.extend_from_slice(&self.items[..index]);
        items.extend_from_slice(&self.items[index + 1..]);
        Self {
            items: items.into_boxed_slice(),
        }
    }
}

impl<T> ItemsetKey<T> {
    /// Builds the key of a single item.
    pub fn singleton(item: T) -> Self {
        Self {
            items: Box::new([item]),
        }
    }

    /// Returns the items in ascending order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the key holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the key, returning its sorted items.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

/// Derives an item frequency table from the single-item itemsets of a mining result.
///
/// Frequent-itemset miners report every frequent single item as a one-element itemset, so this
/// recovers the `(item, frequency)` records that [`AssociationRules::run`] joins against when no
/// separate item count table is at hand. Items that were not frequent are absent, and rules
/// with such a consequent are dropped by the join.
///
/// [`AssociationRules::run`]: crate::rules::AssociationRules::run
pub fn singleton_frequencies<T: Clone>(itemsets: &[FreqItemset<T>]) -> Vec<(T, u64)> {
    itemsets
        .iter()
        .filter_map(|itemset| match itemset.items() {
            [item] => Some((item.clone(), itemset.freq())),
            _ => None,
        })
        .collect()
}
