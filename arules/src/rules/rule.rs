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

//! Association rule value object.

use std::fmt;

use crate::error::Error;
use crate::itemset::Item;
use crate::itemset::ItemsetKey;

/// An association rule `antecedent => consequent`.
///
/// A rule carries the raw counts it was derived from; [`Rule::confidence`], [`Rule::lift`] and
/// [`Rule::support`] are recomputed from them on every call. Rules are immutable once built.
///
/// The `Display` rendering lists both sides, the three frequencies, confidence and lift.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule<T> {
    antecedent: Vec<T>,
    consequent: Vec<T>,
    freq_union: u64,
    freq_antecedent: u64,
    freq_consequent: u64,
    total_item_count: u64,
}

impl<T: Item> Rule<T> {
    /// Creates a rule from its two sides and the counts needed to score it.
    ///
    /// Both sides are sets: their items may be given in any order and are stored sorted, so two
    /// rules over the same sets compare equal.
    ///
    /// * `freq_union` - frequency of the itemset `antecedent ∪ consequent`.
    /// * `freq_antecedent` - frequency of the antecedent alone.
    /// * `freq_consequent` - frequency of the consequent alone.
    /// * `total_item_count` - denominator of the consequent's expected probability.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidRule`](crate::error::ErrorKind::InvalidRule) if either side
    /// repeats an item, if the two sides share an item (the shared items are listed under the
    /// `overlap` context key), if the consequent is empty, or if any of the denominators is
    /// zero.
    pub fn new(
        antecedent: Vec<T>,
        consequent: Vec<T>,
        freq_union: u64,
        freq_antecedent: u64,
        freq_consequent: u64,
        total_item_count: u64,
    ) -> Result<Self, Error> {
        let antecedent = canonical_side("antecedent", antecedent)?;
        let consequent = canonical_side("consequent", consequent)?;
        let overlap: Vec<&T> = consequent
            .items()
            .iter()
            .filter(|item| antecedent.contains(*item))
            .collect();
        if !overlap.is_empty() {
            return Err(
                Error::invalid_rule("antecedent and consequent must be disjoint")
                    .with_context("antecedent", format!("{:?}", antecedent.items()))
                    .with_context("consequent", format!("{:?}", consequent.items()))
                    .with_context("overlap", format!("{overlap:?}")),
            );
        }
        if consequent.is_empty() {
            return Err(Error::invalid_rule("consequent must not be empty"));
        }
        for (name, value) in [
            ("freq_antecedent", freq_antecedent),
            ("freq_consequent", freq_consequent),
            ("total_item_count", total_item_count),
        ] {
            if value == 0 {
                return Err(Error::invalid_rule("rule denominators must be positive")
                    .with_context(name, value));
            }
        }
        Ok(Self {
            antecedent: antecedent.into_vec(),
            consequent: consequent.into_vec(),
            freq_union,
            freq_antecedent,
            freq_consequent,
            total_item_count,
        })
    }
}

fn canonical_side<T: Item>(side: &'static str, items: Vec<T>) -> Result<ItemsetKey<T>, Error> {
    ItemsetKey::from_items(items).map_err(|err| {
        Error::invalid_rule(format!("{side} must not repeat an item"))
            .with_context("item", err.context("item").unwrap_or_default())
    })
}

impl<T> Rule<T> {
    /// Returns the items on the "if" side, in ascending order.
    pub fn antecedent(&self) -> &[T] {
        &self.antecedent
    }

    /// Returns the items on the "then" side, in ascending order.
    pub fn consequent(&self) -> &[T] {
        &self.consequent
    }

    /// Returns the frequency of `antecedent ∪ consequent`.
    pub fn freq_union(&self) -> u64 {
        self.freq_union
    }

    /// Returns the frequency of the antecedent alone.
    pub fn freq_antecedent(&self) -> u64 {
        self.freq_antecedent
    }

    /// Returns the frequency of the consequent alone.
    pub fn freq_consequent(&self) -> u64 {
        self.freq_consequent
    }

    /// Returns the total item count the rule was scored against.
    pub fn total_item_count(&self) -> u64 {
        self.total_item_count
    }

    /// Returns the confidence `freq_union / freq_antecedent`.
    ///
    /// This estimates `P(consequent | antecedent)`. It only exceeds one if the input counts are
    /// inconsistent with each other.
    pub fn confidence(&self) -> f64 {
        self.freq_union as f64 / self.freq_antecedent as f64
    }

    /// Returns the lift `confidence / (freq_consequent / total_item_count)`.
    ///
    /// Values above one indicate that antecedent and consequent occur together more often than
    /// they would if they were independent.
    pub fn lift(&self) -> f64 {
        self.confidence() / (self.freq_consequent as f64 / self.total_item_count as f64)
    }

    /// Returns the support `freq_union / total_item_count`.
    pub fn support(&self) -> f64 {
        self.freq_union as f64 / self.total_item_count as f64
    }
}

impl<T: fmt::Display> fmt::Display for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, &self.antecedent)?;
        write!(f, " => ")?;
        write_items(f, &self.consequent)?;
        write!(
            f,
            ": (freq_union: {}, freq_antecedent: {}, freq_consequent: {}, confidence: {}, lift: {})",
            self.freq_union,
            self.freq_antecedent,
            self.freq_consequent,
            self.confidence(),
            self.lift()
        )
    }
}

fn write_items<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "}}")
}
