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

//! The candidate → join → score pipeline.

use tracing::debug;
use tracing::debug_span;
use tracing::trace;

use crate::dataflow::ExecutionMode;
use crate::dataflow::KeyedIndex;
use crate::dataflow::inner_join;
use crate::dataflow::try_filter_map;
use crate::dataflow::try_flat_map;
use crate::dataflow::try_map;
use crate::error::Error;
use crate::itemset::FreqItemset;
use crate::itemset::Item;
use crate::itemset::ItemsetKey;
use crate::rules::candidate::Candidate;
use crate::rules::candidate::generate_candidates;
use crate::rules::rule::Rule;

/// Default minimum confidence a rule must reach to be returned.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.8;

/// Generates single-consequent association rules from frequent itemsets.
///
/// See [`crate::rules`] for an overview of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssociationRules {
    min_confidence: f64,
    execution_mode: ExecutionMode,
}

impl Default for AssociationRules {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            execution_mode: ExecutionMode::default(),
        }
    }
}

impl AssociationRules {
    /// Creates a generator with a minimum confidence of [`DEFAULT_MIN_CONFIDENCE`] that runs on
    /// the rayon thread pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum confidence.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument) unless
    /// `min_confidence` lies in `[0.0, 1.0]`.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&min_confidence) {
            return Err(
                Error::invalid_argument("minimum confidence must be in range [0, 1]")
                    .with_context("min_confidence", min_confidence),
            );
        }
        self.min_confidence = min_confidence;
        Ok(self)
    }

    /// Sets how the pipeline stages are executed.
    pub fn with_execution_mode(mut self, execution_mode: ExecutionMode) -> Self {
        self.execution_mode = execution_mode;
        self
    }

    /// Returns the minimum confidence.
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Returns the execution mode.
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }

    /// Generates every rule whose confidence is at least [`AssociationRules::min_confidence`].
    ///
    /// * `itemsets` - the frequent itemsets, each with its frequency.
    /// * `item_frequencies` - the frequency of every item, one record per item.
    /// * `total_item_count` - the denominator of the consequent's expected probability in
    ///   [`Rule::lift`].
    ///
    /// A candidate whose antecedent is not itself one of `itemsets`, or whose consequent is
    /// missing from `item_frequencies`, cannot be scored and is dropped without error. The order
    /// of the returned rules is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidData`](crate::error::ErrorKind::InvalidData) if an itemset
    /// repeats an item, if two itemsets hold the same items, or if an item has more than one
    /// frequency record. Returns
    /// [`ErrorKind::InvalidRule`](crate::error::ErrorKind::InvalidRule) if a surviving
    /// candidate cannot be turned into a [`Rule`], for instance because `total_item_count` is zero.
    pub fn run<T: Item>(
        &self,
        itemsets: &[FreqItemset<T>],
        item_frequencies: &[(T, u64)],
        total_item_count: u64,
    ) -> Result<Vec<Rule<T>>, Error> {
        let mode = self.execution_mode;
        let _span = debug_span!(
            "association_rules",
            min_confidence = self.min_confidence,
            itemsets = itemsets.len(),
            items = item_frequencies.len(),
            total_item_count,
        )
        .entered();

        let candidates = try_flat_map(itemsets, mode, |itemset| {
            let candidates = generate_candidates(itemset)?;
            Ok(candidates.into_iter().map(Candidate::into_keyed).collect())
        })?;
        debug!(candidates = candidates.len(), "generated rule candidates");

        let itemset_index = KeyedIndex::build(
            "itemsets",
            try_map(itemsets, mode, |itemset| Ok((itemset.key()?, itemset.freq())))?,
        )?;
        let item_index = KeyedIndex::build(
            "item_frequencies",
            item_frequencies
                .iter()
                .map(|(item, freq)| (ItemsetKey::singleton(item.clone()), *freq)),
        )?;
        debug!(
            itemset_keys = itemset_index.len(),
            item_keys = item_index.len(),
            "built frequency indexes"
        );

        // antecedent ⋈ itemsets, then re-key by the consequent as a singleton set.
        let num_candidates = candidates.len();
        let with_antecedent = inner_join(candidates, &itemset_index, mode);
        trace!(
            dropped = num_candidates - with_antecedent.len(),
            "dropped candidates without a frequent antecedent"
        );
        let by_consequent: Vec<_> = with_antecedent
            .into_iter()
            .map(|(antecedent, ((consequent, freq_union), freq_antecedent))| {
                (
                    ItemsetKey::singleton(consequent),
                    (antecedent, freq_union, freq_antecedent),
                )
            })
            .collect();

        let num_keyed = by_consequent.len();
        let scored = inner_join(by_consequent, &item_index, mode);
        trace!(
            dropped = num_keyed - scored.len(),
            "dropped candidates without a consequent frequency"
        );
        debug!(joined = scored.len(), "joined candidate frequencies");

        let min_confidence = self.min_confidence;
        let rules = try_filter_map(
            scored,
            mode,
            |(consequent, ((antecedent, freq_union, freq_antecedent), freq_consequent))| {
                let rule = Rule::new(
                    antecedent.into_vec(),
                    consequent.into_vec(),
                    freq_union,
                    freq_antecedent,
                    freq_consequent,
                    total_item_count,
                )?;
                Ok((rule.confidence() >= min_confidence).then_some(rule))
            },
        )?;
        debug!(rules = rules.len(), "generated association rules");
        Ok(rules)
    }
}
