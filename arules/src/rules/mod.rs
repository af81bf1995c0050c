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

//! Association rules derived from frequent itemsets.
//!
//! # Overview
//!
//! An association rule `X => Y` states that transactions containing every item of the
//! antecedent `X` are likely to also contain the consequent `Y`. Given the frequent itemsets
//! produced by a miner such as FP-Growth, [`AssociationRules`] enumerates every rule whose
//! consequent is a single item and keeps those reaching a minimum confidence.
//!
//! Rules are generated in three stages:
//! 1. Every itemset `S` with frequency `f` is split into the candidates `S \ {x} => x` for each
//!    item `x` in `S`. Itemsets with a single item yield no candidate.
//! 2. Each candidate is joined against the itemsets on its antecedent, to recover the
//!    antecedent's own frequency, and then against the item frequencies on its consequent.
//!    Both joins are inner joins: a candidate whose antecedent was not mined as a frequent
//!    itemset, or whose consequent has no frequency record, is dropped.
//! 3. Each joined candidate becomes a [`Rule`] scored by
//!    * `confidence = f / freq(antecedent)`, and
//!    * `lift = confidence / (freq(consequent) / total_item_count)`,
//!
//!    and rules below the minimum confidence are filtered out. A rule whose confidence equals
//!    the minimum is kept.
//!
//! Join keys are [`ItemsetKey`](crate::itemset::ItemsetKey)s, the sorted items of a set, so
//! itemsets whose items were reported in different orders still match. Every stage works on
//! each record independently, which lets [`ExecutionMode::Parallel`](crate::ExecutionMode)
//! spread the work over the rayon thread pool.
//!
//! # Examples
//!
//! ```
//! # use arules::itemset::FreqItemset;
//! # use arules::rules::AssociationRules;
//! let itemsets = vec![
//!     FreqItemset::new(vec!["bread", "milk"], 10),
//!     FreqItemset::new(vec!["bread"], 20),
//!     FreqItemset::new(vec!["milk"], 15),
//! ];
//! let item_frequencies = vec![("bread", 20), ("milk", 15)];
//!
//! let rules = AssociationRules::new()
//!     .with_min_confidence(0.6)?
//!     .run(&itemsets, &item_frequencies, 100)?;
//! assert_eq!(rules.len(), 1);
//! assert_eq!(rules[0].antecedent(), &["milk"]);
//! assert_eq!(rules[0].consequent(), &["bread"]);
//! assert!((rules[0].confidence() - 10.0 / 15.0).abs() < 1e-12);
//! # Ok::<(), arules::error::Error>(())
//! ```

mod candidate;
mod generator;
mod rule;

pub use self::generator::AssociationRules;
pub use self::generator::DEFAULT_MIN_CONFIDENCE;
pub use self::rule::Rule;
