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

#![allow(dead_code)]

use std::collections::HashMap;
use std::collections::HashSet;
use std::hash::Hash;

use arules::itemset::FreqItemset;
use arules::rules::Rule;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn itemsets<T>(rows: Vec<(Vec<T>, u64)>) -> Vec<FreqItemset<T>> {
    rows.into_iter()
        .map(|(items, freq)| FreqItemset::new(items, freq))
        .collect()
}

pub fn rule_set<T: Eq + Hash>(rules: Vec<Rule<T>>) -> HashSet<Rule<T>> {
    let len = rules.len();
    let set: HashSet<_> = rules.into_iter().collect();
    assert_eq!(set.len(), len, "duplicate rules in output");
    set
}

pub fn find_rule<'a, T: PartialEq>(
    rules: &'a [Rule<T>],
    antecedent: &[T],
    consequent: &[T],
) -> Option<&'a Rule<T>> {
    rules
        .iter()
        .find(|rule| rule.antecedent() == antecedent && rule.consequent() == consequent)
}

/// A random transaction corpus mined exhaustively.
pub struct MinedCorpus {
    pub num_transactions: u64,
    /// Support count of every itemset (sorted items) occurring at least `min_count` times.
    pub frequent: HashMap<Vec<u32>, u64>,
    /// Occurrence count of every item.
    pub item_counts: HashMap<u32, u64>,
}

impl MinedCorpus {
    pub fn generate(seed: u64, num_transactions: usize, num_items: u32, min_count: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counts: HashMap<Vec<u32>, u64> = HashMap::new();
        let mut item_counts: HashMap<u32, u64> = HashMap::new();
        for _ in 0..num_transactions {
            let transaction: Vec<u32> = (0..num_items).filter(|_| rng.random_bool(0.35)).collect();
            for item in &transaction {
                *item_counts.entry(*item).or_default() += 1;
            }
            for mask in 1u32..(1 << transaction.len()) {
                let subset: Vec<u32> = transaction
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, item)| *item)
                    .collect();
                *counts.entry(subset).or_default() += 1;
            }
        }
        counts.retain(|_, count| *count >= min_count);
        Self {
            num_transactions: num_transactions as u64,
            frequent: counts,
            item_counts,
        }
    }

    /// Itemsets with their items in descending order, so that keys must be canonicalized.
    pub fn itemsets(&self) -> Vec<FreqItemset<u32>> {
        self.frequent
            .iter()
            .map(|(items, freq)| {
                let mut items = items.clone();
                items.reverse();
                FreqItemset::new(items, *freq)
            })
            .collect()
    }

    pub fn item_frequencies(&self) -> Vec<(u32, u64)> {
        self.item_counts.iter().map(|(k, v)| (*k, *v)).collect()
    }

    /// Rules computed directly from the mined counts.
    pub fn expected_rules(&self, min_confidence: f64) -> HashSet<Rule<u32>> {
        let mut rules = HashSet::new();
        for (items, freq_union) in &self.frequent {
            if items.len() < 2 {
                continue;
            }
            for (i, consequent) in items.iter().enumerate() {
                let mut antecedent = items.clone();
                antecedent.remove(i);
                let freq_antecedent = self.frequent[&antecedent];
                let freq_consequent = self.item_counts[consequent];
                let rule = Rule::new(
                    antecedent,
                    vec![*consequent],
                    *freq_union,
                    freq_antecedent,
                    freq_consequent,
                    self.num_transactions,
                )
                .unwrap();
                if rule.confidence() >= min_confidence {
                    rules.insert(rule);
                }
            }
        }
        rules
    }
}
