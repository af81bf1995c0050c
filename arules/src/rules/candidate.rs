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

//! Rule candidate generation.

use crate::error::Error;
use crate::itemset::FreqItemset;
use crate::itemset::Item;
use crate::itemset::ItemsetKey;

/// A single-consequent split of a frequent itemset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate<T> {
    pub antecedent: ItemsetKey<T>,
    pub consequent: T,
    /// Frequency of `antecedent ∪ {consequent}`, i.e. of the itemset the candidate came from.
    pub freq_union: u64,
}

impl<T> Candidate<T> {
    /// Keys the candidate by its antecedent for the antecedent frequency join.
    pub fn into_keyed(self) -> (ItemsetKey<T>, (T, u64)) {
        (self.antecedent, (self.consequent, self.freq_union))
    }
}

/// Splits an itemset into every `(itemset \ {x}) => x` candidate.
///
/// Itemsets with fewer than two items produce nothing since the antecedent would be empty.
pub(crate) fn generate_candidates<T: Item>(
    itemset: &FreqItemset<T>,
) -> Result<Vec<Candidate<T>>, Error> {
    if itemset.len() < 2 {
        return Ok(vec![]);
    }
    let key = itemset.key()?;
    let candidates = key
        .items()
        .iter()
        .enumerate()
        .map(|(index, consequent)| Candidate {
            antecedent: key.without(index),
            consequent: consequent.clone(),
            freq_union: itemset.freq(),
        })
        .collect();
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn key(items: &[&'static str]) -> ItemsetKey<&'static str> {
        ItemsetKey::from_items(items.to_vec()).unwrap()
    }

    #[test]
    fn test_single_item_itemset_yields_nothing() {
        let itemset = FreqItemset::new(vec!["a"], 7);
        assert!(generate_candidates(&itemset).unwrap().is_empty());
        let empty = FreqItemset::<&str>::new(vec![], 7);
        assert!(generate_candidates(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_each_item_becomes_consequent_once() {
        let itemset = FreqItemset::new(vec!["c", "a", "b"], 4);
        let candidates = generate_candidates(&itemset).unwrap();
        assert_eq!(
            candidates,
            vec![
                Candidate {
                    antecedent: key(&["b", "c"]),
                    consequent: "a",
                    freq_union: 4,
                },
                Candidate {
                    antecedent: key(&["a", "c"]),
                    consequent: "b",
                    freq_union: 4,
                },
                Candidate {
                    antecedent: key(&["a", "b"]),
                    consequent: "c",
                    freq_union: 4,
                },
            ]
        );
        for candidate in &candidates {
            assert!(!candidate.antecedent.contains(&candidate.consequent));
        }
    }

    #[test]
    fn test_antecedent_key_ignores_input_order() {
        let left = generate_candidates(&FreqItemset::new(vec![3, 1, 2], 1)).unwrap();
        let right = generate_candidates(&FreqItemset::new(vec![2, 3, 1], 1)).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn test_duplicate_items_are_rejected() {
        let err = generate_candidates(&FreqItemset::new(vec!["a", "b", "a"], 2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(err.context("item"), Some("\"a\""));
        assert_eq!(err.context("freq"), Some("2"));
    }
}
