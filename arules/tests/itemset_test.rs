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

use arules::error::ErrorKind;
use arules::itemset::FreqItemset;
use arules::itemset::ItemsetKey;
use arules::itemset::singleton_frequencies;

#[test]
fn test_itemset_accessors() {
    let itemset = FreqItemset::new(vec!["b", "a"], 12);
    assert_eq!(itemset.items(), &["b", "a"]);
    assert_eq!(itemset.freq(), 12);
    assert_eq!(itemset.len(), 2);
    assert!(!itemset.is_empty());
    assert!(FreqItemset::<u8>::new(vec![], 0).is_empty());
}

#[test]
fn test_key_is_order_independent() {
    let left = FreqItemset::new(vec![5, 1, 3], 2).key().unwrap();
    let right = FreqItemset::new(vec![3, 5, 1], 9).key().unwrap();
    assert_eq!(left, right);
    assert_eq!(left.items(), &[1, 3, 5]);
    assert_eq!(left.len(), 3);
    assert!(left.contains(&3));
    assert!(!left.contains(&4));
    assert_eq!(left.into_vec(), vec![1, 3, 5]);
}

#[test]
fn test_singleton_key_matches_one_item_itemset() {
    let key = FreqItemset::new(vec!["milk".to_string()], 4).key().unwrap();
    assert_eq!(key, ItemsetKey::singleton("milk".to_string()));
    assert_eq!(ItemsetKey::from_items(vec!["milk".to_string()]).unwrap(), key);
}

#[test]
fn test_key_rejects_duplicates() {
    let err = ItemsetKey::from_items(vec![2, 1, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert_eq!(err.context("item"), Some("2"));
}

#[test]
fn test_singleton_frequencies() {
    let itemsets = vec![
        FreqItemset::new(vec!['a', 'b'], 3),
        FreqItemset::new(vec!['a'], 5),
        FreqItemset::new(vec![], 9),
        FreqItemset::new(vec!['b'], 4),
    ];
    assert_eq!(singleton_frequencies(&itemsets), vec![('a', 5), ('b', 4)]);
}
