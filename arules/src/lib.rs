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

//! # arules
//!
//! Association rule generation for frequent-itemset mining.
//!
//! Given the frequent itemsets mined from a transaction corpus, the per-item frequencies and the
//! total item count, this crate derives every rule `antecedent => item` whose confidence reaches
//! a configured threshold, and scores it by confidence and lift. See [`rules`] for the algorithm.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

mod dataflow;

pub mod error;
pub mod itemset;
pub mod rules;

pub use self::dataflow::ExecutionMode;
