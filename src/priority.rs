// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::progress::ProgressEntry;

/// Order words by study priority, lowest score first. The head of the result
/// is the current card.
///
/// The sort is stable: words with equal scores keep the order they had
/// before, so re-sorting never shuffles cards the user hasn't touched.
pub fn sort_entries(mut entries: Vec<ProgressEntry>) -> Vec<ProgressEntry> {
    entries.sort_by_key(|entry| entry.score());
    entries
}
