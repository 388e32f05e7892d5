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

use std::collections::HashSet;

use crate::types::recency::RecencyEntry;
use crate::types::timestamp::Timestamp;

/// Storage key of the recent words log.
pub const RECENT_WORDS_KEY: &str = "recentWords";

/// Record an answer in the recent words log. The log is newest-first, holds
/// at most one entry per word, and is capped at `history_size`.
pub fn record(
    recency: &[RecencyEntry],
    word: &str,
    now: Timestamp,
    history_size: usize,
) -> Vec<RecencyEntry> {
    let entry = RecencyEntry {
        word: word.to_string(),
        timestamp: now,
    };
    std::iter::once(entry)
        .chain(recency.iter().filter(|e| e.word != word).cloned())
        .take(history_size)
        .collect()
}

/// Parse the persisted recent words log. A malformed log is discarded.
pub fn parse_history(raw: Option<&str>, history_size: usize) -> Vec<RecencyEntry> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let entries: Vec<RecencyEntry> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to parse recent words, starting with an empty log: {e}");
            return Vec::new();
        }
    };
    let mut seen: HashSet<String> = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.word.clone()))
        .take(history_size)
        .collect()
}
