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

use std::collections::HashMap;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::progress::MAX_READ_COUNT;
use crate::types::progress::ProgressEntry;

/// Storage key of the progress list.
pub const STORED_WORDS_KEY: &str = "storedWords";

/// Combine the persisted progress with the current dataset.
///
/// The result has exactly one entry per dataset word, in dataset order. Words
/// with persisted progress keep it as-is; words without it start fresh.
/// Persisted words that are no longer in the dataset are dropped. If the
/// persisted blob can't be parsed, or holds an out-of-range read count, it is
/// ignored entirely.
pub fn merge(ids: &[&str], persisted: Option<&str>) -> Vec<ProgressEntry> {
    let mut persisted: HashMap<String, ProgressEntry> = match persisted.map(parse_progress) {
        Some(Ok(entries)) => entries
            .into_iter()
            .map(|entry| (entry.word.clone(), entry))
            .collect(),
        Some(Err(e)) => {
            log::warn!("Failed to parse stored words, starting fresh: {}", e.message());
            HashMap::new()
        }
        None => HashMap::new(),
    };
    let merged: Vec<ProgressEntry> = ids
        .iter()
        .map(|id| {
            persisted
                .remove(*id)
                .unwrap_or_else(|| ProgressEntry::new(*id))
        })
        .collect();
    if !persisted.is_empty() {
        log::info!(
            "Dropping progress for {} words no longer in the dataset.",
            persisted.len()
        );
    }
    merged
}

fn parse_progress(raw: &str) -> Fallible<Vec<ProgressEntry>> {
    let entries: Vec<ProgressEntry> = serde_json::from_str(raw)?;
    if let Some(entry) = entries.iter().find(|e| e.read_count > MAX_READ_COUNT) {
        return fail(format!(
            "read count {} for '{}' is out of range.",
            entry.read_count, entry.word
        ));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::sort_entries;
    use crate::types::know::Know;

    fn words(entries: &[ProgressEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_no_persisted_state() {
        let merged = merge(&["a", "b"], None);
        assert_eq!(merged, vec![ProgressEntry::new("a"), ProgressEntry::new("b")]);
    }

    #[test]
    fn test_persisted_entries_are_kept() {
        let persisted = r#"[
            {"word": "b", "know": true, "readCount": 4},
            {"word": "gone", "know": false, "readCount": 9}
        ]"#;
        let merged = merge(&["a", "b", "c"], Some(persisted));
        assert_eq!(words(&merged), vec!["a", "b", "c"]);
        assert_eq!(merged[0], ProgressEntry::new("a"));
        assert_eq!(merged[1].know, Know::Known);
        assert_eq!(merged[1].read_count, 4);
        assert_eq!(merged[2], ProgressEntry::new("c"));
    }

    #[test]
    fn test_malformed_falls_back_entirely() {
        // The first entry is fine, the second isn't: nothing is recovered.
        let persisted = r#"[
            {"word": "a", "know": true, "readCount": 4},
            {"word": "b", "know": "maybe", "readCount": 1}
        ]"#;
        let merged = merge(&["a", "b"], Some(persisted));
        assert_eq!(merged, vec![ProgressEntry::new("a"), ProgressEntry::new("b")]);
    }

    #[test]
    fn test_huge_read_count_falls_back() {
        let persisted = r#"[
            {"word": "a", "know": true, "readCount": 18446744073709551615},
            {"word": "b", "know": false, "readCount": 2}
        ]"#;
        let merged = merge(&["a", "b"], Some(persisted));
        assert_eq!(merged, vec![ProgressEntry::new("a"), ProgressEntry::new("b")]);
        assert_eq!(sort_entries(merged.clone()), merged);
    }

    #[test]
    fn test_read_count_at_limit_is_kept() {
        let persisted = format!(r#"[{{"word": "a", "know": true, "readCount": {MAX_READ_COUNT}}}]"#);
        let merged = merge(&["a", "b"], Some(&persisted));
        assert_eq!(merged[0].read_count, MAX_READ_COUNT);
        let sorted = sort_entries(merged);
        assert_eq!(sorted[0].word, "b");
    }

    #[test]
    fn test_not_json() {
        let merged = merge(&["a"], Some("{{{"));
        assert_eq!(merged, vec![ProgressEntry::new("a")]);
    }

    #[test]
    fn test_one_entry_per_id() {
        let persisted = r#"[
            {"word": "a", "know": false, "readCount": 1},
            {"word": "a", "know": true, "readCount": 2}
        ]"#;
        let ids = ["a", "b", "c", "d"];
        let merged = merge(&ids, Some(persisted));
        assert_eq!(merged.len(), ids.len());
        assert_eq!(words(&merged), ids.to_vec());
        // The later duplicate wins.
        assert_eq!(merged[0].read_count, 2);
    }

    #[test]
    fn test_empty_dataset() {
        let persisted = r#"[{"word": "a", "know": true, "readCount": 4}]"#;
        assert!(merge(&[], Some(persisted)).is_empty());
    }
}
