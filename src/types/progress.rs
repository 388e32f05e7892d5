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

use serde::Deserialize;
use serde::Serialize;

use crate::types::know::Know;

/// The largest read count we accept from storage. Larger counts can only come
/// from corrupt or hand-edited data.
pub const MAX_READ_COUNT: usize = 100_000;

/// Study progress for a single word.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    /// The identifier of the word in the dataset.
    pub word: String,
    /// The answer given the last time the word was studied.
    #[serde(default)]
    pub know: Know,
    /// How many times the word has been answered, in either direction.
    pub read_count: usize,
}

impl ProgressEntry {
    /// Progress for a word that has never been studied.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            know: Know::Unknown,
            read_count: 0,
        }
    }

    /// Priority score: lower scores are studied first.
    pub fn score(&self) -> usize {
        self.read_count.saturating_mul(self.know.weight())
    }

    /// The entry after one more answer.
    pub fn answered(&self, known: bool) -> Self {
        Self {
            word: self.word.clone(),
            know: Know::from(known),
            read_count: self.read_count.saturating_add(1).min(MAX_READ_COUNT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_json_shape() -> Fallible<()> {
        let entry = ProgressEntry {
            word: "abate".to_string(),
            know: Know::NotKnown,
            read_count: 3,
        };
        let json = serde_json::to_string(&entry)?;
        assert_eq!(json, r#"{"word":"abate","know":false,"readCount":3}"#);
        Ok(())
    }

    #[test]
    fn test_negative_read_count_is_rejected() {
        let json = r#"{"word":"abate","know":null,"readCount":-1}"#;
        assert!(serde_json::from_str::<ProgressEntry>(json).is_err());
    }

    #[test]
    fn test_answered() {
        let entry = ProgressEntry::new("abate").answered(true);
        assert_eq!(entry.know, Know::Known);
        assert_eq!(entry.read_count, 1);
        assert_eq!(entry.score(), 3);
    }

    #[test]
    fn test_huge_read_count_saturates() {
        let entry = ProgressEntry {
            word: "abate".to_string(),
            know: Know::Known,
            read_count: usize::MAX,
        };
        assert_eq!(entry.score(), usize::MAX);
        assert_eq!(entry.answered(false).read_count, MAX_READ_COUNT);
    }
}
