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

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// A dictionary entry from the dataset. Only `word` is used by the
/// scheduling logic; everything else is displayed and searched.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordRecord {
    pub word: String,
    pub persian_translations: Vec<Translation>,
    pub simple_form: String,
    pub definition: String,
    #[serde(rename = "type")]
    pub word_type: WordType,
    pub other_forms: Vec<OtherForm>,
    pub forms: BTreeMap<String, Vec<String>>,
    pub pronunciation: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub examples: Vec<String>,
    pub learning_notes: String,
    pub collocations: Vec<String>,
    pub word_family: Vec<String>,
    pub register: String,
    pub word_meaning: String,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub text: String,
    pub transliteration: String,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherForm {
    pub form: String,
    pub pos: String,
}

/// Part of speech: either a single tag or several.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordType {
    One(String),
    Many(Vec<String>),
}

impl Default for WordType {
    fn default() -> Self {
        WordType::One(String::new())
    }
}

impl WordType {
    pub fn parts(&self) -> Vec<&str> {
        match self {
            WordType::One(s) => vec![s.as_str()],
            WordType::Many(v) => v.iter().map(|s| s.as_str()).collect(),
        }
    }

    pub fn joined(&self, sep: &str) -> String {
        self.parts().join(sep)
    }
}

/// Turn a camelCase key like `pastParticiple` into `Past Participle`.
pub fn camel_to_label(key: &str) -> String {
    let mut label = String::new();
    for (i, c) in key.chars().enumerate() {
        if c.is_uppercase() {
            label.push(' ');
            label.push(c);
        } else if i == 0 {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_minimal_record() -> Fallible<()> {
        let record: WordRecord = serde_json::from_str(r#"{"word": "abate"}"#)?;
        assert_eq!(record.word, "abate");
        assert!(record.synonyms.is_empty());
        assert_eq!(record.word_type, WordType::One(String::new()));
        Ok(())
    }

    #[test]
    fn test_type_string_or_list() -> Fallible<()> {
        let record: WordRecord = serde_json::from_str(r#"{"word": "run", "type": ["verb", "noun"]}"#)?;
        assert_eq!(record.word_type.joined(", "), "verb, noun");
        let record: WordRecord = serde_json::from_str(r#"{"word": "run", "type": "verb"}"#)?;
        assert_eq!(record.word_type.joined(", "), "verb");
        Ok(())
    }

    #[test]
    fn test_camel_to_label() {
        assert_eq!(camel_to_label("pastParticiple"), "Past Participle");
        assert_eq!(camel_to_label("present"), "Present");
    }
}
