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
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::word::WordRecord;

/// The full word list, in study order.
///
/// The dataset is split into release files: `dict.json` is the initial
/// release, and each later release is a `dict-YYMMDD.json` file. Every file
/// lists its words newest-first, so each one is reversed before the files are
/// concatenated in release order.
pub struct Dataset {
    words: Vec<WordRecord>,
    index: HashMap<String, usize>,
}

impl Dataset {
    pub fn load(data_dir: &Path) -> Fallible<Self> {
        if !data_dir.exists() {
            return fail(format!(
                "data directory {} does not exist.",
                data_dir.display()
            ));
        }
        let files = release_files(data_dir)?;
        if files.is_empty() {
            return fail(format!(
                "no dataset files found in {}.",
                data_dir.display()
            ));
        }
        let mut releases = Vec::new();
        for path in files {
            log::debug!("Loading dataset file {}", path.display());
            let content = read_to_string(&path)?;
            let words: Vec<WordRecord> = serde_json::from_str(&content).map_err(|e| {
                ErrorReport::new(format!("failed to parse {}: {e}", path.display()))
            })?;
            releases.push(words);
        }
        let dataset = Self::from_releases(releases);
        log::debug!("Dataset loaded with {} words.", dataset.len());
        Ok(dataset)
    }

    /// Build a dataset from release file contents, oldest release first.
    pub fn from_releases(releases: Vec<Vec<WordRecord>>) -> Self {
        let mut words = Vec::new();
        let mut index = HashMap::new();
        for release in releases {
            for record in release.into_iter().rev() {
                if record.word.is_empty() {
                    log::warn!("Skipping dataset record with no word.");
                    continue;
                }
                if index.contains_key(&record.word) {
                    log::warn!("Duplicate word in dataset: {}", record.word);
                    continue;
                }
                index.insert(record.word.clone(), words.len());
                words.push(record);
            }
        }
        Self { words, index }
    }

    /// The word identifiers in study order.
    pub fn ids(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.word.as_str()).collect()
    }

    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.index.get(word).map(|i| &self.words[*i])
    }

    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Find the release files in the data directory, in release order.
fn release_files(data_dir: &Path) -> Fallible<Vec<PathBuf>> {
    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in WalkDir::new(data_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if let Some(key) = release_key(name) {
                files.push((key, entry.path().to_path_buf()));
            }
        }
    }
    files.sort();
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

/// The sort key of a release file: empty for the initial `dict.json`, the
/// date suffix for `dict-YYMMDD.json`. Other files are not releases.
fn release_key(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(".json")?;
    if stem == "dict" {
        return Some(String::new());
    }
    let suffix = stem.strip_prefix("dict-")?;
    if !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()) {
        Some(suffix.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir_all;
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    fn record(word: &str) -> WordRecord {
        WordRecord {
            word: word.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_release_key() {
        assert_eq!(release_key("dict.json"), Some("".to_string()));
        assert_eq!(release_key("dict-251021.json"), Some("251021".to_string()));
        assert_eq!(release_key("dict-latest.json"), None);
        assert_eq!(release_key("notes.json"), None);
        assert_eq!(release_key("dict.json.bak"), None);
    }

    #[test]
    fn test_releases_reversed_and_concatenated() {
        let dataset = Dataset::from_releases(vec![
            vec![record("b"), record("a")],
            vec![record("d"), record("c")],
        ]);
        assert_eq!(dataset.ids(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_duplicates_keep_first() {
        let dataset = Dataset::from_releases(vec![
            vec![record("b"), record("a")],
            vec![record("a"), record("c")],
        ]);
        assert_eq!(dataset.ids(), vec!["a", "b", "c"]);
        assert!(dataset.get("a").is_some());
        assert!(dataset.get("z").is_none());
    }

    #[test]
    fn test_load_in_release_order() -> Fallible<()> {
        let dir = tempdir()?;
        let data = dir.path().join("data");
        create_dir_all(&data)?;
        write(data.join("dict-251223.json"), r#"[{"word": "f"}, {"word": "e"}]"#)?;
        write(data.join("dict.json"), r#"[{"word": "b"}, {"word": "a"}]"#)?;
        write(data.join("dict-251021.json"), r#"[{"word": "d"}, {"word": "c"}]"#)?;
        write(data.join("README.md"), "not a release")?;
        let dataset = Dataset::load(&data)?;
        assert_eq!(dataset.ids(), vec!["a", "b", "c", "d", "e", "f"]);
        Ok(())
    }

    #[test]
    fn test_load_missing_directory() {
        let result = Dataset::load(Path::new("./derpherp"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_file() -> Fallible<()> {
        let dir = tempdir()?;
        write(dir.path().join("dict.json"), "{not json")?;
        assert!(Dataset::load(dir.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_load_fixture() -> Fallible<()> {
        let dataset = Dataset::load(Path::new("./test/data"))?;
        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.ids()[0], "abate");
        Ok(())
    }
}
