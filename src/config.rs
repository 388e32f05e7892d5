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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;

pub const CONFIG_FILE: &str = "wordcards.toml";

/// Collection settings, read from `wordcards.toml` in the collection
/// directory. Every field is optional.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum number of entries kept in the recent words log.
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// Number of recent words shown on the drill page.
    #[serde(default = "default_recent_words_size")]
    pub recent_words_size: usize,
    /// Directory holding the dataset files, relative to the collection.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_history_size() -> usize {
    1000
}

fn default_recent_words_size() -> usize {
    20
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_size: default_history_size(),
            recent_words_size: default_recent_words_size(),
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Load the configuration for a collection. A missing file means the
    /// defaults.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No {CONFIG_FILE}, using defaults.");
            return Ok(Self::default());
        }
        let content = read_to_string(&path)?;
        let config = Self::parse(&content)?;
        log::debug!("Loaded configuration: {config:?}");
        Ok(config)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let config: Config = toml::from_str(content)?;
        if config.history_size == 0 {
            return fail("history_size must be at least 1.");
        }
        Ok(config)
    }
}
