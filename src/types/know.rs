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
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// Whether the user knows a word. Persisted as a nullable boolean.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Know {
    /// Never answered.
    #[default]
    Unknown,
    /// Last answered as not known.
    NotKnown,
    /// Last answered as known.
    Known,
}

impl Know {
    /// The multiplier applied to a word's read count to get its priority
    /// score. Not-known words come back twice as often as known ones.
    pub fn weight(self) -> usize {
        match self {
            Know::Unknown => 1,
            Know::NotKnown => 2,
            Know::Known => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Know::Unknown => "unknown",
            Know::NotKnown => "not known",
            Know::Known => "known",
        }
    }
}

impl From<bool> for Know {
    fn from(value: bool) -> Self {
        if value { Know::Known } else { Know::NotKnown }
    }
}

impl From<Option<bool>> for Know {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Know::Unknown,
            Some(known) => Know::from(known),
        }
    }
}

impl From<Know> for Option<bool> {
    fn from(value: Know) -> Self {
        match value {
            Know::Unknown => None,
            Know::NotKnown => Some(false),
            Know::Known => Some(true),
        }
    }
}

impl Serialize for Know {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value: Option<bool> = (*self).into();
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Know {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<bool> = Option::deserialize(deserializer)?;
        Ok(Know::from(value))
    }
}
