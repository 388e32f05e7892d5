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

use crate::answer::Answered;
use crate::answer::answer;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::history::RECENT_WORDS_KEY;
use crate::history::parse_history;
use crate::priority::sort_entries;
use crate::progress::STORED_WORDS_KEY;
use crate::progress::merge;
use crate::types::progress::ProgressEntry;
use crate::types::recency::RecencyEntry;
use crate::types::timestamp::Timestamp;
use crate::types::word::WordRecord;

/// A study session: a collection plus the user's progress through it.
///
/// The database is read once, in `load`, and written after every answer.
pub struct Session {
    pub collection: Collection,
    entries: Vec<ProgressEntry>,
    recency: Vec<RecencyEntry>,
}

impl Session {
    pub fn load(collection: Collection) -> Fallible<Self> {
        let stored_words = collection.db.get(STORED_WORDS_KEY)?;
        let recent_words = collection.db.get(RECENT_WORDS_KEY)?;
        let ids = collection.dataset.ids();
        let entries = sort_entries(merge(&ids, stored_words.as_deref()));
        let recency = parse_history(recent_words.as_deref(), collection.config.history_size);
        log::debug!(
            "Loaded progress for {} words, {} recent.",
            entries.len(),
            recency.len()
        );
        Ok(Self {
            collection,
            entries,
            recency,
        })
    }

    /// Progress for every word, in study order.
    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    /// Recently answered words, newest first.
    pub fn recency(&self) -> &[RecencyEntry] {
        &self.recency
    }

    /// The card to study next, with its dataset record.
    ///
    /// Returns `None` when there is nothing to study, and an error when the
    /// current word has no record in the dataset.
    pub fn current(&self) -> Fallible<Option<(&ProgressEntry, &WordRecord)>> {
        let Some(entry) = self.entries.first() else {
            return Ok(None);
        };
        match self.collection.dataset.get(&entry.word) {
            Some(record) => Ok(Some((entry, record))),
            None => fail(format!("Cannot find information for word: {}", entry.word)),
        }
    }

    /// Answer the current card and persist the result. On failure, neither the
    /// session nor the database is changed.
    pub fn answer(&mut self, known: bool) -> Fallible<()> {
        self.answer_at(known, Timestamp::now())
    }

    pub fn answer_at(&mut self, known: bool, now: Timestamp) -> Fallible<()> {
        self.current()?;
        let Answered { entries, recency } = answer(
            &self.entries,
            &self.recency,
            known,
            now,
            self.collection.config.history_size,
        )?;
        self.save(&entries, &recency)?;
        if let Some(entry) = entries.iter().find(|e| e.word == self.entries[0].word) {
            log::debug!(
                "{} {} read={} score={}",
                entry.word,
                entry.know.as_str(),
                entry.read_count,
                entry.score()
            );
        }
        self.entries = entries;
        self.recency = recency;
        Ok(())
    }

    fn save(&mut self, entries: &[ProgressEntry], recency: &[RecencyEntry]) -> Fallible<()> {
        if entries.is_empty() {
            log::debug!("Nothing loaded, skipping save.");
            return Ok(());
        }
        let stored_words = serde_json::to_string(entries)?;
        let recent_words = serde_json::to_string(recency)?;
        self.collection.db.set_all(&[
            (STORED_WORDS_KEY, stored_words),
            (RECENT_WORDS_KEY, recent_words),
        ])?;
        Ok(())
    }
}
