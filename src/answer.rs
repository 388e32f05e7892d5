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

use crate::error::Fallible;
use crate::error::fail;
use crate::history::record;
use crate::priority::sort_entries;
use crate::types::progress::ProgressEntry;
use crate::types::recency::RecencyEntry;
use crate::types::timestamp::Timestamp;

/// The result of answering the current card.
#[derive(Debug, PartialEq)]
pub struct Answered {
    pub entries: Vec<ProgressEntry>,
    pub recency: Vec<RecencyEntry>,
}

/// Answer the current card (the head of `entries`).
///
/// Only the head entry changes: its know-state is set and its read count is
/// incremented. The word moves to the front of the recent words log, and the
/// entries are re-sorted. The inputs are left untouched, so the caller can
/// commit both outputs together or discard them.
pub fn answer(
    entries: &[ProgressEntry],
    recency: &[RecencyEntry],
    known: bool,
    now: Timestamp,
    history_size: usize,
) -> Fallible<Answered> {
    let Some(current) = entries.first() else {
        return fail("no current card.");
    };
    let updated = current.answered(known);
    let recency = record(recency, &current.word, now, history_size);
    let mut next: Vec<ProgressEntry> = Vec::with_capacity(entries.len());
    next.push(updated);
    next.extend(entries[1..].iter().cloned());
    let entries = sort_entries(next);
    Ok(Answered { entries, recency })
}
