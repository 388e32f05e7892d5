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
use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::date::Date;
use crate::types::progress::MAX_READ_COUNT;
use crate::types::progress::ProgressEntry;
use crate::types::recency::RecencyEntry;

/// How many days the weekly view starts with, and how many more each "load
/// more" adds.
pub const WEEK: usize = 7;

/// The widest window the weekly view will cover, about ten years.
pub const MAX_DAYS: usize = 3660;

/// Study activity over the last few days.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    /// One entry per day, today first.
    pub days: Vec<DayActivity>,
    /// Distinct words answered today.
    pub today_count: usize,
    /// Whether the log has entries older than the window.
    pub can_load_more: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    pub date: Date,
    pub count: usize,
    pub words: BTreeSet<String>,
}

/// Group the recent words log by day, for the `days` days ending `today`.
/// The window is clamped to `1..=MAX_DAYS`.
pub fn weekly_stats(recency: &[RecencyEntry], today: Date, days: usize) -> WeeklyStats {
    let days = days.clamp(1, MAX_DAYS);
    let mut by_date: BTreeMap<Date, BTreeSet<String>> = BTreeMap::new();
    for entry in recency {
        by_date
            .entry(entry.timestamp.date())
            .or_default()
            .insert(entry.word.clone());
    }
    let activity: Vec<DayActivity> = (0..days)
        .map(|offset| {
            let date = today.minus_days(offset);
            let words = by_date.get(&date).cloned().unwrap_or_default();
            DayActivity {
                date,
                count: words.len(),
                words,
            }
        })
        .collect();
    let today_count = activity[0].count;
    let earliest_shown = today.minus_days(days - 1);
    let oldest_tracked = by_date.keys().next().copied();
    let can_load_more = match oldest_tracked {
        Some(oldest) => oldest < earliest_shown,
        None => false,
    };
    WeeklyStats {
        days: activity,
        today_count,
        can_load_more,
    }
}

/// How many times the words have been read.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadProgress {
    /// `distribution[n]` is the number of words read exactly `n` times.
    pub distribution: Vec<usize>,
    pub max_read: usize,
    /// Words read at least once.
    pub studied_count: usize,
    pub total: usize,
}

/// Counts above `MAX_READ_COUNT` are binned with it.
pub fn read_progress(entries: &[ProgressEntry]) -> ReadProgress {
    let capped = |entry: &ProgressEntry| entry.read_count.min(MAX_READ_COUNT);
    let max_read = entries.iter().map(capped).max().unwrap_or(0);
    let mut distribution = vec![0; max_read + 1];
    for entry in entries {
        distribution[capped(entry)] += 1;
    }
    let studied_count = entries.iter().filter(|e| e.read_count > 0).count();
    ReadProgress {
        distribution,
        max_read,
        studied_count,
        total: entries.len(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::NaiveDate;

    use super::*;
    use crate::types::know::Know;
    use crate::types::timestamp::Timestamp;

    fn today() -> Date {
        Date::new(NaiveDate::from_ymd_opt(2025, 10, 21).unwrap())
    }

    fn seen(word: &str, days_ago: i64, hour: u32) -> RecencyEntry {
        let date = today().into_inner() - Duration::days(days_ago);
        let ts = date.and_hms_opt(hour, 0, 0).unwrap().and_utc();
        RecencyEntry {
            word: word.to_string(),
            timestamp: Timestamp::new(ts),
        }
    }

    #[test]
    fn test_empty_log() {
        let stats = weekly_stats(&[], today(), WEEK);
        assert_eq!(stats.days.len(), 7);
        assert_eq!(stats.today_count, 0);
        assert!(!stats.can_load_more);
        assert_eq!(stats.days[0].date, today());
        assert_eq!(stats.days[6].date, today().minus_days(6));
    }

    #[test]
    fn test_words_grouped_by_day() {
        let log = vec![
            seen("a", 0, 9),
            seen("b", 0, 23),
            seen("c", 1, 0),
            seen("d", 6, 12),
        ];
        let stats = weekly_stats(&log, today(), WEEK);
        assert_eq!(stats.today_count, 2);
        assert_eq!(stats.days[1].count, 1);
        assert!(stats.days[1].words.contains("c"));
        assert_eq!(stats.days[6].count, 1);
        assert!(!stats.can_load_more);
    }

    #[test]
    fn test_load_more() {
        let log = vec![seen("a", 0, 9), seen("old", 10, 9)];
        let stats = weekly_stats(&log, today(), WEEK);
        assert!(stats.can_load_more);
        let stats = weekly_stats(&log, today(), WEEK * 2);
        assert!(!stats.can_load_more);
        assert_eq!(stats.days[10].count, 1);
    }

    #[test]
    fn test_read_progress() {
        let entry = |word: &str, read_count| ProgressEntry {
            word: word.to_string(),
            know: Know::Known,
            read_count,
        };
        let progress = read_progress(&[entry("a", 0), entry("b", 3), entry("c", 3), entry("d", 1)]);
        assert_eq!(progress.distribution, vec![1, 1, 0, 2]);
        assert_eq!(progress.max_read, 3);
        assert_eq!(progress.studied_count, 3);
        assert_eq!(progress.total, 4);
    }

    #[test]
    fn test_wide_window_is_clamped() {
        let log = vec![seen("a", 0, 9), seen("old", 400, 9)];
        let stats = weekly_stats(&log, today(), 1_000_000_000);
        assert_eq!(stats.days.len(), MAX_DAYS);
        assert_eq!(stats.today_count, 1);
        assert_eq!(stats.days[400].count, 1);
        assert!(!stats.can_load_more);
    }

    #[test]
    fn test_zero_days_shows_today() {
        let stats = weekly_stats(&[seen("a", 0, 9)], today(), 0);
        assert_eq!(stats.days.len(), 1);
        assert_eq!(stats.today_count, 1);
    }

    #[test]
    fn test_read_progress_huge_count() {
        let entry = ProgressEntry {
            word: "a".to_string(),
            know: Know::Known,
            read_count: usize::MAX,
        };
        let progress = read_progress(&[entry, ProgressEntry::new("b")]);
        assert_eq!(progress.max_read, MAX_READ_COUNT);
        assert_eq!(progress.distribution.len(), MAX_READ_COUNT + 1);
        assert_eq!(progress.distribution[0], 1);
        assert_eq!(progress.distribution[MAX_READ_COUNT], 1);
        assert_eq!(progress.studied_count, 1);
    }

    #[test]
    fn test_read_progress_empty() {
        let progress = read_progress(&[]);
        assert_eq!(progress.distribution, vec![0]);
        assert_eq!(progress.studied_count, 0);
    }
}
