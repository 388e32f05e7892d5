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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::session::Session;
use crate::stats::ReadProgress;
use crate::stats::WeeklyStats;
use crate::stats::read_progress;
use crate::stats::weekly_stats;
use crate::types::date::Date;
use crate::types::timestamp::Timestamp;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_stats(directory: Option<String>, format: StatsFormat, days: usize) -> Fallible<()> {
    let session = Session::load(Collection::new(directory)?)?;
    let today = Timestamp::now().date();
    let stats = get_stats(&session, today, days);
    match format {
        StatsFormat::Text => {
            print!("{}", render_text(&stats, today));
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    total_words: usize,
    current_word: Option<String>,
    weekly: WeeklyStats,
    reads: ReadProgress,
}

fn get_stats(session: &Session, today: Date, days: usize) -> Stats {
    Stats {
        total_words: session.entries().len(),
        current_word: session.entries().first().map(|e| e.word.clone()),
        weekly: weekly_stats(session.recency(), today, days),
        reads: read_progress(session.entries()),
    }
}

fn render_text(stats: &Stats, today: Date) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total: {}\n", stats.total_words));
    if let Some(word) = &stats.current_word {
        out.push_str(&format!("Next: {word}\n"));
    }
    out.push_str(&format!("Today: {}\n", stats.weekly.today_count));
    out.push('\n');
    for day in &stats.weekly.days {
        out.push_str(&format!(
            "{:<10} {:<14} {}\n",
            day.date.weekday_name(),
            day.date.display_label(today),
            day.count
        ));
    }
    if stats.weekly.can_load_more {
        out.push_str("(older activity available, use --days)\n");
    }
    out.push('\n');
    out.push_str(&format!(
        "Studied: {}/{}\n",
        stats.reads.studied_count, stats.reads.total
    ));
    for (read_count, count) in stats.reads.distribution.iter().enumerate() {
        out.push_str(&format!("Read {read_count:>3}x: {count}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_copy_of_test_directory;

    #[test]
    fn test_stats() -> Fallible<()> {
        let (_guard, directory) = create_tmp_copy_of_test_directory()?;
        let mut session = Session::load(Collection::new(Some(directory))?)?;
        session.answer(true)?;
        session.answer(false)?;
        let today = Timestamp::now().date();
        let stats = get_stats(&session, today, 7);
        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.current_word, Some("candid".to_string()));
        assert_eq!(stats.weekly.today_count, 2);
        assert_eq!(stats.reads.distribution, vec![3, 2]);
        let text = render_text(&stats, today);
        assert!(text.contains("Today: 2\n"));
        assert!(text.contains("Studied: 2/5\n"));
        let json = serde_json::to_value(&stats)?;
        assert_eq!(json["weekly"]["todayCount"], 2);
        assert_eq!(json["reads"]["studiedCount"], 2);
        Ok(())
    }
}
