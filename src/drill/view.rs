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

use maud::Markup;
use maud::html;

use crate::dataset::Dataset;
use crate::stats::ReadProgress;
use crate::stats::WeeklyStats;
use crate::types::date::Date;
use crate::types::recency::RecencyEntry;
use crate::types::word::WordRecord;
use crate::types::word::camel_to_label;

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Everything the dataset knows about a word.
pub fn word_card(word: &WordRecord) -> Markup {
    html! {
        div.word-card {
            h3.word-title {
                span.pronunciation { "/" (word.pronunciation) "/" }
            }
            p.simple-form {
                strong { (word.simple_form) }
            }
            @if !word.definition.is_empty() {
                section {
                    h4 { "Definition" }
                    p { (word.definition) }
                }
            }
            section {
                h4 { "Type" }
                p { (word.word_type.joined(", ")) }
            }
            @if !word.persian_translations.is_empty() {
                section {
                    h4 { "Persian Translations" }
                    ul {
                        @for t in &word.persian_translations {
                            li {
                                (t.text)
                                @if !t.transliteration.is_empty() {
                                    " " em { "(" (t.transliteration) ")" }
                                }
                            }
                        }
                    }
                }
            }
            @if !word.other_forms.is_empty() {
                section {
                    h4 { "Other Forms" }
                    ul {
                        @for f in &word.other_forms {
                            li {
                                (f.form)
                                @if !f.pos.is_empty() {
                                    " " em { "(" (f.pos) ")" }
                                }
                            }
                        }
                    }
                }
            }
            @if !word.forms.is_empty() {
                section {
                    h4 { "Verb Forms" }
                    ul {
                        @for (key, forms) in &word.forms {
                            li {
                                strong { (camel_to_label(key)) ":" }
                                " " (forms.join(", "))
                            }
                        }
                    }
                }
            }
            (list_section("Synonyms", &word.synonyms))
            (list_section("Antonyms", &word.antonyms))
            @if !word.examples.is_empty() {
                section {
                    h4 { "Examples" }
                    ul {
                        @for example in &word.examples {
                            li { "\u{201c}" (example) "\u{201d}" }
                        }
                    }
                }
            }
            (list_section("Collocations", &word.collocations))
            (list_section("Word Family", &word.word_family))
            (text_section("Learning Notes", &word.learning_notes))
            (text_section("Register", &word.register))
            (text_section("Word Meaning", &word.word_meaning))
        }
    }
}

fn list_section(title: &str, items: &[String]) -> Markup {
    html! {
        @if !items.is_empty() {
            section {
                h4 { (title) }
                p { (items.join(", ")) }
            }
        }
    }
}

fn text_section(title: &str, text: &str) -> Markup {
    html! {
        @if !text.is_empty() {
            section {
                h4 { (title) }
                p { (text) }
            }
        }
    }
}

pub fn recent_words(recency: &[RecencyEntry], dataset: &Dataset) -> Markup {
    html! {
        details.panel {
            summary { "Recent Words" }
            @if recency.is_empty() {
                div.muted { "No recent words yet." }
            } @else {
                @for entry in recency {
                    details.recent-word {
                        summary { (entry.word) }
                        @match dataset.get(&entry.word) {
                            Some(record) => {
                                (word_card(record))
                            }
                            None => {
                                div { "Word not found." }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn weekly_progress(stats: &WeeklyStats, today: Date) -> Markup {
    html! {
        details.panel {
            summary {
                "Weekly Progress \u{2014} "
                strong { "Today: " (stats.today_count) }
            }
            ul.days {
                @for day in &stats.days {
                    @let class = if day.count == 0 { "muted" } else { "" };
                    li class=(class) {
                        span {
                            strong { (day.date.weekday_name()) }
                            " (" (day.date.display_label(today)) ")"
                        }
                        span { (day.count) " word" (plural(day.count)) }
                    }
                }
            }
            @if stats.can_load_more {
                form action="/" method="post" {
                    button id="load-more" type="submit" name="action" value="LoadMore" { "Load More" }
                }
            }
        }
    }
}

pub fn read_progress(progress: &ReadProgress) -> Markup {
    html! {
        details.panel {
            summary {
                "Read Progress \u{2014} "
                strong { (progress.studied_count) "/" (progress.total) }
            }
            @if progress.total == 0 {
                div.muted { "No progress yet." }
            } @else {
                ul.reads {
                    @for (read_count, count) in progress.distribution.iter().enumerate() {
                        @let class = if *count == 0 { "muted" } else { "" };
                        li class=(class) {
                            span { "Read " (read_count) " time" (plural(read_count)) }
                            span { (count) " word" (plural(*count)) }
                        }
                    }
                }
                div.note { "Max reads on a single word: " (progress.max_read) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::word::OtherForm;
    use crate::types::word::WordType;

    #[test]
    fn test_word_card_skips_empty_sections() {
        let word = WordRecord {
            word: "abate".to_string(),
            pronunciation: "əˈbeɪt".to_string(),
            word_type: WordType::Many(vec!["verb".to_string()]),
            other_forms: vec![OtherForm {
                form: "abatement".to_string(),
                pos: "noun".to_string(),
            }],
            ..Default::default()
        };
        let html = word_card(&word).into_string();
        assert!(html.contains("/əˈbeɪt/"));
        assert!(html.contains("abatement"));
        assert!(html.contains("<em>(noun)</em>"));
        assert!(!html.contains("Synonyms"));
        assert!(!html.contains("Definition"));
    }

    #[test]
    fn test_word_card_escapes() {
        let word = WordRecord {
            word: "x".to_string(),
            definition: "<script>".to_string(),
            ..Default::default()
        };
        let html = word_card(&word).into_string();
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_read_progress_view() {
        let progress = ReadProgress {
            distribution: vec![3, 1],
            max_read: 1,
            studied_count: 1,
            total: 4,
        };
        let html = read_progress(&progress).into_string();
        assert!(html.contains("1/4"));
        assert!(html.contains("Read 0 times"));
        assert!(html.contains("Read 1 time<"));
        assert!(html.contains("3 words"));
    }
}
