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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::word::WordRecord;

/// Most results shown for a query.
pub const MAX_RESULTS: usize = 50;

pub fn search_words(directory: Option<String>, query: String) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let results = search(coll.dataset.words(), &query, MAX_RESULTS);
    if results.match_count == 0 {
        println!("No matches found.");
        return Ok(());
    }
    println!(
        "Showing {} of {} matches.",
        results.matches.len(),
        results.match_count
    );
    for word in results.matches {
        if word.simple_form.is_empty() || word.simple_form == word.word {
            println!("{}", word.word);
        } else {
            println!("{} ({})", word.word, word.simple_form);
        }
    }
    Ok(())
}

pub struct SearchResults<'a> {
    pub matches: Vec<&'a WordRecord>,
    /// Total number of matches, including those past the limit.
    pub match_count: usize,
}

/// Case-insensitive substring search over every field of every word.
pub fn search<'a>(words: &'a [WordRecord], query: &str, limit: usize) -> SearchResults<'a> {
    let query = query.trim().to_lowercase();
    let mut matches = Vec::new();
    let mut match_count = 0;
    if query.is_empty() {
        return SearchResults {
            matches,
            match_count,
        };
    }
    for word in words {
        if search_text(word).contains(&query) {
            match_count += 1;
            if matches.len() < limit {
                matches.push(word);
            }
        }
    }
    SearchResults {
        matches,
        match_count,
    }
}

fn search_text(word: &WordRecord) -> String {
    let mut values: Vec<&str> = vec![
        word.word.as_str(),
        word.simple_form.as_str(),
        word.definition.as_str(),
        word.pronunciation.as_str(),
        word.register.as_str(),
        word.word_meaning.as_str(),
        word.learning_notes.as_str(),
    ];
    values.extend(word.word_type.parts());
    for t in &word.persian_translations {
        values.push(t.text.as_str());
        values.push(t.transliteration.as_str());
    }
    for f in &word.other_forms {
        values.push(f.form.as_str());
        values.push(f.pos.as_str());
    }
    for forms in word.forms.values() {
        values.extend(forms.iter().map(|s| s.as_str()));
    }
    for list in [
        &word.synonyms,
        &word.antonyms,
        &word.examples,
        &word.collocations,
        &word.word_family,
    ] {
        values.extend(list.iter().map(|s| s.as_str()));
    }
    values.retain(|v| !v.is_empty());
    values.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::dataset::Dataset;

    fn fixture() -> Dataset {
        Dataset::load(Path::new("./test/data")).unwrap()
    }

    fn found<'a>(results: &SearchResults<'a>) -> Vec<&'a str> {
        results.matches.iter().map(|w| w.word.as_str()).collect()
    }

    #[test]
    fn test_search_by_word() {
        let dataset = fixture();
        let results = search(dataset.words(), "Abate", MAX_RESULTS);
        assert_eq!(found(&results), vec!["abate"]);
    }

    #[test]
    fn test_search_metadata() {
        let dataset = fixture();
        // A synonym of "candid".
        assert_eq!(found(&search(dataset.words(), "blunt", 10)), vec!["candid"]);
        // A transliteration of "diligent".
        assert_eq!(found(&search(dataset.words(), "kusha", 10)), vec!["diligent"]);
        // A verb form of "abate".
        assert_eq!(found(&search(dataset.words(), "abating", 10)), vec!["abate"]);
    }

    #[test]
    fn test_limit_and_count() {
        let dataset = fixture();
        let results = search(dataset.words(), "adjective", 2);
        assert_eq!(results.matches.len(), 2);
        assert_eq!(results.match_count, 4);
    }

    #[test]
    fn test_blank_query() {
        let dataset = fixture();
        let results = search(dataset.words(), "   ", 10);
        assert_eq!(results.match_count, 0);
        assert!(results.matches.is_empty());
    }
}
