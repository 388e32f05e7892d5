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
use std::fs::read_to_string;
use std::io::Read;
use std::io::stdin;

use serde_json::Value;

use crate::collection::Collection;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// Load exported progress from a file, or from standard input if no file is
/// given. Every key in the input overwrites the stored one.
pub fn import_progress(directory: Option<String>, file: Option<String>) -> Fallible<()> {
    let text = match file {
        Some(path) => read_to_string(path)?,
        None => {
            let mut text = String::new();
            stdin().read_to_string(&mut text)?;
            text
        }
    };
    let imported = parse_import(&text)?;
    let mut coll = Collection::new(directory)?;
    let items: Vec<(&str, String)> = imported
        .iter()
        .map(|(k, v)| (k.as_str(), v.clone()))
        .collect();
    coll.db.set_all(&items)?;
    println!("Imported {} keys.", items.len());
    Ok(())
}

/// Parse exported progress: a JSON object whose values are all strings.
pub fn parse_import(text: &str) -> Fallible<BTreeMap<String, String>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| ErrorReport::new(format!("import data is not valid JSON: {e}")))?;
    let Value::Object(object) = value else {
        return fail("import data must be a JSON object with string key-value pairs.");
    };
    let mut imported = BTreeMap::new();
    for (key, value) in object {
        match value {
            Value::String(s) => {
                imported.insert(key, s);
            }
            _ => {
                return fail(format!("value of '{key}' is not a string."));
            }
        }
    }
    Ok(imported)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;
    use crate::helper::create_tmp_copy_of_test_directory;
    use crate::progress::STORED_WORDS_KEY;
    use crate::session::Session;

    #[test]
    fn test_parse_import() -> Fallible<()> {
        let parsed = parse_import(r#"{"a": "1", "b": "[]"}"#)?;
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["b"], "[]");
        Ok(())
    }

    #[test]
    fn test_parse_import_rejects_bad_shapes() {
        assert!(parse_import("[]").is_err());
        assert!(parse_import("null").is_err());
        assert!(parse_import("not json").is_err());
        let err = parse_import(r#"{"a": "1", "b": 2}"#).err().unwrap();
        assert_eq!(err.to_string(), "error: value of 'b' is not a string.");
    }

    #[test]
    fn test_import_file() -> Fallible<()> {
        let (_guard, directory) = create_tmp_copy_of_test_directory()?;
        let file = tempfile::NamedTempFile::new()?;
        let stored = r#"[{"word":"abate","know":true,"readCount":3}]"#;
        let export = serde_json::to_string(&BTreeMap::from([(STORED_WORDS_KEY, stored)]))?;
        write(file.path(), export)?;
        import_progress(
            Some(directory.clone()),
            Some(file.path().display().to_string()),
        )?;
        let session = Session::load(Collection::new(Some(directory))?)?;
        assert_eq!(session.entries()[4].word, "abate");
        assert_eq!(session.entries()[4].read_count, 3);
        Ok(())
    }
}
