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

use crate::collection::Collection;
use crate::error::Fallible;

/// Print every stored key and its raw value as a JSON object. The output can
/// be fed back to `import`.
pub fn export_progress(directory: Option<String>) -> Fallible<()> {
    let coll: Collection = Collection::new(directory)?;
    let json: String = get_export(&coll)?;
    println!("{json}");
    Ok(())
}

fn get_export(coll: &Collection) -> Fallible<String> {
    let entries: BTreeMap<String, String> = coll.db.entries()?;
    let json = serde_json::to_string_pretty(&entries)?;
    Ok(json)
}
