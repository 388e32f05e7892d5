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

use std::fs::copy;
use std::fs::create_dir_all;
use std::path::PathBuf;

use tempfile::TempDir;
use tempfile::tempdir;
use walkdir::WalkDir;

use crate::collection::DATABASE_FILE;
use crate::error::ErrorReport;
use crate::error::Fallible;

/// Copy the `./test` collection into a fresh temporary directory, leaving out
/// any database. The directory lives as long as the returned guard.
pub fn create_tmp_copy_of_test_directory() -> Fallible<(TempDir, String)> {
    let source: PathBuf = PathBuf::from("./test").canonicalize()?;
    let guard: TempDir = tempdir()?;
    let target: PathBuf = guard.path().to_path_buf().canonicalize()?;
    for entry in WalkDir::new(&source).min_depth(1) {
        let entry = entry?;
        let path = entry.path();
        let relative = path
            .strip_prefix(&source)
            .map_err(|_| ErrorReport::new("invalid path"))?;
        let target_path = target.join(relative);
        if entry.file_type().is_dir() {
            create_dir_all(&target_path)?;
        } else if entry.file_name() != DATABASE_FILE {
            copy(path, &target_path)?;
        }
    }
    Ok((guard, target.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tmp_copy_of_test_directory() -> Fallible<()> {
        let (_guard, directory) = create_tmp_copy_of_test_directory()?;
        let directory = PathBuf::from(directory);
        assert!(directory.join("data").join("dict.json").exists());
        assert!(!directory.join(DATABASE_FILE).exists());
        Ok(())
    }
}
