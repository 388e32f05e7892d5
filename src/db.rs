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

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Transaction;

use crate::error::Fallible;

/// A persistent string-to-string store. Values are opaque JSON blobs; the
/// database knows nothing about their shape.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating database schema.");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }

    /// Get the value of a key. Returns `None` if the key was never set.
    pub fn get(&self, key: &str) -> Fallible<Option<String>> {
        let sql = "select value from storage where key = ?;";
        let value: Option<String> = self
            .conn
            .query_row(sql, [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    /// Set several keys at once. Either every key is written or none is.
    pub fn set_all(&mut self, items: &[(&str, String)]) -> Fallible<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in items {
            upsert(&tx, key, value)?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Return every key and its value.
    pub fn entries(&self) -> Fallible<BTreeMap<String, String>> {
        let mut entries = BTreeMap::new();
        let mut stmt = self.conn.prepare("select key, value from storage;")?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let key: String = row.get(0)?;
            let value: String = row.get(1)?;
            entries.insert(key, value);
        }
        Ok(entries)
    }

    /// Delete every key.
    pub fn clear(&mut self) -> Fallible<()> {
        let tx = self.conn.transaction()?;
        tx.execute("delete from storage;", [])?;
        tx.commit()?;
        Ok(())
    }
}

fn upsert(tx: &Transaction, key: &str, value: &str) -> Fallible<()> {
    let sql = "insert into storage (key, value) values (?, ?) on conflict (key) do update set value = excluded.value;";
    tx.execute(sql, (key, value))?;
    Ok(())
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["storage"], |row| row.get(0))?;
    Ok(count > 0)
}
