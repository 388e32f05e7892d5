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

use chrono::Datelike;
use chrono::Days;
use chrono::NaiveDate;
use serde::Serialize;
use serde::Serializer;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Date(NaiveDate);

impl Date {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// The date `days` days earlier, clamped to the earliest representable
    /// date.
    pub fn minus_days(self, days: usize) -> Self {
        let days = Days::new(u64::try_from(days).unwrap_or(u64::MAX));
        Self(self.0.checked_sub_days(days).unwrap_or(NaiveDate::MIN))
    }

    /// The full weekday name, e.g. `Monday`.
    pub fn weekday_name(self) -> String {
        self.0.format("%A").to_string()
    }

    /// A short label like `Oct 21`, with the year appended when it differs
    /// from `today`'s.
    pub fn display_label(self, today: Date) -> String {
        if self.0.year() == today.0.year() {
            self.0.format("%b %-d").to_string()
        } else {
            self.0.format("%b %-d, %Y").to_string()
        }
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
