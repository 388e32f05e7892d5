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

use clap::Parser;
use clap::builder::RangedU64ValueParser;

use crate::cmd::check::check_collection;
use crate::cmd::export::export_progress;
use crate::cmd::import::import_progress;
use crate::cmd::reset::reset_progress;
use crate::cmd::search::search_words;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::drill::server::start_server;
use crate::error::Fallible;
use crate::stats::MAX_DAYS;
use crate::stats::WEEK;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Drill words in the browser.
    Drill {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The port to use for the web server.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Don't open the browser automatically.
        #[arg(long, default_value_t = false)]
        no_open: bool,
    },
    /// Check the collection loads.
    Check {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Print study statistics.
    Stats {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
        /// Number of days of activity to show.
        #[arg(
            long,
            default_value_t = WEEK,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DAYS as u64)
        )]
        days: usize,
    },
    /// Search the dataset.
    Search {
        /// The text to look for.
        query: String,
        /// Path to the collection directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Print all stored progress as JSON.
    Export {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Load progress previously printed by `export`.
    Import {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The file to read. By default, standard input is read.
        #[arg(long)]
        file: Option<String>,
    },
    /// Clear all stored progress.
    Reset {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Confirm clearing.
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            directory,
            port,
            no_open,
        } => start_server(directory, port, !no_open).await,
        Command::Check { directory } => check_collection(directory),
        Command::Stats {
            directory,
            format,
            days,
        } => print_stats(directory, format, days),
        Command::Search { query, directory } => search_words(directory, query),
        Command::Export { directory } => export_progress(directory),
        Command::Import { directory, file } => import_progress(directory, file),
        Command::Reset { directory, yes } => reset_progress(directory, yes),
    }
}
