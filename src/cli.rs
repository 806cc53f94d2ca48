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

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::check::check_deck;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_deck_stats;
use crate::drill::server::ServerConfig;
use crate::drill::server::start_server;
use crate::error::Fallible;
use crate::store::CardStore;

const BUILTIN_TITLE: &str = "Michigan Driver's Training Flashcards";

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Drill cards in the browser.
    Drill {
        /// Optional path to a TOML deck file. Defaults to the built-in deck.
        #[arg(long)]
        deck: Option<PathBuf>,
        /// The address to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Don't open the browser automatically.
        #[arg(long)]
        no_open: bool,
    },
    /// Print deck statistics.
    Stats {
        /// Optional path to a TOML deck file. Defaults to the built-in deck.
        #[arg(long)]
        deck: Option<PathBuf>,
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Check the integrity of a deck file.
    Check {
        /// Path to the TOML deck file.
        deck: PathBuf,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill {
            deck,
            host,
            port,
            no_open,
        } => {
            let (store, title) = load_store(deck)?;
            let config = ServerConfig {
                title,
                host,
                port,
                open_browser: !no_open,
            };
            start_server(store, config).await
        }
        Command::Stats { deck, format } => {
            let (store, _) = load_store(deck)?;
            print_deck_stats(&store, format)
        }
        Command::Check { deck } => check_deck(&deck),
    }
}

/// Load the deck file if one is given, the built-in deck otherwise. Returns
/// the store and a title for it.
fn load_store(deck: Option<PathBuf>) -> Fallible<(CardStore, String)> {
    match deck {
        Some(path) => {
            let store = CardStore::from_deck_file(&path)?;
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Flashcards".to_string());
            Ok((store, title))
        }
        None => Ok((CardStore::builtin(), BUILTIN_TITLE.to_string())),
    }
}
