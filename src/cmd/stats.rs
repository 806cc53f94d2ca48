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

use crate::error::Fallible;
use crate::store::CardStore;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
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

pub fn print_deck_stats(store: &CardStore, format: StatsFormat) -> Fallible<()> {
    let stats = Stats::new(store);
    println!("{}", format_stats(&stats, format)?);
    Ok(())
}

fn format_stats(stats: &Stats, format: StatsFormat) -> Fallible<String> {
    match format {
        StatsFormat::Text => {
            let mut lines = vec![
                format!("Cards: {}", stats.card_count),
                format!("Categories: {}", stats.category_count),
            ];
            for category in &stats.categories {
                lines.push(format!("  {}: {}", category.name, category.card_count));
            }
            Ok(lines.join("\n"))
        }
        StatsFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Stats {
    card_count: usize,
    category_count: usize,
    categories: Vec<CategoryStats>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryStats {
    name: String,
    card_count: usize,
}

impl Stats {
    fn new(store: &CardStore) -> Self {
        let categories: Vec<CategoryStats> = store
            .category_counts()
            .into_iter()
            .map(|(name, card_count)| CategoryStats {
                name: name.to_string(),
                card_count,
            })
            .collect();
        Self {
            card_count: store.len(),
            category_count: categories.len(),
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_stats() -> Fallible<()> {
        let stats = Stats::new(&CardStore::builtin());
        let text = format_stats(&stats, StatsFormat::Text)?;
        assert!(text.starts_with("Cards: 18\nCategories: 6\n"));
        assert!(text.contains("  Road Safety: 3"));
        Ok(())
    }

    #[test]
    fn test_json_stats() -> Fallible<()> {
        let stats = Stats::new(&CardStore::builtin());
        let json = format_stats(&stats, StatsFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value["cardCount"], 18);
        assert_eq!(value["categoryCount"], 6);
        assert_eq!(value["categories"][0]["name"], "Basic Vehicle Operations");
        assert_eq!(value["categories"][0]["cardCount"], 3);
        Ok(())
    }

    #[test]
    fn test_empty_stats() -> Fallible<()> {
        let stats = Stats::new(&CardStore::new(Vec::new()));
        let text = format_stats(&stats, StatsFormat::Text)?;
        assert_eq!(text, "Cards: 0\nCategories: 0");
        Ok(())
    }
}
