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
use std::collections::BTreeSet;
use std::fs::read_to_string;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;

/// The read-only set of cards available for study. Built once at startup
/// and never modified afterwards.
pub struct CardStore {
    /// Cards in authoring order.
    cards: Vec<Card>,
    /// The distinct category names of `cards`.
    categories: BTreeSet<String>,
}

impl CardStore {
    pub fn new(cards: Vec<Card>) -> Self {
        let categories = cards
            .iter()
            .map(|card| card.category().to_string())
            .collect();
        Self { cards, categories }
    }

    /// The built-in driver's training deck.
    pub fn builtin() -> Self {
        let cards = BUILTIN_CARDS
            .iter()
            .map(|(question, answer, category)| Card::new(*question, *answer, *category))
            .collect();
        Self::new(cards)
    }

    /// Load a store from a TOML deck file.
    pub fn from_deck_file(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return fail("deck file does not exist.");
        }
        log::debug!("Loading deck from {}...", path.display());
        let start = Instant::now();
        let content = read_to_string(path)?;
        let store = Self::from_toml(&content)?;
        let duration = start.elapsed().as_millis();
        log::debug!("Deck loaded in {duration}ms.");
        Ok(store)
    }

    /// Parse a store from the contents of a TOML deck file.
    pub fn from_toml(content: &str) -> Fallible<Self> {
        let file: DeckFile = toml::from_str(content)?;
        if file.cards.is_empty() {
            return fail("deck file contains no cards.");
        }
        let mut cards = Vec::with_capacity(file.cards.len());
        for (idx, entry) in file.cards.into_iter().enumerate() {
            let number = idx + 1;
            let question = entry.question.trim();
            let answer = entry.answer.trim();
            let category = entry.category.trim();
            if question.is_empty() {
                return fail(format!("card {number} has an empty question."));
            }
            if answer.is_empty() {
                return fail(format!("card {number} has an empty answer."));
            }
            if category.is_empty() {
                return fail(format!("card {number} has an empty category."));
            }
            cards.push(Card::new(question, answer, category));
        }
        Ok(Self::new(cards))
    }

    /// All cards, in authoring order.
    pub fn all_cards(&self) -> &[Card] {
        &self.cards
    }

    /// The distinct category names, sorted.
    pub fn category_names(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// The cards in the given category, in authoring order. Unknown
    /// categories yield an empty list.
    pub fn cards_in_category(&self, category: &str) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| card.category() == category)
            .cloned()
            .collect()
    }

    /// The number of cards in each category.
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.category()).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFile {
    #[serde(default)]
    cards: Vec<DeckFileCard>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFileCard {
    question: String,
    answer: String,
    category: String,
}

const BUILTIN_CARDS: [(&str, &str, &str); 18] = [
    (
        "How should the inside rear-view mirror be adjusted?",
        "To show the center of the road behind the vehicle",
        "Basic Vehicle Operations",
    ),
    (
        "What is the BEST way to see clearly in the direction your car is moving while backing?",
        "Turn your head and shoulders and look backward",
        "Basic Vehicle Operations",
    ),
    (
        "Before starting the engine, what should you check?",
        "Check all information gauges",
        "Basic Vehicle Operations",
    ),
    (
        "As the speed of a vehicle doubles, its destructive power in a crash:",
        "Increases by four times",
        "Road Safety",
    ),
    (
        "On slippery roads, you should stay at least how many seconds of travel time behind the vehicle ahead?",
        "4 seconds",
        "Road Safety",
    ),
    (
        "When passing a vehicle on a two-lane road, you should return to the right side when:",
        "You can see both headlights of the passed vehicle in your rear-view mirror",
        "Road Safety",
    ),
    (
        "When driving in fog, you should:",
        "Drive slow enough to stop within the distance you can see",
        "Weather & Road Conditions",
    ),
    (
        "One danger of driving in fog is:",
        "Reduced traction",
        "Weather & Road Conditions",
    ),
    (
        "If you want to stop or slow down gradually when driving on ice, you should:",
        "Use light and steady pressure on the brakes",
        "Weather & Road Conditions",
    ),
    (
        "Michigan law requires headlights be used when there is not enough light to see people and vehicles clearly at:",
        "1,000 feet",
        "Traffic Rules",
    ),
    (
        "When the traffic signal light changes from green to yellow, you should:",
        "Stop before entering the intersection if you can do so safely",
        "Traffic Rules",
    ),
    (
        "If a police officer waves you on at an intersection when the traffic light is red, you should:",
        "Follow the directions of the officer",
        "Traffic Rules",
    ),
    (
        "If your vehicle's brakes fail completely, you may be able to stop safely by:",
        "Slowly applying the parking brake",
        "Emergency Situations",
    ),
    (
        "If your vehicle is skidding, you should:",
        "Turn the wheels in the direction you want to go",
        "Emergency Situations",
    ),
    (
        "When an emergency vehicle with siren sounding and lights flashing is approaching, you should:",
        "Move to the side of the road or shoulder and stop",
        "Emergency Situations",
    ),
    (
        "Having just one or two drinks before driving:",
        "Affects your reaction time and judgment",
        "Special Topics",
    ),
    (
        "Which organ of the body is affected FIRST by alcohol?",
        "Brain",
        "Special Topics",
    ),
    (
        "Michigan's safety belt use law requires front seat occupants to wear a safety belt:",
        "At all times",
        "Special Topics",
    ),
];
