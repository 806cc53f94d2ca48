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

use rand::Rng;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::types::card::Card;
use crate::types::progress::Progress;

/// The state of one study run: a shuffled deck, a cursor into it, and
/// whether the answer to the current card is showing.
///
/// A session with an empty deck has no current card, and every operation
/// except [`StudySession::start`] does nothing. Navigation stops at either
/// end of the deck.
#[derive(Default)]
pub struct StudySession {
    deck: Vec<Card>,
    /// Always a valid index into `deck` when `deck` is non-empty.
    cursor: usize,
    answer_visible: bool,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the deck with a shuffled copy of `cards`.
    pub fn start(&mut self, cards: &[Card]) {
        self.start_with_rng(cards, &mut thread_rng());
    }

    /// Like [`StudySession::start`], shuffling with the given generator.
    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, cards: &[Card], rng: &mut R) {
        let mut deck = cards.to_vec();
        deck.shuffle(rng);
        self.deck = deck;
        self.cursor = 0;
        self.answer_visible = false;
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.cursor)
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }

    pub fn toggle_answer(&mut self) {
        if !self.is_empty() {
            self.answer_visible = !self.answer_visible;
        }
    }

    pub fn next(&mut self) {
        if self.cursor + 1 < self.deck.len() {
            self.cursor += 1;
            self.answer_visible = false;
        }
    }

    pub fn previous(&mut self) {
        if !self.is_empty() && self.cursor > 0 {
            self.cursor -= 1;
            self.answer_visible = false;
        }
    }

    pub fn progress(&self) -> Progress {
        if self.is_empty() {
            Progress::empty()
        } else {
            Progress {
                current: self.cursor + 1,
                total: self.deck.len(),
            }
        }
    }

    #[cfg(test)]
    fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[cfg(test)]
    fn cursor(&self) -> usize {
        self.cursor
    }
}
