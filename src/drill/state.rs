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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use serde::Deserialize;
use tokio::sync::oneshot;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::session::StudySession;
use crate::store::CardStore;

#[derive(Clone)]
pub struct ServerState {
    pub title: String,
    pub store: Arc<CardStore>,
    pub mutable: Arc<Mutex<MutableState>>,
    pub shutdown_tx: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl ServerState {
    pub fn lock(&self) -> Fallible<MutexGuard<'_, MutableState>> {
        self.mutable
            .lock()
            .map_err(|_| ErrorReport::new("session state is poisoned."))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum StudyMode {
    /// Study the cards of the selected category.
    Category,
    /// Study every card in the deck.
    Random,
}

/// Everything the user can change: the study selection and the session it
/// feeds.
pub struct MutableState {
    pub mode: StudyMode,
    /// The selected category. Only used in [`StudyMode::Category`].
    pub category: String,
    pub session: StudySession,
}

impl MutableState {
    /// The initial state: category mode, with the first category selected
    /// and no session started.
    pub fn new(store: &CardStore) -> Self {
        let category = store
            .category_names()
            .iter()
            .next()
            .cloned()
            .unwrap_or_default();
        Self {
            mode: StudyMode::Category,
            category,
            session: StudySession::new(),
        }
    }

    pub fn select_mode(&mut self, mode: StudyMode) {
        self.mode = mode;
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Start a session over the selected category.
    pub fn start_category_session(&mut self, store: &CardStore) {
        let cards = store.cards_in_category(&self.category);
        log::debug!(
            "Starting session on category {:?} with {} cards.",
            self.category,
            cards.len()
        );
        self.session.start(&cards);
    }

    /// Start a session over every card in the store.
    pub fn start_random_session(&mut self, store: &CardStore) {
        log::debug!("Starting random session with {} cards.", store.len());
        self.session.start(store.all_cards());
    }

    /// Start a session according to the selected mode.
    pub fn start_session(&mut self, store: &CardStore) {
        match self.mode {
            StudyMode::Category => self.start_category_session(store),
            StudyMode::Random => self.start_random_session(store),
        }
    }
}
