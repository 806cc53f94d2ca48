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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::drill::state::MutableState;
use crate::drill::state::ServerState;
use crate::drill::state::StudyMode;
use crate::drill::template::page_template;
use crate::store::CardStore;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mutable = match state.lock() {
        Ok(mutable) => mutable,
        Err(e) => {
            log::error!("{e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Internal Server Error".to_string()),
            );
        }
    };
    let body = html! {
        div.root {
            div.sidebar {
                (render_selection(&state.store, &mutable))
            }
            div.main {
                h1.title { (state.title) }
                (render_session(&mutable))
            }
        }
    };
    let html = page_template(&state.title, body);
    (StatusCode::OK, Html(html.into_string()))
}

fn render_selection(store: &CardStore, mutable: &MutableState) -> Markup {
    let category_mode = mutable.mode == StudyMode::Category;
    html! {
        form id="selection" action="/" method="post" {
            h2 { "Select Study Mode" }
            label {
                input type="radio" name="mode" value="Category" checked[category_mode];
                "Study by Category"
            }
            label {
                input type="radio" name="mode" value="Random" checked[!category_mode];
                "Random Cards from All Categories"
            }
            @if category_mode {
                h2 { "Select Category" }
                select id="category" name="category" {
                    @for name in store.category_names() {
                        option value=(name) selected[*name == mutable.category] { (name) }
                    }
                }
            }
            input id="apply" type="submit" name="action" value="Mode" title="Apply the selection";
            @if category_mode {
                button id="start" type="submit" name="action" value="Start" { "Start/Reset Category" }
            } @else {
                button id="start" type="submit" name="action" value="Start" { "Start/Reset Random Study" }
            }
        }
    }
}

fn render_session(mutable: &MutableState) -> Markup {
    let session = &mutable.session;
    let card = match session.current_card() {
        Some(card) => card,
        None => {
            return html! {
                div.info {
                    "Please select a study mode and click the Start button in the sidebar to begin studying."
                }
            };
        }
    };
    let progress = session.progress();
    let progress_style = format!("width: {:.0}%;", progress.fraction() * 100.0);
    html! {
        div.header {
            div.progress-bar {
                div.progress-fill style=(progress_style) {}
            }
            div.progress {
                "Card " (progress.to_string())
            }
            div.category {
                strong { "Category:" } " " (card.category())
            }
        }
        div.card {
            div.question .rich-text {
                p.label { "Question:" }
                (card.html_question())
            }
            @if session.answer_visible() {
                div.answer .rich-text {
                    p.label { "Answer:" }
                    (card.html_answer())
                }
            }
        }
        div.controls {
            form action="/" method="post" {
                button id="toggle" type="submit" name="action" value="Toggle" title="Show or hide the answer. Shortcut: space." {
                    "Show/Hide Answer"
                }
                div.spacer {}
                button id="previous" type="submit" name="action" value="Previous" title="Previous card. Shortcut: left arrow." disabled[!progress.has_previous()] {
                    "Previous Card"
                }
                button id="next" type="submit" name="action" value="Next" title="Next card. Shortcut: right arrow." disabled[!progress.has_next()] {
                    "Next Card"
                }
                div.spacer {}
                button id="shutdown" type="submit" name="action" value="Shutdown" title="Stop the server" {
                    "Quit"
                }
            }
        }
    }
}
