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

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use maud::html;
use serde::Deserialize;

use crate::drill::state::ServerState;
use crate::drill::state::StudyMode;
use crate::drill::template::page_template;
use crate::error::Fallible;

#[derive(Debug, Deserialize)]
enum Action {
    /// Change the study selection without starting a session.
    Mode,
    Start,
    Toggle,
    Previous,
    Next,
    Shutdown,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    mode: Option<StudyMode>,
    category: Option<String>,
}

pub async fn post_handler(State(state): State<ServerState>, Form(form): Form<FormData>) -> Response {
    if let Action::Shutdown = form.action {
        shutdown(&state);
        let body = html! {
            div.finished {
                h1 { "Session Ended" }
                p { "The server has stopped. You can close this tab." }
            }
        };
        let html = page_template(&state.title, body);
        return (StatusCode::OK, Html(html.into_string())).into_response();
    }
    match action_handler(&state, form) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
        }
    }
    Redirect::to("/").into_response()
}

fn action_handler(state: &ServerState, form: FormData) -> Fallible<()> {
    let mut mutable = state.lock()?;
    if let Some(mode) = form.mode {
        mutable.select_mode(mode);
    }
    if let Some(category) = form.category {
        mutable.select_category(category);
    }
    match form.action {
        Action::Mode => {}
        Action::Start => {
            mutable.start_session(&state.store);
        }
        Action::Toggle => {
            mutable.session.toggle_answer();
        }
        Action::Previous => {
            mutable.session.previous();
        }
        Action::Next => {
            mutable.session.next();
        }
        Action::Shutdown => {}
    }
    Ok(())
}

fn shutdown(state: &ServerState) {
    let sender = match state.shutdown_tx.lock() {
        Ok(mut tx) => tx.take(),
        Err(_) => None,
    };
    match sender {
        Some(tx) => {
            log::debug!("Shutdown requested.");
            let _ = tx.send(());
        }
        None => {
            log::error!("Shutdown already requested.");
        }
    }
}
