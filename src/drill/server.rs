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
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::signal::ctrl_c;
use tokio::sync::oneshot;
use tokio::time::sleep;

use crate::drill::get::get_handler;
use crate::drill::post::post_handler;
use crate::drill::state::MutableState;
use crate::drill::state::ServerState;
use crate::error::Fallible;
use crate::error::fail;
use crate::store::CardStore;

pub struct ServerConfig {
    /// The page title.
    pub title: String,
    pub host: String,
    pub port: u16,
    /// Whether to open the drill page in a browser once the server is up.
    pub open_browser: bool,
}

pub async fn start_server(store: CardStore, config: ServerConfig) -> Fallible<()> {
    if store.is_empty() {
        return fail("deck is empty.");
    }
    log::debug!(
        "Serving {} cards in {} categories.",
        store.len(),
        store.category_names().len()
    );

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let state = ServerState {
        title: config.title,
        mutable: Arc::new(Mutex::new(MutableState::new(&store))),
        store: Arc::new(store),
        shutdown_tx: Arc::new(Mutex::new(Some(shutdown_tx))),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/script.js", get(script_handler));
    let app = app.route("/style.css", get(style_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    // Start a separate task to open the browser.
    if config.open_browser {
        let bind = bind.clone();
        let url = format!("http://{bind}/");
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&bind).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            if let Err(e) = open::that(&url) {
                log::error!("Failed to open {url}: {e}");
            }
        });
    }

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    println!("Listening on http://{bind}/");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;
    log::debug!("Server stopped.");
    Ok(())
}

async fn shutdown_signal(shutdown_rx: oneshot::Receiver<()>) {
    tokio::select! {
        _ = shutdown_rx => {}
        result = ctrl_c() => {
            if let Err(e) = result {
                log::error!("Failed to listen for Ctrl-C: {e}");
            }
        }
    }
}

async fn script_handler() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    let content = include_str!("script.js");
    (StatusCode::OK, [(CONTENT_TYPE, "text/javascript")], content)
}

async fn style_handler() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
