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

mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::StatusCode;
    use tokio::net::TcpStream;
    use tokio::spawn;
    use tokio::task::JoinHandle;
    use tokio::time::sleep;

    use crate::drill::server::ServerConfig;
    use crate::drill::server::start_server;
    use crate::error::Fallible;
    use crate::store::CardStore;
    use crate::types::card::Card;

    fn test_config(port: u16) -> ServerConfig {
        ServerConfig {
            title: "Test Flashcards".to_string(),
            host: "127.0.0.1".to_string(),
            port,
            open_browser: false,
        }
    }

    async fn spawn_server(store: CardStore) -> (String, JoinHandle<Fallible<()>>) {
        let port = portpicker::pick_unused_port().expect("no free port");
        let handle = spawn(async move { start_server(store, test_config(port)).await });
        let bind = format!("127.0.0.1:{port}");
        loop {
            if let Ok(stream) = TcpStream::connect(&bind).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        (format!("http://{bind}/"), handle)
    }

    async fn post(url: &str, form: &[(&str, &str)]) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(url)
            .form(form)
            .send()
            .await
            .expect("request failed");
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        Ok(response.text().await.expect("no body"))
    }

    #[tokio::test]
    async fn test_start_server_on_empty_deck() -> Fallible<()> {
        let store = CardStore::new(Vec::new());
        let result = start_server(store, test_config(0)).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: deck is empty.");
        Ok(())
    }

    #[tokio::test]
    async fn test_static_routes() -> Fallible<()> {
        let (url, _handle) = spawn_server(CardStore::builtin()).await;

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("{url}style.css")).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the `script.js` endpoint.
        let response = reqwest::get(format!("{url}script.js")).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        // Hit the not found endpoint.
        let response = reqwest::get(format!("{url}herp-derp")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn test_initial_page() -> Fallible<()> {
        let (url, _handle) = spawn_server(CardStore::builtin()).await;
        let response = reqwest::get(&url).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await.unwrap();
        assert!(html.contains("Test Flashcards"));
        assert!(html.contains("Please select a study mode"));
        assert!(html.contains("Weather &amp; Road Conditions"));
        assert!(!html.contains("Question:"));
        Ok(())
    }

    #[tokio::test]
    async fn test_category_session() -> Fallible<()> {
        let (url, _handle) = spawn_server(CardStore::builtin()).await;

        // Start a session on one category.
        let html = post(
            &url,
            &[
                ("action", "Start"),
                ("mode", "Category"),
                ("category", "Road Safety"),
            ],
        )
        .await?;
        assert!(html.contains("Card 1 of 3"));
        assert!(html.contains("<strong>Category:</strong> Road Safety"));
        assert!(html.contains("Question:"));
        assert!(!html.contains("Answer:"));
        assert!(html.contains("title=\"Previous card. Shortcut: left arrow.\" disabled>"));
        assert!(!html.contains("title=\"Next card. Shortcut: right arrow.\" disabled>"));

        // Reveal the answer.
        let html = post(&url, &[("action", "Toggle")]).await?;
        assert!(html.contains("Answer:"));
        assert!(html.contains("Card 1 of 3"));

        // Moving on hides it again.
        let html = post(&url, &[("action", "Next")]).await?;
        assert!(html.contains("Card 2 of 3"));
        assert!(!html.contains("Answer:"));

        // Stop at the last card.
        post(&url, &[("action", "Next")]).await?;
        let html = post(&url, &[("action", "Next")]).await?;
        assert!(html.contains("Card 3 of 3"));
        assert!(html.contains("title=\"Next card. Shortcut: right arrow.\" disabled>"));

        // And go back.
        let html = post(&url, &[("action", "Previous")]).await?;
        assert!(html.contains("Card 2 of 3"));

        Ok(())
    }

    #[tokio::test]
    async fn test_random_session() -> Fallible<()> {
        let (url, _handle) = spawn_server(CardStore::builtin()).await;
        let html = post(&url, &[("action", "Start"), ("mode", "Random")]).await?;
        assert!(html.contains("Card 1 of 18"));
        assert!(html.contains("Start/Reset Random Study"));
        Ok(())
    }

    #[tokio::test]
    async fn test_mode_does_not_start() -> Fallible<()> {
        let (url, _handle) = spawn_server(CardStore::builtin()).await;
        let html = post(
            &url,
            &[
                ("action", "Mode"),
                ("mode", "Category"),
                ("category", "Traffic Rules"),
            ],
        )
        .await?;
        assert!(html.contains("Please select a study mode"));
        assert!(html.contains("<option value=\"Traffic Rules\" selected>"));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_category() -> Fallible<()> {
        let (url, _handle) = spawn_server(CardStore::builtin()).await;
        post(&url, &[("action", "Start"), ("mode", "Random")]).await?;
        let html = post(
            &url,
            &[
                ("action", "Start"),
                ("mode", "Category"),
                ("category", "Nonexistent"),
            ],
        )
        .await?;
        assert!(html.contains("Please select a study mode"));
        Ok(())
    }

    #[tokio::test]
    async fn test_markdown_is_rendered() -> Fallible<()> {
        let store = CardStore::new(vec![Card::new("What is **bold**?", "<b>no</b>", "Format")]);
        let (url, _handle) = spawn_server(store).await;
        post(&url, &[("action", "Start")]).await?;
        let html = post(&url, &[("action", "Toggle")]).await?;
        assert!(html.contains("What is <strong>bold</strong>?"));
        assert!(html.contains("&lt;b&gt;no&lt;/b&gt;"));
        Ok(())
    }

    #[tokio::test]
    async fn test_shutdown() -> Fallible<()> {
        let (url, handle) = spawn_server(CardStore::builtin()).await;
        let html = post(&url, &[("action", "Shutdown")]).await?;
        assert!(html.contains("Session Ended"));
        let result = handle.await.expect("server task panicked");
        assert!(result.is_ok());
        Ok(())
    }
}
