//! Client controller — the browser page's request/response orchestration,
//! abstracted behind small view and gateway traits so the flow can be
//! unit-tested without a page environment. The served `assets/script.js`
//! is the in-browser rendition of the same contract.
#![allow(dead_code)]

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Inline message shown when validation fails before any network call.
pub const EMPTY_LIST_MESSAGE: &str = "The player list cannot be empty.";
/// Interim message rendered while the proxy call is in flight.
pub const IN_PROGRESS_MESSAGE: &str = "Consulting the AI historian...";

/// Raw form state read from the page.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub player_list: String,
    pub single_player: String,
    pub find_common: bool,
}

/// The page surface the controller drives. A real implementation wraps DOM
/// elements; tests record the calls.
pub trait CheckView {
    fn form_values(&self) -> FormValues;
    /// Disables the triggering control and swaps its label while busy.
    fn set_busy(&mut self, busy: bool);
    fn render_status(&mut self, message: &str);
    fn render_result(&mut self, result: Result<&str, &str>);
}

/// Gateway to the proxy endpoint. `Ok` carries the answer text, `Err` the
/// message to display, so the controller never sees transport details.
#[async_trait]
pub trait CheckApi: Send + Sync {
    async fn check(
        &self,
        mode: &str,
        player_list: &str,
        single_player: &str,
    ) -> Result<String, String>;
}

/// Runs one check: validate, mark busy, call the proxy, render, unmark busy.
/// The control is re-enabled on every path that reached the network.
pub async fn perform_check<V: CheckView>(view: &mut V, api: &dyn CheckApi) {
    let values = view.form_values();
    let player_list = values.player_list.trim().to_string();
    let single_player = values.single_player.trim().to_string();

    if player_list.is_empty() {
        view.render_result(Err(EMPTY_LIST_MESSAGE));
        return;
    }

    view.set_busy(true);
    view.render_status(IN_PROGRESS_MESSAGE);

    let mode = if values.find_common { "common" } else { "single" };

    match api.check(mode, &player_list, &single_player).await {
        Ok(text) => {
            // Line breaks become the page's break markup.
            let html = text.replace('\n', "<br>");
            view.render_result(Ok(&html));
        }
        Err(message) => view.render_result(Err(&message)),
    }

    view.set_busy(false);
}

/// What the proxy may send back: an error message, a success envelope, or both
/// fields absent (treated as missing content).
#[derive(Debug, Deserialize)]
struct ApiReply {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    choices: Vec<ReplyChoice>,
}

#[derive(Debug, Deserialize)]
struct ReplyChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}

/// Reqwest-backed gateway. Applies the client-side decision rule: a
/// non-success status or an `error` field means failure, otherwise the
/// answer is `choices[0].message.content`.
pub struct HttpCheckApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCheckApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CheckApi for HttpCheckApi {
    async fn check(
        &self,
        mode: &str,
        player_list: &str,
        single_player: &str,
    ) -> Result<String, String> {
        let body = json!({
            "mode": mode,
            "playerList": player_list,
            "singlePlayer": single_player,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        let reply: ApiReply = response.json().await.map_err(|e| e.to_string())?;

        if !status.is_success() || reply.error.is_some() {
            return Err(reply.error.unwrap_or_else(|| {
                format!(
                    "Server error: {}",
                    status.canonical_reason().unwrap_or("unknown")
                )
            }));
        }

        reply
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| "No valid response content.".to_string())
    }
}
