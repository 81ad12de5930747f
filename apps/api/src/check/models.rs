//! Wire types for the check-teammates endpoint.

use serde::{Deserialize, Serialize};

/// What the client is asking for. `"common"` selects the common-teammate
/// search; anything else, including an absent field, falls back to the
/// single-player check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Common,
}

impl Mode {
    pub fn from_wire(mode: Option<&str>) -> Self {
        match mode {
            Some("common") => Mode::Common,
            _ => Mode::Single,
        }
    }
}

/// Request body for POST /check-teammates.
///
/// Every field is optional on the wire: required-field validation is the
/// client's job, and the proxy degrades to empty substitutions rather than
/// rejecting.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub player_list: String,
    #[serde(default)]
    pub single_player: String,
}

/// Success envelope returned to the client. OpenAI-style regardless of which
/// upstream provider answered, so the browser script never changes.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Serialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Serialize)]
pub struct ChoiceMessage {
    pub content: String,
}

impl CheckResponse {
    pub fn from_text(content: String) -> Self {
        CheckResponse {
            choices: vec![Choice {
                message: ChoiceMessage { content },
            }],
        }
    }
}
