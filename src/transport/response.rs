use serde::{Deserialize, Serialize};

// The backend wraps every business payload in the same envelope. The
// declared fields are all optional; anything else the backend returns is
// kept verbatim in `rest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl Envelope {
    // Either field alone is enough. The backend relies on this being an
    // OR, not an AND: some endpoints only set `code`, others only set
    // `success`.
    pub fn is_success(&self) -> bool {
        self.code == Some(200) || self.success == Some(true)
    }
}
