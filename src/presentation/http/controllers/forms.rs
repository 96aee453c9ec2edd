// src/presentation/http/controllers/forms.rs
use serde::Deserialize;

/// Numeric form value accepted either as a JSON number or as text. The raw
/// text is handed to the validator so bad input becomes a field error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumberInput {
    pub fn into_raw(self) -> String {
        match self {
            NumberInput::Number(n) => n.to_string(),
            NumberInput::Text(s) => s,
        }
    }
}

impl Default for NumberInput {
    fn default() -> Self {
        NumberInput::Text(String::new())
    }
}
