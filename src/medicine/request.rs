//! Inbound request types.

use serde::Deserialize;

/// Raw JSON body of a medicine lookup, as posted by the form page.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct InfoPayload {
    /// Medicine name as typed.
    #[serde(default)]
    pub medicine_name: String,
    /// Strength as typed (e.g. `500mg`), may be absent.
    #[serde(default)]
    pub strength: String,
}

/// A validated lookup: trimmed, with a non-empty medicine name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoRequest {
    medicine_name: String,
    strength: String,
}

impl InfoRequest {
    /// Trim both fields; `None` if the name is blank.
    #[must_use]
    pub fn from_raw(medicine_name: &str, strength: &str) -> Option<Self> {
        let name = medicine_name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            medicine_name: name.to_string(),
            strength: strength.trim().to_string(),
        })
    }

    /// Medicine name, never empty.
    #[must_use]
    pub fn medicine_name(&self) -> &str {
        &self.medicine_name
    }

    /// Strength, possibly empty.
    #[must_use]
    pub fn strength(&self) -> &str {
        &self.strength
    }
}

impl InfoPayload {
    /// Validate into an [`InfoRequest`].
    #[must_use]
    pub fn into_request(self) -> Option<InfoRequest> {
        InfoRequest::from_raw(&self.medicine_name, &self.strength)
    }
}
