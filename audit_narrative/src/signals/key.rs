//! Signal keys - normalized identifiers of narrative events.

use serde::{Deserialize, Serialize};

/// Key emitted by the final timeline to request the report screen.
pub const END_REPORT_KEY: &str = "show_end_report";

/// Trim and lower-case a raw signal. Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// How an interview went, as encoded after the speaker in a signal key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Calm, professional interview.
    Cool,
    /// The Witcher reference landed.
    Witcher,
    /// The Lord of the Rings reference.
    Sda,
    /// The interview went badly.
    Mauvais,
    Other(String),
}

impl Outcome {
    pub fn parse(segment: &str) -> Self {
        match segment {
            "cool" => Outcome::Cool,
            "witcher" => Outcome::Witcher,
            "sda" => Outcome::Sda,
            "mauvais" => Outcome::Mauvais,
            other => Outcome::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Cool => "cool",
            Outcome::Witcher => "witcher",
            Outcome::Sda => "sda",
            Outcome::Mauvais => "mauvais",
            Outcome::Other(s) => s,
        }
    }
}

/// A normalized signal, split into speaker and outcome.
///
/// The speaker is everything before the first `_`. The outcome is read from
/// the last `_`-segment, so `roy_tres_cool` is a `Cool` signal from `roy`.
/// A key whose first `_` is missing or leading has no outcome and the whole
/// key as speaker. `Display` gives back the normalized string unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SignalKey {
    speaker: String,
    /// Everything after the first `_`.
    remainder: Option<String>,
    outcome: Option<Outcome>,
}

impl SignalKey {
    /// Normalize a raw signal and parse it.
    pub fn parse(raw: &str) -> Self {
        Self::from_normalized(&normalize(raw))
    }

    fn from_normalized(key: &str) -> Self {
        match key.find('_') {
            Some(idx) if idx > 0 => {
                let remainder = &key[idx + 1..];
                let last = remainder.rsplit('_').next().unwrap_or(remainder);
                Self {
                    speaker: key[..idx].to_string(),
                    remainder: Some(remainder.to_string()),
                    outcome: Some(Outcome::parse(last)),
                }
            }
            _ => Self {
                speaker: key.to_string(),
                remainder: None,
                outcome: None,
            },
        }
    }

    /// The end-of-session control key.
    pub fn end_report() -> Self {
        Self::from_normalized(END_REPORT_KEY)
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.speaker.is_empty() && self.remainder.is_none()
    }

    /// The normalized string form, e.g. `ayadi_cool`.
    pub fn as_string(&self) -> String {
        match &self.remainder {
            Some(remainder) => format!("{}_{}", self.speaker, remainder),
            None => self.speaker.clone(),
        }
    }
}

impl From<String> for SignalKey {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for SignalKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<SignalKey> for String {
    fn from(key: SignalKey) -> Self {
        key.as_string()
    }
}

impl std::fmt::Display for SignalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
