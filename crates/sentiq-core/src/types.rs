//! Prediction types shared between the API client and the history store

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Binary sentiment label
///
/// The API and older history exports encode this either as `0`/`1` or as
/// `"negative"`/`"positive"`; both forms deserialize. Serialization always
/// emits the numeric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Negative,
    Positive,
}

impl Sentiment {
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            0 => Some(Sentiment::Negative),
            1 => Some(Sentiment::Positive),
            _ => None,
        }
    }

    /// Parse a user- or wire-supplied label: `positive`, `negative`, `1`, `0`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "positive" | "1" => Some(Sentiment::Positive),
            "negative" | "0" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    pub fn as_label(self) -> u8 {
        match self {
            Sentiment::Negative => 0,
            Sentiment::Positive => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Positive => "positive",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_label())
    }
}

impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Sentiment::from_label(n)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid sentiment label {n}"))),
            Raw::Text(s) => Sentiment::parse(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid sentiment label {s:?}"))),
        }
    }
}

/// Per-class sub-scores, when the model reports them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub positive: f64,
    pub negative: f64,
}

/// A single prediction result
///
/// Field aliases accept the wire variants the API and older clients produce
/// (`review`, `predicted_sentiment`/`label`, `probability`). Absent fields
/// stay absent rather than erroring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default, alias = "review", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        default,
        alias = "predicted_sentiment",
        alias = "label",
        skip_serializing_if = "Option::is_none"
    )]
    pub sentiment: Option<Sentiment>,
    #[serde(default, alias = "probability", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<Scores>,
}

impl Prediction {
    pub fn new(text: impl Into<String>, sentiment: Sentiment, confidence: f64) -> Self {
        Self {
            text: Some(text.into()),
            sentiment: Some(sentiment),
            confidence: Some(confidence),
            scores: None,
        }
    }
}
