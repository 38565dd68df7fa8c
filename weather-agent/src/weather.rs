//! Fulfillment client for the external weather data provider.
//!
//! One GET per lookup: the city name is forwarded verbatim as the `q` query
//! parameter alongside the service `key`, and the provider's JSON body is
//! deserialized in a single typed pass. Any missing field is a
//! malformed-provider-response error rather than a partial result.

use crate::error::AgentError;
use serde::Deserialize;

/// Client for the external weather data provider.
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// The subset of the provider payload the agent consumes.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    current: CurrentConditions,
}

// Temperatures stay `serde_json::Number` so the report renders them exactly
// as the provider sent them (29.5 -> "29.5", 30.0 -> "30.0", 30 -> "30").
#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: serde_json::Number,
    feelslike_c: serde_json::Number,
    condition: Condition,
}

#[derive(Debug, Deserialize)]
struct Condition {
    text: String,
}

impl WeatherClient {
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        WeatherClient {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Look up the current weather for a free-text city name and render it
    /// as a human-readable sentence.
    pub async fn lookup(&self, query: &str) -> Result<String, AgentError> {
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await?
            .text()
            .await?;

        let response: ProviderResponse = serde_json::from_str(&body)
            .map_err(|e| AgentError::MalformedProviderResponse(e.to_string()))?;

        Ok(render_report(query, &response.current))
    }
}

fn render_report(query: &str, current: &CurrentConditions) -> String {
    format!(
        "The weather in {} is {} degrees but feels like {} degrees. {}",
        title_case(query),
        current.temp_c,
        current.feelslike_c,
        capitalize(&current.condition.text)
    )
}

/// Uppercase every letter that follows a non-letter, lowercase the rest,
/// e.g. "new york" -> "New York". Non-letter characters, including interior
/// whitespace runs, pass through untouched.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Uppercase the first character and lowercase the remainder,
/// e.g. "partly CLOUDY" -> "Partly cloudy".
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
