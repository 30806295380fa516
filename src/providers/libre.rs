use super::TranslationProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const ENDPOINT: &str = "https://libretranslate.de/translate";

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    // LibreTranslate sometimes omits the field; treat that as an empty
    // translation rather than a parse failure.
    #[serde(rename = "translatedText", default)]
    translated_text: String,
}

pub struct LibreTranslateProvider {
    client: Client,
}

impl LibreTranslateProvider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    async fn translate(&self, text: &str, target: &str) -> Result<String, ProviderError> {
        let request = TranslateRequest {
            q: text,
            source: "en",
            target,
            format: "text",
        };

        let response = self.client.post(ENDPOINT).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::Http(response.status()));
        }

        let body = response.text().await?;

        let parsed: TranslateResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Format(e.to_string()))?;

        Ok(parsed.translated_text)
    }

    fn name(&self) -> &str {
        "LibreTranslate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_translated_text() {
        let parsed: TranslateResponse =
            serde_json::from_str(r#"{"translatedText":"Bonjour"}"#).unwrap();
        assert_eq!(parsed.translated_text, "Bonjour");
    }

    #[test]
    fn test_missing_field_defaults_to_empty() {
        let parsed: TranslateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.translated_text, "");
    }

    #[test]
    fn test_request_body_shape() {
        let request = TranslateRequest {
            q: "Hello",
            source: "en",
            target: "fr",
            format: "text",
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"q": "Hello", "source": "en", "target": "fr", "format": "text"})
        );
    }
}
