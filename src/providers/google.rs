use super::TranslationProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::form_urlencoded;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

pub struct GoogleTranslateProvider {
    client: Client,
}

impl GoogleTranslateProvider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

/// Extract the translated text from a `translate_a/single` response.
/// Element 0 of the body is an array of `[translated, original, ...]`
/// segment tuples; the first items concatenate into the full translation.
fn extract_translation(json: &Value) -> Result<String, ProviderError> {
    let segments = json.get(0).and_then(|v| v.as_array()).ok_or_else(|| {
        ProviderError::Format("missing segment array in response".to_string())
    })?;

    let mut result = String::new();

    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
            result.push_str(text);
        }
    }

    if result.is_empty() {
        return Err(ProviderError::Format(
            "no translated segments in response".to_string(),
        ));
    }

    Ok(result)
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn translate(&self, text: &str, target: &str) -> Result<String, ProviderError> {
        let encoded_text = form_urlencoded::byte_serialize(text.as_bytes()).collect::<String>();

        // Source language is always English
        let full_url = format!(
            "{}?client=gtx&sl=en&tl={}&dt=t&q={}",
            ENDPOINT, target, encoded_text
        );

        let response = self
            .client
            .get(&full_url)
            .header(
                "User-Agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Http(response.status()));
        }

        let body = response.text().await?;

        let json: Value =
            serde_json::from_str(&body).map_err(|e| ProviderError::Format(e.to_string()))?;

        extract_translation(&json)
    }

    fn name(&self) -> &str {
        "Google Translate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_single_segment() {
        let json = json!([[["Hola", "Hello", null, null, 1]]]);
        assert_eq!(extract_translation(&json).unwrap(), "Hola");
    }

    #[test]
    fn test_extract_concatenates_segments_in_order() {
        let json = json!([[
            ["Hola, ", "Hello, ", null, null, 1],
            ["mundo.", "world.", null, null, 1]
        ]]);
        assert_eq!(extract_translation(&json).unwrap(), "Hola, mundo.");
    }

    #[test]
    fn test_extract_skips_non_string_first_items() {
        let json = json!([[["Bonjour", "Hello"], [null, "x"]]]);
        assert_eq!(extract_translation(&json).unwrap(), "Bonjour");
    }

    #[test]
    fn test_missing_segment_array_is_format_error() {
        for body in [json!({}), json!([]), json!(["not an array"]), json!(null)] {
            let err = extract_translation(&body).unwrap_err();
            assert!(matches!(err, ProviderError::Format(_)), "{:?}", body);
        }
    }

    #[test]
    fn test_empty_segment_array_is_format_error() {
        let err = extract_translation(&json!([[]])).unwrap_err();
        assert!(matches!(err, ProviderError::Format(_)));
    }
}
