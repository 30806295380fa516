use crate::error::ProviderError;
use async_trait::async_trait;

pub mod google;
pub mod libre;

// Main translation provider trait
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate English text into the target language
    async fn translate(&self, text: &str, target: &str) -> Result<String, ProviderError>;

    /// Get provider name for display purposes
    fn name(&self) -> &str;
}
