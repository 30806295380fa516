use crate::error::TranslateError;
use crate::providers::google::GoogleTranslateProvider;
use crate::providers::libre::LibreTranslateProvider;
use crate::providers::TranslationProvider;
use crate::words;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A completed translation, tagged with the provider that produced it.
#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub provider: String,
}

pub struct Translator {
    primary: Box<dyn TranslationProvider>,
    fallback: Box<dyn TranslationProvider>,
    in_flight: Arc<AtomicBool>,
}

impl Translator {
    pub fn new() -> Self {
        Self::with_providers(
            Box::new(GoogleTranslateProvider::new()),
            Box::new(LibreTranslateProvider::new()),
        )
    }

    pub fn with_providers(
        primary: Box<dyn TranslationProvider>,
        fallback: Box<dyn TranslationProvider>,
    ) -> Self {
        Self {
            primary,
            fallback,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a translation is currently in flight. Stays set across the
    /// whole primary-then-fallback span of a single call.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Translate English text into the target language. Tries the primary
    /// provider first; any primary failure switches to the fallback. Empty
    /// or over-limit input is rejected before any network call.
    pub async fn translate(
        &self,
        raw_text: &str,
        target: &str,
    ) -> Result<Translation, TranslateError> {
        let text = raw_text.trim();

        if text.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let count = words::count(text);
        if words::exceeds_limit(count) {
            return Err(TranslateError::WordLimitExceeded { count });
        }

        let _busy = BusyGuard::hold(&self.in_flight);

        match self.primary.translate(text, target).await {
            Ok(translated) => Ok(Translation {
                text: translated,
                provider: self.primary.name().to_string(),
            }),
            Err(e) => {
                println!(
                    "{} error ({}), falling back to {}...",
                    self.primary.name(),
                    e,
                    self.fallback.name()
                );

                match self.fallback.translate(text, target).await {
                    Ok(translated) => Ok(Translation {
                        text: translated,
                        provider: self.fallback.name().to_string(),
                    }),
                    Err(_) => Err(TranslateError::Unavailable),
                }
            }
        }
    }
}

/// Clears the in-flight flag on every exit path.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn hold(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    struct StubProvider {
        name: &'static str,
        // None means the call fails with an HTTP 503
        reply: Option<&'static str>,
        calls: Arc<AtomicUsize>,
        call_log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl StubProvider {
        fn new(
            name: &'static str,
            reply: Option<&'static str>,
            call_log: Arc<Mutex<Vec<&'static str>>>,
        ) -> (Box<Self>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let provider = Box::new(Self {
                name,
                reply,
                calls: calls.clone(),
                call_log,
            });
            (provider, calls)
        }
    }

    #[async_trait]
    impl TranslationProvider for StubProvider {
        async fn translate(&self, _text: &str, _target: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.call_log.lock().unwrap().push(self.name);

            match self.reply {
                Some(text) => Ok(text.to_string()),
                None => Err(ProviderError::Http(StatusCode::SERVICE_UNAVAILABLE)),
            }
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn stub_translator(
        primary_reply: Option<&'static str>,
        fallback_reply: Option<&'static str>,
    ) -> (Translator, Arc<AtomicUsize>, Arc<AtomicUsize>, Arc<Mutex<Vec<&'static str>>>) {
        let call_log = Arc::new(Mutex::new(Vec::new()));
        let (primary, primary_calls) = StubProvider::new("primary", primary_reply, call_log.clone());
        let (fallback, fallback_calls) =
            StubProvider::new("fallback", fallback_reply, call_log.clone());

        (
            Translator::with_providers(primary, fallback),
            primary_calls,
            fallback_calls,
            call_log,
        )
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let (translator, primary_calls, fallback_calls, _) =
            stub_translator(Some("Hola"), Some("unused"));

        let result = translator.translate("Hello", "es").await.unwrap();

        assert_eq!(result.text, "Hola");
        assert_eq!(result.provider, "primary");
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_primary_failure_triggers_fallback() {
        let (translator, primary_calls, fallback_calls, call_log) =
            stub_translator(None, Some("Bonjour"));

        let result = translator.translate("Hello", "fr").await.unwrap();

        assert_eq!(result.text, "Bonjour");
        assert_eq!(result.provider, "fallback");
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
        assert_eq!(*call_log.lock().unwrap(), vec!["primary", "fallback"]);
    }

    #[tokio::test]
    async fn test_both_providers_failing_is_unavailable() {
        let (translator, _, _, _) = stub_translator(None, None);

        let err = translator.translate("Hello", "de").await.unwrap_err();

        assert!(matches!(err, TranslateError::Unavailable));
        assert!(!translator.is_busy());
    }

    #[tokio::test]
    async fn test_empty_input_rejected_before_any_call() {
        let (translator, primary_calls, fallback_calls, _) =
            stub_translator(Some("x"), Some("y"));

        for input in ["", "   ", "\t\n"] {
            let err = translator.translate(input, "es").await.unwrap_err();
            assert!(matches!(err, TranslateError::EmptyInput));
        }

        assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_word_limit_rejected_before_any_call() {
        let (translator, primary_calls, fallback_calls, _) =
            stub_translator(Some("x"), Some("y"));

        let text = "word ".repeat(words::WORD_LIMIT + 1);
        let err = translator.translate(&text, "es").await.unwrap_err();

        assert!(matches!(
            err,
            TranslateError::WordLimitExceeded { count } if count == words::WORD_LIMIT + 1
        ));
        assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_text_at_limit_is_accepted() {
        let (translator, primary_calls, _, _) = stub_translator(Some("ok"), Some("y"));

        let text = "word ".repeat(words::WORD_LIMIT);
        translator.translate(&text, "es").await.unwrap();

        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_busy_flag_released_on_every_path() {
        let (ok_translator, _, _, _) = stub_translator(Some("x"), Some("y"));
        ok_translator.translate("Hello", "es").await.unwrap();
        assert!(!ok_translator.is_busy());

        let (fallback_translator, _, _, _) = stub_translator(None, Some("y"));
        fallback_translator.translate("Hello", "es").await.unwrap();
        assert!(!fallback_translator.is_busy());

        let (failing_translator, _, _, _) = stub_translator(None, None);
        failing_translator.translate("Hello", "es").await.unwrap_err();
        assert!(!failing_translator.is_busy());
    }

    #[test]
    fn test_translator_starts_idle() {
        let (translator, _, _, _) = stub_translator(Some("x"), Some("y"));
        assert!(!translator.is_busy());
    }
}
