use crate::clipboard::ClipboardManager;
use crate::config::ConfigManager;
use crate::error::TranslateError;
use crate::translator::{Translation, Translator};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Arc;

pub struct CliHandler {
    translator: Translator,
    config_manager: Arc<ConfigManager>,
}

impl CliHandler {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let config_path = ConfigManager::get_default_config_path()?;
        let config_manager = Arc::new(ConfigManager::new(config_path.to_string_lossy().as_ref())?);

        Ok(Self {
            translator: Translator::new(),
            config_manager,
        })
    }

    /// Save translation history to file
    fn save_translation_history(
        &self,
        original: &str,
        translation: &Translation,
        target_lang: &str,
        config: &crate::config::Config,
    ) -> Result<(), Box<dyn Error>> {
        if !config.save_translation_history {
            return Ok(());
        }

        let timestamp: DateTime<Utc> = Utc::now();
        let formatted_time = timestamp.format("%Y-%m-%d %H:%M:%S UTC");

        let entry = format!(
            "[{}] en -> {} (via {})\nIN:  {}\nOUT: {}\n---\n\n",
            formatted_time, target_lang, translation.provider, original, translation.text
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.history_file)?;

        file.write_all(entry.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Display CLI help information
    pub fn show_help() {
        println!();
        println!("=== Text Translator v{} ===", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Translates English text using Google Translate, with automatic");
        println!("fallback to LibreTranslate when the primary service fails.");
        println!();
        println!("USAGE:");
        println!("  tduo [OPTIONS] [text]");
        println!();
        println!("ARGUMENTS:");
        println!("  <text>    Text to translate (use quotes for phrases with spaces)");
        println!();
        println!("OPTIONS:");
        println!("  -h, --help         Show this help message");
        println!("  -c, --config       Show current configuration");
        println!("  -v, --version      Show version information");
        println!("  -l, --lang <code>  Target language for this run (es, fr, de, ...)");
        println!();
        println!("EXAMPLES:");
        println!("  tduo                         Start interactive mode");
        println!("  tduo hello                   Translate 'hello'");
        println!("  tduo \"Hello world\"           Translate a phrase");
        println!("  tduo -l fr \"Hello world\"     Translate into French");
        println!("  tduo --config                Show configuration");
        println!();
        println!("INTERACTIVE MODE:");
        println!("  - Type any text and press Enter to translate");
        println!("  - A word-count line is shown after each input (limit: 10,000 words)");
        println!("  - Type /help inside interactive mode for commands");
        println!();
        println!("CONFIGURATION:");
        if let Ok(config_path) = ConfigManager::get_default_config_path() {
            println!("  Config file: {}", config_path.display());
        } else {
            println!("  Config file: tduo.conf");
        }
        println!();
        println!("  Edit 'tduo.conf' to change settings:");
        println!("  - TargetLanguage: Target language (Spanish, French, es, fr, ...)");
        println!("  - CopyToClipboard: Copy results to clipboard");
        println!("  - SaveTranslationHistory: Save all translations to file");
        println!();
        println!("Run 'tduo --config' to see current settings.");
        println!("===============================================");
        println!();
    }

    /// Show version information
    pub fn show_version() {
        println!("Text Translator v{}", env!("CARGO_PKG_VERSION"));
        println!("English translator with a two-provider fallback pipeline");
        println!();
    }

    /// Show current configuration
    pub fn show_config(&self) -> Result<(), Box<dyn Error>> {
        self.config_manager.display_config()
    }

    /// Process CLI arguments and determine action
    pub async fn process_args(&self, args: Vec<String>) -> Result<(), Box<dyn Error>> {
        if args.len() < 2 {
            println!("Error: No arguments provided");
            println!("Use --help for usage information");
            return Ok(());
        }

        let command = &args[1];

        match command.as_str() {
            "-h" | "--help" => {
                Self::show_help();
                Ok(())
            }
            "-c" | "--config" => self.show_config(),
            "-v" | "--version" => {
                Self::show_version();
                Ok(())
            }
            "-l" | "--lang" => {
                if args.len() < 4 {
                    eprintln!("Error: -l requires a language code and text");
                    eprintln!("Usage: tduo -l <code> <text to translate>");
                    return Ok(());
                }
                let target = args[2].clone();
                let text_to_translate = args[3..].join(" ");
                self.translate_text(&text_to_translate, Some(&target)).await
            }
            _ => {
                // Treat as text to translate
                let text_to_translate = args[1..].join(" ");
                self.translate_text(&text_to_translate, None).await
            }
        }
    }

    /// Main translation function for CLI
    pub async fn translate_text(
        &self,
        text: &str,
        target_override: Option<&str>,
    ) -> Result<(), Box<dyn Error>> {
        self.config_manager.check_and_reload().ok();
        let config = self.config_manager.get_config();

        let target_code = match target_override {
            Some(code) => ConfigManager::language_to_code(code).to_string(),
            None => self.config_manager.get_target_code(),
        };

        match self.translator.translate(text, &target_code).await {
            Ok(translation) => {
                println!("{}", translation.text);

                if config.copy_to_clipboard {
                    self.copy_to_clipboard(&translation.text).ok();
                }

                if let Err(e) =
                    self.save_translation_history(text, &translation, &target_code, &config)
                {
                    println!("History save error: {}", e);
                }

                Ok(())
            }
            Err(e) => {
                match &e {
                    // Pre-flight errors get an explanatory message
                    TranslateError::EmptyInput | TranslateError::WordLimitExceeded { .. } => {
                        eprintln!("Error: {}", e);
                    }
                    // Total failure stays generic, whichever provider failed last
                    TranslateError::Unavailable => {
                        eprintln!("Translation failed. Please try again later.");
                    }
                }
                Err(Box::new(e))
            }
        }
    }

    /// Copy text to clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<(), Box<dyn Error>> {
        let clipboard = ClipboardManager::new();
        clipboard.set_text(text)
    }
}
