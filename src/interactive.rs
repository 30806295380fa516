use crate::clipboard::ClipboardManager;
use crate::config::ConfigManager;
use crate::error::TranslateError;
use crate::translator::Translator;
use crate::words;
use colored::Colorize;
use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;

pub struct InteractiveMode {
    translator: Translator,
    config_manager: Arc<ConfigManager>,
    lang_override: Option<String>,
    last_translation: Option<String>,
}

impl InteractiveMode {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let config_path = ConfigManager::get_default_config_path()?;
        let config_manager = Arc::new(ConfigManager::new(config_path.to_string_lossy().as_ref())?);

        Ok(Self {
            translator: Translator::new(),
            config_manager,
            lang_override: None,
            last_translation: None,
        })
    }

    /// Start interactive translation mode
    pub async fn start(&mut self) -> Result<(), Box<dyn Error>> {
        println!("=== Text Translator v{} ===", env!("CARGO_PKG_VERSION"));
        println!("Type English text and press Enter to translate.");
        println!("Type /help for commands, /quit to exit.");
        println!();

        loop {
            // Pick up config edits between inputs
            self.config_manager.check_and_reload().ok();
            let config = self.config_manager.get_config();
            let target_code = self.current_target_code();

            let prompt = format!("[en -> {}]: ", target_code);
            match ConfigManager::parse_color(&config.translation_prompt_color) {
                Some(color) => print!("{}", prompt.color(color)),
                None => print!("{}", prompt),
            }
            io::stdout().flush()?;

            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) => {
                    // EOF
                    println!();
                    break;
                }
                Ok(_) => {
                    let text = input.trim().to_string();

                    match text.as_str() {
                        "" => continue,
                        "/q" | "/quit" | "/exit" => {
                            println!("Goodbye!");
                            break;
                        }
                        "/h" | "/help" | "/?" => {
                            self.show_help();
                            continue;
                        }
                        "/c" | "/config" => {
                            if let Err(e) = self.config_manager.display_config() {
                                println!("Config error: {}", e);
                            }
                            continue;
                        }
                        "/copy" => {
                            self.copy_last_translation();
                            continue;
                        }
                        "/clear" | "/cls" => {
                            print!("\x1B[2J\x1B[1;1H");
                            io::stdout().flush()?;
                            continue;
                        }
                        _ if text.starts_with("/lang") => {
                            self.set_language(&text);
                            continue;
                        }
                        _ if text.starts_with('/') => {
                            println!("Unknown command: {}", text);
                            println!("Type /help for available commands");
                            continue;
                        }
                        _ => {
                            self.translate_input(&text, &target_code, &config).await;
                        }
                    }
                }
                Err(e) => {
                    println!("Input error: {}", e);
                    continue;
                }
            }
        }

        Ok(())
    }

    /// Target code for the session: /lang override wins over config
    fn current_target_code(&self) -> String {
        match &self.lang_override {
            Some(code) => code.clone(),
            None => self.config_manager.get_target_code(),
        }
    }

    /// Translate one line of input and display the result
    async fn translate_input(&mut self, text: &str, target_code: &str, config: &crate::config::Config) {
        let count = words::count(text);
        println!("{}", words::format_count(count).dimmed());

        match self.translator.translate(text, target_code).await {
            Ok(translation) => {
                println!("{}", translation.text);

                if config.copy_to_clipboard {
                    self.copy_to_clipboard(&translation.text).ok();
                }

                self.last_translation = Some(translation.text);
            }
            Err(e) => match e {
                TranslateError::EmptyInput | TranslateError::WordLimitExceeded { .. } => {
                    println!("{}", format!("Error: {}", e).red());
                }
                TranslateError::Unavailable => {
                    println!("{}", "Translation failed. Please try again later.".red());
                }
            },
        }

        println!();
    }

    /// Handle the /lang command
    fn set_language(&mut self, command: &str) {
        let arg = command.trim_start_matches("/lang").trim();

        if arg.is_empty() {
            println!("Usage: /lang <code or name>  (e.g. /lang fr, /lang French)");
            return;
        }

        let code = ConfigManager::language_to_code(arg).to_string();
        println!("Target language set to '{}' for this session", code);
        self.lang_override = Some(code);
    }

    /// Copy the most recent translation to the clipboard
    fn copy_last_translation(&self) {
        let Some(text) = &self.last_translation else {
            println!("No translated text to copy yet");
            return;
        };

        match self.copy_to_clipboard(text) {
            Ok(_) => println!("Copied to clipboard"),
            Err(_) => {
                // No clipboard here; reprint so the text can be selected by hand
                println!("Clipboard unavailable, select the text below to copy:");
                println!("{}", text);
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), Box<dyn Error>> {
        let clipboard = ClipboardManager::new();
        clipboard.set_text(text)
    }

    /// Show interactive mode help
    fn show_help(&self) {
        println!();
        println!("=== Interactive Mode Help ===");
        println!();
        println!("Type English text and press Enter to translate it.");
        println!("A word-count line is shown for each input; text over");
        println!("10,000 words is rejected before any request is made.");
        println!();
        println!("Commands:");
        println!("  /h, /help, /?     - Show this help");
        println!("  /c, /config       - Show current translation settings");
        println!("  /lang <code>      - Change target language for this session");
        println!("  /copy             - Copy the last translation to clipboard");
        println!("  /clear, /cls      - Clear screen");
        println!("  /q, /quit, /exit  - Exit program");
        println!();
        println!("Translation uses Google Translate first and falls back to");
        println!("LibreTranslate automatically when the primary service fails.");
        println!("=============================");
        println!();
    }
}
