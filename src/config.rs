use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub struct Config {
    pub target_language: String,
    pub copy_to_clipboard: bool,
    pub save_translation_history: bool,
    pub history_file: String,
    pub translation_prompt_color: String,
}

impl Default for Config {
    fn default() -> Self {
        // Prefer the user config dir for history, fallback to current directory
        let default_history = if let Some(config_dir) = dirs::config_dir() {
            let history_path = config_dir.join("Tduo").join("translation_history.txt");
            history_path.to_string_lossy().to_string()
        } else {
            "translation_history.txt".to_string()
        };

        Self {
            target_language: "Spanish".to_string(),
            copy_to_clipboard: true,
            save_translation_history: false,
            history_file: default_history,
            translation_prompt_color: "BrightYellow".to_string(),
        }
    }
}

pub struct ConfigManager {
    config_path: String,
    config: Arc<Mutex<Config>>,
    last_modified: Arc<Mutex<Option<SystemTime>>>,
}

impl ConfigManager {
    /// Get default configuration file path in the user config directory
    pub fn get_default_config_path() -> Result<PathBuf, Box<dyn Error>> {
        let config_dir = dirs::config_dir()
            .ok_or("Failed to get config directory")?
            .join("Tduo");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir.join("tduo.conf"))
    }

    pub fn new(config_path: &str) -> Result<Self, Box<dyn Error>> {
        let manager = Self {
            config_path: config_path.to_string(),
            config: Arc::new(Mutex::new(Config::default())),
            last_modified: Arc::new(Mutex::new(None)),
        };

        manager.load_or_create_config()?;

        Ok(manager)
    }

    /// Load configuration from file or create default if not exists
    fn load_or_create_config(&self) -> Result<(), Box<dyn Error>> {
        if Path::new(&self.config_path).exists() {
            self.load_config()?;
        } else {
            self.create_default_config()?;
        }
        Ok(())
    }

    /// Create default configuration file
    fn create_default_config(&self) -> Result<(), Box<dyn Error>> {
        let default_config = Config::default();
        let ini_content = self.create_ini_content(&default_config);

        fs::write(&self.config_path, ini_content)?;
        println!("Created default configuration file: {}", self.config_path);

        self.update_last_modified_time()?;

        Ok(())
    }

    /// Create INI format content
    fn create_ini_content(&self, config: &Config) -> String {
        format!(
            r#"; Text Translator Configuration File
; Translates English text using Google Translate with automatic
; fallback to LibreTranslate when the primary service fails.
;
; Configuration changes take effect immediately (no restart required)

[Translation]
; Target language for translation
; Supported values: Spanish, French, German, Russian, Chinese, Japanese,
; Korean, Italian, Portuguese, Dutch, Polish, Turkish, Arabic, Hindi
; A two-letter language code (es, fr, de, ...) is also accepted
TargetLanguage = {}

; Automatically copy translation result to clipboard
; Set to true to automatically copy result to clipboard after translation
; Set to false to display result only (without copying to clipboard)
CopyToClipboard = {}

[Colors]
; Color for the translation prompt (e.g., "[en -> es]: ")
; Supported values: Black, Red, Green, Yellow, Blue, Magenta, Cyan, White,
; BrightBlack, BrightRed, BrightGreen, BrightYellow, BrightBlue, BrightMagenta, BrightCyan, BrightWhite
; Use "None" to disable color
; Default: BrightYellow
TranslationPromptColor = {}

[History]
; Save translation history to file
; Set to true to save all translations with timestamps to a text file
; History includes original text, translation, target language, and timestamp
SaveTranslationHistory = {}

; History file path
; Path can be absolute or relative to the program directory
; File will be created automatically if it doesn't exist
HistoryFile = {}
"#,
            config.target_language,
            config.copy_to_clipboard,
            config.translation_prompt_color,
            config.save_translation_history,
            config.history_file
        )
    }

    /// Load configuration from INI file
    fn load_config(&self) -> Result<(), Box<dyn Error>> {
        let content = fs::read_to_string(&self.config_path)?;
        let parsed_config = self.parse_ini(&content)?;

        let target_lang = parsed_config
            .get("Translation")
            .and_then(|section| section.get("TargetLanguage"))
            .cloned()
            .unwrap_or_else(|| "Spanish".to_string());

        let copy_to_clipboard = parsed_config
            .get("Translation")
            .and_then(|section| section.get("CopyToClipboard"))
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(true);

        let translation_prompt_color = parsed_config
            .get("Colors")
            .and_then(|section| section.get("TranslationPromptColor"))
            .cloned()
            .unwrap_or_else(|| "BrightYellow".to_string());

        let save_translation_history = parsed_config
            .get("History")
            .and_then(|section| section.get("SaveTranslationHistory"))
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        let history_file = parsed_config
            .get("History")
            .and_then(|section| section.get("HistoryFile"))
            .cloned()
            .unwrap_or_else(|| "translation_history.txt".to_string());

        let new_config = Config {
            target_language: target_lang,
            copy_to_clipboard,
            save_translation_history,
            history_file,
            translation_prompt_color,
        };

        if let Ok(mut config) = self.config.lock() {
            *config = new_config;
        }

        self.update_last_modified_time()?;

        Ok(())
    }

    /// Parse INI format content
    fn parse_ini(
        &self,
        content: &str,
    ) -> Result<HashMap<String, HashMap<String, String>>, Box<dyn Error>> {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            // Section header
            if line.starts_with('[') && line.ends_with(']') {
                let section_name = line[1..line.len() - 1].to_string();
                current_section = Some(section_name.clone());
                sections.insert(section_name, HashMap::new());
            }
            // Key-value pair
            else if let Some(eq_pos) = line.find('=') {
                let key = line[..eq_pos].trim().to_string();
                let value = line[eq_pos + 1..].trim().to_string();

                if let Some(section_name) = &current_section {
                    if let Some(section) = sections.get_mut(section_name) {
                        section.insert(key, value);
                    }
                }
            }
        }

        Ok(sections)
    }

    /// Get current configuration
    pub fn get_config(&self) -> Config {
        self.config.lock().unwrap().clone()
    }

    /// Check if config file was modified and reload if necessary
    pub fn check_and_reload(&self) -> Result<bool, Box<dyn Error>> {
        if !Path::new(&self.config_path).exists() {
            return Ok(false);
        }

        let metadata = fs::metadata(&self.config_path)?;
        let current_modified = metadata.modified()?;

        let should_reload = {
            let last_modified = self.last_modified.lock().unwrap();
            match *last_modified {
                Some(last) => current_modified > last,
                None => true,
            }
        };

        if should_reload {
            self.load_config()?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Update last modified time
    fn update_last_modified_time(&self) -> Result<(), Box<dyn Error>> {
        if Path::new(&self.config_path).exists() {
            let metadata = fs::metadata(&self.config_path)?;
            let modified = metadata.modified()?;

            if let Ok(mut last_modified) = self.last_modified.lock() {
                *last_modified = Some(modified);
            }
        }
        Ok(())
    }

    /// Convert language name to Google Translate language code
    pub fn language_to_code(language: &str) -> &str {
        match language.to_lowercase().as_str() {
            "english" => "en",
            "russian" => "ru",
            "spanish" => "es",
            "french" => "fr",
            "german" => "de",
            "chinese" => "zh",
            "japanese" => "ja",
            "korean" => "ko",
            "italian" => "it",
            "portuguese" => "pt",
            "dutch" => "nl",
            "polish" => "pl",
            "turkish" => "tr",
            "arabic" => "ar",
            "hindi" => "hi",
            _ => language, // Return as-is if not found (might be a code already)
        }
    }

    /// Get the target language code for translation
    pub fn get_target_code(&self) -> String {
        let config = self.get_config();
        Self::language_to_code(&config.target_language).to_string()
    }

    /// Parse color name to colored::Color enum
    /// Returns None for "None" or empty string (no color)
    pub fn parse_color(color_name: &str) -> Option<colored::Color> {
        let color_lower = color_name.trim().to_lowercase();

        if color_lower.is_empty() || color_lower == "none" {
            return None;
        }

        match color_lower.as_str() {
            "black" => Some(colored::Color::Black),
            "red" => Some(colored::Color::Red),
            "green" => Some(colored::Color::Green),
            "yellow" => Some(colored::Color::Yellow),
            "blue" => Some(colored::Color::Blue),
            "magenta" => Some(colored::Color::Magenta),
            "cyan" => Some(colored::Color::Cyan),
            "white" => Some(colored::Color::White),
            "brightblack" | "bright_black" => Some(colored::Color::BrightBlack),
            "brightred" | "bright_red" => Some(colored::Color::BrightRed),
            "brightgreen" | "bright_green" => Some(colored::Color::BrightGreen),
            "brightyellow" | "bright_yellow" => Some(colored::Color::BrightYellow),
            "brightblue" | "bright_blue" => Some(colored::Color::BrightBlue),
            "brightmagenta" | "bright_magenta" => Some(colored::Color::BrightMagenta),
            "brightcyan" | "bright_cyan" => Some(colored::Color::BrightCyan),
            "brightwhite" | "bright_white" => Some(colored::Color::BrightWhite),
            _ => None,
        }
    }

    /// Display current configuration
    pub fn display_config(&self) -> Result<(), Box<dyn Error>> {
        self.check_and_reload()?;
        let config = self.get_config();
        let target_code = self.get_target_code();

        println!();
        println!("=== Current Configuration ===");
        println!(
            "Target Language: {} ({})",
            config.target_language, target_code
        );
        println!(
            "Copy to Clipboard: {}",
            if config.copy_to_clipboard {
                "Enabled"
            } else {
                "Disabled"
            }
        );
        println!(
            "Save Translation History: {}",
            if config.save_translation_history {
                "Enabled"
            } else {
                "Disabled"
            }
        );
        println!("History File: {}", config.history_file);
        println!();

        if let Ok(config_path) = ConfigManager::get_default_config_path() {
            println!("Config file: {}", config_path.display());
        } else {
            println!("Config file: tduo.conf");
        }
        println!("Edit this file to change settings (changes take effect immediately)");
        println!("============================");
        println!();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_without_file() -> ConfigManager {
        ConfigManager {
            config_path: String::new(),
            config: Arc::new(Mutex::new(Config::default())),
            last_modified: Arc::new(Mutex::new(None)),
        }
    }

    #[test]
    fn test_parse_ini_sections_and_comments() {
        let manager = manager_without_file();
        let content = r#"
; a comment
[Translation]
TargetLanguage = French
CopyToClipboard = false

[History]
SaveTranslationHistory = true
"#;

        let parsed = manager.parse_ini(content).unwrap();

        assert_eq!(
            parsed["Translation"]["TargetLanguage"],
            "French".to_string()
        );
        assert_eq!(parsed["Translation"]["CopyToClipboard"], "false".to_string());
        assert_eq!(parsed["History"]["SaveTranslationHistory"], "true".to_string());
    }

    #[test]
    fn test_language_to_code() {
        assert_eq!(ConfigManager::language_to_code("Spanish"), "es");
        assert_eq!(ConfigManager::language_to_code("french"), "fr");
        // Unknown names pass through, so raw codes keep working
        assert_eq!(ConfigManager::language_to_code("es"), "es");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(
            ConfigManager::parse_color("BrightYellow"),
            Some(colored::Color::BrightYellow)
        );
        assert_eq!(ConfigManager::parse_color("None"), None);
        assert_eq!(ConfigManager::parse_color(""), None);
        assert_eq!(ConfigManager::parse_color("nosuchcolor"), None);
    }
}
