//! Output language selection

use crate::PromptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of the prompt and of user-facing messages
///
/// # Examples
///
/// ```
/// use relay_prompt::Language;
///
/// let lang: Language = "zh-CN".parse().unwrap();
/// assert_eq!(lang, Language::Chinese);
/// assert_eq!(lang.code(), "zh");
/// assert!("ja".parse::<Language>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    English,
    /// Chinese (Simplified)
    Chinese,
}

impl Language {
    /// ISO 639-1 language code
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse from ISO 639-1 code, locale tag or common name
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Some(Language::English),
            "zh" | "zh-cn" | "zh-hans" | "chinese" | "中文" => Some(Language::Chinese),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| PromptError::UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code(" english "), Some(Language::English));
        assert_eq!(Language::from_code("zh-Hans"), Some(Language::Chinese));
        assert_eq!(Language::from_code("中文"), Some(Language::Chinese));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_parse_error_names_the_input() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Chinese.to_string(), "zh");
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_value(Language::Chinese).unwrap(),
            serde_json::json!("chinese")
        );
    }
}
