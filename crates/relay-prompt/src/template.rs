//! MiniJinja-backed localized templates

use crate::{Language, PromptError, Result};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

/// A named template with an English and a Chinese source
///
/// Sources are checked for syntax errors when the template is built.
/// Rendering is strict: referencing a variable the context does not provide
/// is an error, while `{% if var is defined %}` can be used for optional
/// values. Output is never HTML-escaped, so context strings are spliced in
/// verbatim.
pub struct LocalizedTemplate {
    name: String,
    english: String,
    chinese: String,
    env: Environment<'static>,
}

impl LocalizedTemplate {
    /// Create with English and Chinese sources
    pub fn bilingual(
        name: impl Into<String>,
        english: impl Into<String>,
        chinese: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let english = english.into();
        let chinese = chinese.into();

        {
            let check = Environment::new();
            for (lang, source) in [(Language::English, &english), (Language::Chinese, &chinese)] {
                check
                    .template_from_str(source)
                    .map_err(|e| PromptError::TemplateParseFailed {
                        name: name.clone(),
                        language: lang.code().to_string(),
                        detail: e.to_string(),
                    })?;
            }
        }

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        Ok(Self {
            name,
            english,
            chinese,
            env,
        })
    }

    /// Render the `lang` variant with the given context
    pub fn render<S: Serialize>(&self, lang: Language, ctx: &S) -> Result<String> {
        let source = match lang {
            Language::English => &self.english,
            Language::Chinese => &self.chinese,
        };

        self.env
            .render_str(source, ctx)
            .map_err(|e| PromptError::RenderError {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }
}

impl std::fmt::Debug for LocalizedTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizedTemplate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bilingual_render() {
        let template =
            LocalizedTemplate::bilingual("greeting", "Hello, {{ name }}!", "你好，{{ name }}！")
                .unwrap();

        assert_eq!(
            template.render(Language::English, &json!({ "name": "World" })).unwrap(),
            "Hello, World!"
        );
        assert_eq!(
            template.render(Language::Chinese, &json!({ "name": "世界" })).unwrap(),
            "你好，世界！"
        );
    }

    #[test]
    fn test_invalid_template_error() {
        let result = LocalizedTemplate::bilingual("broken", "{{ unclosed", "ok");
        assert!(matches!(
            result,
            Err(PromptError::TemplateParseFailed { ref language, .. }) if language == "en"
        ));
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let template = LocalizedTemplate::bilingual("t", "{{ symbol }}", "{{ symbol }}").unwrap();
        let result = template.render(Language::English, &json!({}));
        assert!(matches!(result, Err(PromptError::RenderError { .. })));
    }

    #[test]
    fn test_optional_variable() {
        let template = LocalizedTemplate::bilingual(
            "t",
            "{{ change }}{% if pct is defined %} ({{ pct }}%){% endif %}",
            "{{ change }}",
        )
        .unwrap();

        assert_eq!(
            template.render(Language::English, &json!({ "change": 1.5 })).unwrap(),
            "1.5"
        );
        assert_eq!(
            template
                .render(Language::English, &json!({ "change": 1.5, "pct": 1.0 }))
                .unwrap(),
            "1.5 (1.0%)"
        );
    }

    #[test]
    fn test_no_html_escaping() {
        let template = LocalizedTemplate::bilingual("t", "{{ name }}", "{{ name }}").unwrap();
        let out = template
            .render(Language::English, &json!({ "name": "<b>A&B</b>" }))
            .unwrap();
        assert_eq!(out, "<b>A&B</b>");
    }

    #[test]
    fn test_invalid_chinese_variant_is_reported() {
        let result = LocalizedTemplate::bilingual("broken", "ok", "{% if %}");
        assert!(matches!(
            result,
            Err(PromptError::TemplateParseFailed { ref language, .. }) if language == "zh"
        ));
    }
}
