//! Localized templates for stock-relay
//!
//! Every user-visible text the relay produces (the commentary prompt and the
//! fallback messages) exists in English and Chinese. This crate holds the
//! [`Language`] selector and [`LocalizedTemplate`], a MiniJinja-backed template
//! with one source per language.
//!
//! # Quick Start
//!
//! ```
//! use relay_prompt::{Language, LocalizedTemplate};
//! use serde_json::json;
//!
//! let template = LocalizedTemplate::bilingual(
//!     "greeting",
//!     "Hello, {{ name }}!",
//!     "你好，{{ name }}！",
//! ).unwrap();
//!
//! let en = template.render(Language::English, &json!({ "name": "World" })).unwrap();
//! assert_eq!(en, "Hello, World!");
//!
//! let zh = template.render(Language::Chinese, &json!({ "name": "世界" })).unwrap();
//! assert_eq!(zh, "你好，世界！");
//! ```

mod error;
mod language;
mod template;

pub use error::{PromptError, Result};
pub use language::Language;
pub use template::LocalizedTemplate;
