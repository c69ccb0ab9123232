//! Theme manifest schema and the bundled default manifest.

use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use globset::Glob;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ThemeError, ThemeResult};

const BUILTIN_MANIFEST_TOML: &str = include_str!("../theme.manifest.toml");

/// Extension category holding named font stacks.
pub const FONT_FAMILY: &str = "fontFamily";
/// Extension category holding custom background images.
pub const BACKGROUND_IMAGE: &str = "backgroundImage";
/// Extension category holding custom shadows.
pub const BOX_SHADOW: &str = "boxShadow";

const DARK_MODE_STRATEGIES: [&str; 3] = ["media", "class", "selector"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Value of one theme token: a plain CSS value or an ordered stack.
pub enum TokenValue {
    /// Single CSS value.
    Single(String),
    /// Ordered fallback list (font stacks).
    Stack(Vec<String>),
}

impl TokenValue {
    /// Render as a CSS value. Stack entries containing whitespace are quoted.
    pub fn to_css(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Stack(values) => values
                .iter()
                .map(|value| {
                    if value.contains(char::is_whitespace) {
                        format!("\"{value}\"")
                    } else {
                        value.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            Self::Single(value) => value.trim().is_empty(),
            Self::Stack(values) => values.iter().all(|value| value.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// `theme` table of the manifest.
pub struct ThemeSection {
    /// Category → token name → value, merged over the framework defaults.
    #[serde(default)]
    pub extend: BTreeMap<String, BTreeMap<String, TokenValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Declarative theme manifest for the utility-CSS build step.
pub struct ThemeManifest {
    /// Dark-mode strategy (`media`, `class`, or `selector`) followed by an
    /// optional custom selector. Empty keeps the build step's default.
    #[serde(default, rename = "darkMode", skip_serializing_if = "Vec::is_empty")]
    pub dark_mode: Vec<String>,
    /// Globs of files scanned for style tokens to retain.
    pub content: Vec<String>,
    /// Theme extensions.
    #[serde(default)]
    pub theme: ThemeSection,
    /// Style-extension plugins, applied in order.
    #[serde(default)]
    pub plugins: Vec<String>,
}

impl ThemeManifest {
    /// Manifest bundled with the template.
    pub fn builtin() -> &'static ThemeManifest {
        static MANIFEST: OnceLock<ThemeManifest> = OnceLock::new();
        MANIFEST.get_or_init(|| {
            Self::from_toml_str(BUILTIN_MANIFEST_TOML, "builtin theme.manifest.toml")
                .expect("bundled theme manifest should parse and validate")
        })
    }

    /// Parse and validate a manifest body. `origin` labels errors.
    pub fn from_toml_str(body: &str, origin: &str) -> ThemeResult<Self> {
        let manifest: Self = toml::from_str(body).map_err(|source| ThemeError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check the semantic rules the schema cannot express.
    pub fn validate(&self) -> ThemeResult<()> {
        if self.content.is_empty() {
            return Err(ThemeError::Validation(
                "at least one content glob is required".into(),
            ));
        }
        if let Some(strategy) = self.dark_mode.first() {
            if !DARK_MODE_STRATEGIES.contains(&strategy.as_str()) {
                return Err(ThemeError::Validation(format!(
                    "unknown dark mode strategy `{strategy}`"
                )));
            }
        }
        for pattern in &self.content {
            Glob::new(pattern).map_err(|source| ThemeError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
        }
        for (category, tokens) in &self.theme.extend {
            if category.trim().is_empty() {
                return Err(ThemeError::Validation("empty extension category".into()));
            }
            for (name, value) in tokens {
                if name.trim().is_empty() {
                    return Err(ThemeError::Validation(format!(
                        "empty token name in `{category}`"
                    )));
                }
                if value.is_blank() {
                    return Err(ThemeError::Validation(format!(
                        "token `{category}.{name}` has no value"
                    )));
                }
            }
        }
        let mut seen = HashSet::new();
        for plugin in &self.plugins {
            if !seen.insert(plugin.as_str()) {
                return Err(ThemeError::Validation(format!(
                    "plugin `{plugin}` listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// Look up a token value.
    pub fn token(&self, category: &str, name: &str) -> Option<&TokenValue> {
        self.theme.extend.get(category)?.get(name)
    }

    /// CSS `font-family` value for a named stack.
    pub fn font_stack(&self, name: &str) -> Option<String> {
        self.token(FONT_FAMILY, name).map(TokenValue::to_css)
    }

    /// Declared extension categories.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.theme.extend.keys().map(String::as_str)
    }

    /// Object consumed by the utility-CSS build step.
    pub fn to_json(&self) -> Value {
        let mut config = json!({
            "content": self.content,
            "theme": { "extend": self.theme.extend },
            "plugins": self.plugins,
        });
        if !self.dark_mode.is_empty() {
            config["darkMode"] = json!(self.dark_mode);
        }
        config
    }
}
