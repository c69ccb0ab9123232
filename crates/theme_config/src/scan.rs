//! Content matching: which files feed the build step and which tokens they use.

use std::collections::BTreeSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{ThemeError, ThemeResult};
use crate::ThemeManifest;

/// Compiled content globs of a [`ThemeManifest`].
///
/// Patterns are matched against paths relative to the scan root, with a
/// leading `./` ignored.
#[derive(Debug, Clone)]
pub struct ContentScanner {
    globs: GlobSet,
}

impl ContentScanner {
    /// Compile the manifest's content globs.
    pub fn new(manifest: &ThemeManifest) -> ThemeResult<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &manifest.content {
            let glob = Glob::new(pattern.trim_start_matches("./")).map_err(|source| {
                ThemeError::InvalidGlob {
                    pattern: pattern.clone(),
                    source,
                }
            })?;
            builder.add(glob);
        }
        let globs = builder.build().map_err(|source| ThemeError::InvalidGlob {
            pattern: manifest.content.join(", "),
            source,
        })?;
        Ok(Self { globs })
    }

    /// Returns true when a root-relative path is scanned for tokens.
    pub fn is_scanned(&self, relative_path: impl AsRef<Path>) -> bool {
        let path = relative_path.as_ref();
        let path = path.strip_prefix("./").unwrap_or(path);
        self.globs.is_match(path)
    }
}

fn is_candidate_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ':' | '/' | '.' | '[' | ']' | '%' | '#' | '!')
}

/// Extract every string in `source` that could be a style token.
///
/// The extraction is deliberately loose; the build step discards candidates
/// that do not name a known utility.
pub fn extract_candidates(source: &str) -> BTreeSet<String> {
    source
        .split(|ch: char| !is_candidate_char(ch))
        .map(|raw| raw.trim_matches(|ch| matches!(ch, '.' | ':')))
        .filter(|raw| raw.chars().any(|ch| ch.is_ascii_alphabetic()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(content: &[&str]) -> ThemeManifest {
        ThemeManifest {
            dark_mode: Vec::new(),
            content: content.iter().map(|glob| glob.to_string()).collect(),
            theme: Default::default(),
            plugins: Vec::new(),
        }
    }

    #[test]
    fn scanner_matches_relative_paths_with_or_without_dot_prefix() {
        let scanner = ContentScanner::new(&manifest(&["./index.html", "./src/**/*.rs"]))
            .expect("compile globs");

        assert!(scanner.is_scanned("index.html"));
        assert!(scanner.is_scanned("./src/components/button.rs"));
        assert!(!scanner.is_scanned("target/debug/build.rs"));
        assert!(!scanner.is_scanned("src/styles.css"));
    }

    #[test]
    fn extract_candidates_keeps_variant_prefixed_and_arbitrary_tokens() {
        let source = r#"view! { <div class="h-10 px-4 hover:bg-primary/90 w-[42%]">"Hi."</div> }"#;
        let tokens = extract_candidates(source);

        for expected in ["h-10", "px-4", "hover:bg-primary/90", "w-[42%]", "class", "div"] {
            assert!(tokens.contains(expected), "missing {expected}");
        }
        assert!(tokens.contains("Hi"));
        assert!(!tokens.contains("Hi."));
        assert!(!tokens.iter().any(|token| token.chars().all(|ch| !ch.is_ascii_alphabetic())));
    }

    #[test]
    fn builtin_manifest_compiles() {
        let scanner = ContentScanner::new(ThemeManifest::builtin()).expect("compile builtin");
        assert!(scanner.is_scanned("crates/ui_primitives/src/button.rs"));
    }
}
