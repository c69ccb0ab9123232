//! Theme manifest for the utility-CSS build step.
//!
//! The manifest names font stacks and other custom theme tokens, the content
//! globs scanned to decide which style tokens survive the build, and the
//! ordered plugin list. The template bundles a default manifest
//! ([`ThemeManifest::builtin`]); projects may load their own from disk with
//! [`ConfigLoader`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod error;
mod loader;
mod manifest;
mod scan;

pub use error::{ThemeError, ThemeResult};
pub use loader::ConfigLoader;
pub use manifest::{
    ThemeManifest, ThemeSection, TokenValue, BACKGROUND_IMAGE, BOX_SHADOW, FONT_FAMILY,
};
pub use scan::{extract_candidates, ContentScanner};

/// Load and validate a manifest at `relative_path` under `root`.
pub fn load_manifest(root: &std::path::Path, relative_path: &str) -> ThemeResult<ThemeManifest> {
    let manifest = ConfigLoader::<ThemeManifest>::new(root, relative_path).load()?;
    manifest.validate()?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_manifest_validates_after_parsing() {
        let root = std::env::temp_dir().join(format!(
            "theme-config-load-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ));
        fs::create_dir_all(&root).expect("create root");
        fs::write(
            root.join("theme.manifest.toml"),
            "content = [\"./src/**/*.rs\"]\n[theme.extend.boxShadow]\nsoft = \"0 1px 2px black\"\n",
        )
        .expect("write valid manifest");
        fs::write(root.join("empty.toml"), "content = []\n").expect("write empty manifest");

        let manifest = load_manifest(&root, "theme.manifest.toml").expect("valid manifest");
        assert_eq!(
            manifest.token(BOX_SHADOW, "soft"),
            Some(&TokenValue::Single("0 1px 2px black".into()))
        );
        assert!(matches!(
            load_manifest(&root, "empty.toml"),
            Err(ThemeError::Validation(_))
        ));

        let _ = fs::remove_dir_all(root);
    }
}
