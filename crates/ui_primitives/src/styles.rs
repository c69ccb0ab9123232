//! Per-component style declarations and class resolution.
//!
//! Every component kind declares its base tokens and [`VariantSpec`] once;
//! the components only pick a selection and hand the caller override through.

use std::sync::OnceLock;

use style_variants::{resolve, Selection, VariantSpec};

use crate::{ButtonSize, ButtonVariant};

pub(crate) const BUTTON_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap \
    rounded-xl text-sm font-semibold transition duration-200 focus-visible:outline-none \
    focus-visible:ring-2 focus-visible:ring-emerald-400 focus-visible:ring-offset-2 \
    focus-visible:ring-offset-white disabled:pointer-events-none disabled:opacity-60";

pub(crate) const CARD_BASE: &str =
    "rounded-3xl border border-slate-200 bg-white text-slate-900 shadow-xl backdrop-blur-lg";
pub(crate) const CARD_HEADER_BASE: &str = "p-6 pb-4";
pub(crate) const CARD_TITLE_BASE: &str = "text-2xl font-semibold leading-tight";
pub(crate) const CARD_DESCRIPTION_BASE: &str = "text-base text-slate-500";
pub(crate) const CARD_CONTENT_BASE: &str = "px-6 pb-6";
pub(crate) const CARD_FOOTER_BASE: &str = "px-6 pb-6";

pub(crate) const INPUT_BASE: &str = "flex h-12 w-full rounded-2xl border border-slate-200 \
    bg-white px-4 text-base text-slate-900 placeholder:text-slate-400 focus-visible:outline-none \
    focus-visible:ring-2 focus-visible:ring-emerald-400 focus-visible:ring-offset-2 \
    focus-visible:ring-offset-white disabled:cursor-not-allowed disabled:opacity-60";

pub(crate) const TEXTAREA_BASE: &str = "flex min-h-[120px] w-full rounded-2xl border \
    border-slate-200 bg-white px-4 py-3 text-base text-slate-900 placeholder:text-slate-400 \
    focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-emerald-400 \
    focus-visible:ring-offset-2 focus-visible:ring-offset-white disabled:cursor-not-allowed \
    disabled:opacity-60";

/// Variant axes of [`Button`](crate::Button).
pub fn button_spec() -> &'static VariantSpec {
    static SPEC: OnceLock<VariantSpec> = OnceLock::new();
    SPEC.get_or_init(|| {
        VariantSpec::builder()
            .axis(
                "variant",
                [
                    ("default", "bg-emerald-500 text-white shadow-glow hover:bg-emerald-400"),
                    (
                        "outline",
                        "border border-slate-200 bg-transparent text-slate-700 \
                         hover:border-emerald-400 hover:text-emerald-600",
                    ),
                    ("secondary", "bg-slate-200 text-slate-900 hover:bg-slate-300/80"),
                    ("ghost", "text-slate-500 hover:text-slate-900 hover:bg-slate-100"),
                    ("destructive", "bg-rose-500 text-white hover:bg-rose-400"),
                    ("link", "text-emerald-500 underline-offset-4 hover:underline"),
                ],
                ButtonVariant::default().token(),
            )
            .axis(
                "size",
                [
                    ("default", "h-12 px-5 py-2"),
                    ("sm", "h-9 rounded-lg px-4"),
                    ("lg", "h-14 rounded-2xl px-6 text-base"),
                    ("icon", "h-11 w-11 rounded-full"),
                ],
                ButtonSize::default().token(),
            )
            .build()
            .expect("button variant spec should be valid")
    })
}

/// Axis-free spec shared by the card regions, input, and textarea.
fn leaf_spec() -> &'static VariantSpec {
    static SPEC: OnceLock<VariantSpec> = OnceLock::new();
    SPEC.get_or_init(VariantSpec::default)
}

/// Resolved class string for a button selection and caller override.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, overrides: &str) -> String {
    let selection = Selection::new()
        .with("variant", variant.token())
        .with("size", size.token());
    resolve(button_spec(), BUTTON_BASE, &selection, overrides)
}

pub(crate) fn leaf_class(base: &str, overrides: Option<&str>) -> String {
    resolve(leaf_spec(), base, &Selection::new(), overrides.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use style_variants::merge_tokens;

    use super::*;

    #[test]
    fn default_button_class_matches_declared_defaults() {
        let spec = button_spec();
        let declared = resolve(spec, BUTTON_BASE, &spec.default_selection(), "");

        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default(), ""),
            declared
        );
        assert!(declared.ends_with(
            "bg-emerald-500 text-white shadow-glow hover:bg-emerald-400 h-12 px-5 py-2"
        ));
    }

    #[test]
    fn every_typed_selection_emits_base_variant_size_once_in_order() {
        let spec = button_spec();
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let class = button_class(variant, size, "");
                let variant_tokens = spec
                    .axis("variant")
                    .expect("variant axis")
                    .tokens_for(Some(variant.token()));
                let size_tokens = spec
                    .axis("size")
                    .expect("size axis")
                    .tokens_for(Some(size.token()));

                assert_eq!(class, merge_tokens([BUTTON_BASE, variant_tokens, size_tokens]));
                for token in class.split_whitespace() {
                    assert_eq!(class.split_whitespace().filter(|c| *c == token).count(), 1);
                }
            }
        }
    }

    #[test]
    fn outline_lg_with_margin_override() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Lg, "mt-4");
        let tokens: Vec<&str> = class.split_whitespace().collect();
        let position = |token: &str| {
            tokens
                .iter()
                .position(|candidate| *candidate == token)
                .unwrap_or_else(|| panic!("missing {token}"))
        };

        assert_eq!(tokens[0], "inline-flex");
        assert!(class.contains("border border-slate-200 bg-transparent text-slate-700"));
        assert!(class.contains("h-14 rounded-2xl px-6 text-base"));
        assert_eq!(tokens.last(), Some(&"mt-4"));
        assert!(position("rounded-xl") < position("rounded-2xl"));
        assert!(position("rounded-2xl") < position("mt-4"));
        assert_eq!(tokens.iter().filter(|token| **token == "text-base").count(), 1);
    }

    #[test]
    fn conflicting_radius_tokens_keep_base_first() {
        let class = button_class(ButtonVariant::Default, ButtonSize::Icon, "rounded-xl");

        assert_eq!(class.matches("rounded-xl").count(), 1);
        assert!(class.find("rounded-xl") < class.find("rounded-full"));
        assert!(class.ends_with("h-11 w-11 rounded-full"));
    }

    #[test]
    fn leaf_class_appends_override_after_base() {
        assert_eq!(
            leaf_class(CARD_CONTENT_BASE, Some("pt-2 px-6")),
            "px-6 pb-6 pt-2"
        );
        assert_eq!(leaf_class(CARD_FOOTER_BASE, None), CARD_FOOTER_BASE);
    }
}
