//! Framework-free style-variant resolution for the shared UI primitives.
//!
//! A component kind declares a [`VariantSpec`]: an ordered set of variant
//! axes (`variant`, `size`, ...) whose values each map to a fixed string of
//! style tokens. [`resolve`] turns a caller [`Selection`] plus an override
//! string into one merged class string, falling back to each axis default for
//! omitted or unrecognized values. Nothing here knows about rendering; the
//! Leptos components in `ui_primitives` call into this crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod merge;
mod spec;

pub use merge::merge_tokens;
pub use spec::{Selection, SpecError, SpecResult, VariantAxis, VariantSpec, VariantSpecBuilder};

/// Resolve the merged class string for one render.
///
/// Token order is `base_tokens`, then every axis of `spec` in declaration
/// order, then `overrides`. Duplicate tokens keep their first occurrence.
/// Unknown axes in `selection` are ignored and unknown values fall back to
/// the axis default; resolution never fails.
pub fn resolve(spec: &VariantSpec, base_tokens: &str, selection: &Selection, overrides: &str) -> String {
    let axis_tokens = spec
        .axes()
        .iter()
        .map(|axis| axis.tokens_for(selection.get(axis.name())));

    merge_tokens(
        std::iter::once(base_tokens)
            .chain(axis_tokens)
            .chain(std::iter::once(overrides)),
    )
}
