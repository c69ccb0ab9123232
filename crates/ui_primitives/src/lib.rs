//! Presentational Leptos primitives for the web front-end template.
//!
//! Button, card (container plus header, title, description, content and
//! footer regions), input, and textarea. Each component resolves its class
//! string through `style_variants`, spreads `attr:` passthrough attributes
//! onto the rendered element, and binds an optional [`NodeRef`](leptos::NodeRef)
//! to it. Every component also emits the `data-ui-primitive` /
//! `data-ui-kind` DOM contract for styling and test hooks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
mod styles;

pub use primitives::{
    AsChild, Button, ButtonRender, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, Input, Textarea,
};
pub use styles::{button_class, button_spec};

/// Convenience imports for application crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        AsChild, Button, ButtonRender, ButtonSize, ButtonVariant, Card, CardContent,
        CardDescription, CardFooter, CardHeader, CardTitle, Input, Textarea,
    };
}
