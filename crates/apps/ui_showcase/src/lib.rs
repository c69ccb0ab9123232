//! Showcase page for the template's presentational primitives.
//!
//! Renders every button variant and size, an as-child link button, a card
//! with all five regions, and a small form built from `Input` and `Textarea`.
//! The page is also where reference handles and passthrough attributes get
//! exercised end to end.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use theme_config::ThemeManifest;
use ui_primitives::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct ShowcaseState {
    variant: String,
    size: String,
    name: String,
    notes: String,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            variant: ButtonVariant::default().token().to_string(),
            size: ButtonSize::default().token().to_string(),
            name: String::new(),
            notes: String::new(),
        }
    }
}

impl ShowcaseState {
    fn from_launch_params(params: Option<Value>) -> Self {
        let Some(params) = params else {
            return Self::default();
        };
        match serde_json::from_value(params) {
            Ok(state) => state,
            Err(err) => {
                logging::warn!("ui showcase launch params ignored: {err}");
                Self::default()
            }
        }
    }

    fn button_variant(&self) -> ButtonVariant {
        ButtonVariant::parse_or_default(&self.variant)
    }

    fn button_size(&self) -> ButtonSize {
        ButtonSize::parse_or_default(&self.size)
    }
}

fn font_style(stack: &str) -> String {
    ThemeManifest::builtin()
        .font_stack(stack)
        .map(|family| format!("font-family: {family}"))
        .unwrap_or_default()
}

#[component]
/// Showcase page contents.
pub fn UiShowcaseApp(
    /// Optional `{ "variant": .., "size": .. }` preselection. Unknown values
    /// fall back to the defaults.
    #[prop(default = None)]
    launch_params: Option<Value>,
) -> impl IntoView {
    let state = create_rw_signal(ShowcaseState::from_launch_params(launch_params));
    let name_ref = create_node_ref::<html::Input>();
    let docs_ref = create_node_ref::<html::AnyElement>();

    view! {
        <main class="mx-auto flex max-w-3xl flex-col gap-8 p-8" style=font_style("sans")>
            <h1 class="text-3xl font-bold" style=font_style("serif")>"Primitives"</h1>

            <section class="flex flex-col gap-4" data-ui-slot="buttons">
                <div class="flex flex-wrap gap-2">
                    {ButtonVariant::ALL
                        .into_iter()
                        .map(|variant| {
                            view! {
                                <Button
                                    variant=variant
                                    attr:data-variant=variant.token()
                                    on_click=Callback::new(move |_| {
                                        state.update(|value| value.variant = variant.token().to_string());
                                    })
                                >
                                    {variant.token()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap items-center gap-2">
                    {ButtonSize::ALL
                        .into_iter()
                        .map(|size| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=size
                                    on_click=Callback::new(move |_| {
                                        state.update(|value| value.size = size.token().to_string());
                                    })
                                >
                                    {size.token()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let current = state.get();
                    view! {
                        <Button
                            variant=current.button_variant()
                            size=current.button_size()
                            class="self-start shadow-glow"
                        >
                            {format!("{} / {}", current.button_variant().token(), current.button_size().token())}
                        </Button>
                    }
                }}
                <Button
                    variant=ButtonVariant::Link
                    render=AsChild::new(|| view! { <a href="/docs">"Read the docs"</a> }).node_ref(docs_ref)
                    attr:aria-label="Documentation"
                />
            </section>

            <Card class="w-full" attr:data-section="profile">
                <CardHeader>
                    <CardTitle>"Profile"</CardTitle>
                    <CardDescription>"Passthrough attributes and reference handles."</CardDescription>
                </CardHeader>
                <CardContent class="flex flex-col gap-4">
                    <Input
                        node_ref=name_ref
                        attr:placeholder="Name"
                        attr:autocomplete="name"
                        value=Signal::derive(move || state.get().name)
                        on_input=Callback::new(move |ev| {
                            let next = event_target_value(&ev);
                            state.update(|value| value.name = next);
                        })
                    />
                    <Textarea
                        attr:placeholder="Notes"
                        attr:rows="4"
                        class="resize-none"
                        value=Signal::derive(move || state.get().notes)
                        on_input=Callback::new(move |ev| {
                            let next = event_target_value(&ev);
                            state.update(|value| value.notes = next);
                        })
                    />
                </CardContent>
                <CardFooter class="justify-between">
                    <Button
                        variant=ButtonVariant::Ghost
                        on_click=Callback::new(move |_| {
                            if let Some(input) = name_ref.get() {
                                if let Err(err) = input.focus() {
                                    logging::warn!("focus failed: {err:?}");
                                }
                            }
                        })
                    >
                        "Focus name"
                    </Button>
                    <Button attr:type="submit" disabled=Signal::derive(move || state.get().name.trim().is_empty())>
                        "Save"
                    </Button>
                </CardFooter>
            </Card>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn launch_params_select_variant_and_size() {
        let state = ShowcaseState::from_launch_params(Some(json!({
            "variant": "outline",
            "size": "lg",
        })));

        assert_eq!(state.button_variant(), ButtonVariant::Outline);
        assert_eq!(state.button_size(), ButtonSize::Lg);
        assert_eq!(state.name, "");
    }

    #[test]
    fn unknown_launch_values_fall_back_to_defaults() {
        let state = ShowcaseState::from_launch_params(Some(json!({ "variant": "nonexistent" })));
        assert_eq!(state.button_variant(), ButtonVariant::Default);
        assert_eq!(state.button_size(), ButtonSize::Default);

        let malformed = ShowcaseState::from_launch_params(Some(json!("outline")));
        assert_eq!(malformed, ShowcaseState::default());
    }

    #[test]
    fn font_style_uses_builtin_theme_stacks() {
        assert_eq!(
            font_style("sans"),
            "font-family: Inter, system-ui, sans-serif"
        );
        assert_eq!(font_style("missing"), "");
    }
}
