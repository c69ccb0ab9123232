//! Shared control and card primitives plus their typed variant selections.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::html::AnyElement;
use leptos::*;

use crate::styles::{
    button_class, leaf_class, CARD_BASE, CARD_CONTENT_BASE, CARD_DESCRIPTION_BASE,
    CARD_FOOTER_BASE, CARD_HEADER_BASE, CARD_TITLE_BASE, INPUT_BASE, TEXTAREA_BASE,
};

mod card;
mod controls;

pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use controls::{Button, Input, Textarea};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button `variant` axis.
pub enum ButtonVariant {
    /// Filled primary action.
    #[default]
    Default,
    /// Destructive action.
    Destructive,
    /// Bordered, transparent background.
    Outline,
    /// Muted filled action.
    Secondary,
    /// Background only on hover.
    Ghost,
    /// Styled as an inline link.
    Link,
}

impl ButtonVariant {
    /// Every variant in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    /// Axis value name.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    /// Parse an axis value name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.token() == value)
    }

    /// Parse an axis value name, falling back to [`ButtonVariant::Default`].
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            leptos::logging::debug_warn!("unknown button variant `{value}`, using default");
            Self::default()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button `size` axis.
pub enum ButtonSize {
    /// Standard height.
    #[default]
    Default,
    /// Dense.
    Sm,
    /// Large.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    /// Every size in declaration order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Sm, Self::Lg, Self::Icon];

    /// Axis value name.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    /// Parse an axis value name.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.token() == value)
    }

    /// Parse an axis value name, falling back to [`ButtonSize::Default`].
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            leptos::logging::debug_warn!("unknown button size `{value}`, using default");
            Self::default()
        })
    }
}

/// Caller-supplied element a [`Button`] styles instead of rendering its own.
///
/// The button adds its resolved classes and passthrough attributes to the
/// element and binds `node_ref` to it.
pub struct AsChild {
    render: Box<dyn FnOnce() -> HtmlElement<AnyElement>>,
    node_ref: NodeRef<AnyElement>,
}

impl AsChild {
    /// Wrap the single child element.
    pub fn new<El>(render: impl FnOnce() -> HtmlElement<El> + 'static) -> Self
    where
        El: html::ElementDescriptor + 'static,
    {
        Self {
            render: Box::new(move || render().into_any()),
            node_ref: NodeRef::new(),
        }
    }

    /// Reference handle bound to the child element.
    pub fn node_ref(mut self, node_ref: NodeRef<AnyElement>) -> Self {
        self.node_ref = node_ref;
        self
    }

    fn merge(
        self,
        class: String,
        variant: ButtonVariant,
        size: ButtonSize,
        disabled: MaybeSignal<bool>,
        attrs: Vec<(&'static str, Attribute)>,
        events: ButtonEvents,
    ) -> HtmlElement<AnyElement> {
        let mut element = (self.render)()
            .classes(class)
            .attr("aria-disabled", move || disabled.get().then_some("true"))
            .attr("data-ui-primitive", "true")
            .attr("data-ui-kind", "button")
            .attr("data-ui-variant", variant.token())
            .attr("data-ui-size", size.token());
        for (name, value) in attrs {
            element = element.attr(name, value);
        }
        element
            .on(ev::click, move |ev| {
                if disabled.get_untracked() {
                    ev.prevent_default();
                    return;
                }
                events.click(ev);
            })
            .on(ev::keydown, move |ev| events.keydown(ev))
            .on(ev::focus, move |ev| events.focus(ev))
            .on(ev::blur, move |ev| events.blur(ev))
            .node_ref(self.node_ref)
    }
}

impl std::fmt::Debug for AsChild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsChild").finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Default)]
struct ButtonEvents {
    on_click: Option<Callback<MouseEvent>>,
    on_keydown: Option<Callback<KeyboardEvent>>,
    on_focus: Option<Callback<FocusEvent>>,
    on_blur: Option<Callback<FocusEvent>>,
}

impl ButtonEvents {
    fn click(&self, ev: MouseEvent) {
        if let Some(on_click) = self.on_click.as_ref() {
            on_click.call(ev);
        }
    }

    fn keydown(&self, ev: KeyboardEvent) {
        if let Some(on_keydown) = self.on_keydown.as_ref() {
            on_keydown.call(ev);
        }
    }

    fn focus(&self, ev: FocusEvent) {
        if let Some(on_focus) = self.on_focus.as_ref() {
            on_focus.call(ev);
        }
    }

    fn blur(&self, ev: FocusEvent) {
        if let Some(on_blur) = self.on_blur.as_ref() {
            on_blur.call(ev);
        }
    }
}

/// Remove a passthrough attribute so the component can apply it once itself.
pub(crate) fn take_attr(attrs: &mut Vec<(&'static str, Attribute)>, name: &str) -> Option<Attribute> {
    let index = attrs.iter().position(|(key, _)| *key == name)?;
    Some(attrs.remove(index).1)
}

#[derive(Debug, Default)]
/// How a [`Button`] renders: its own `<button>`, or onto a caller element.
pub enum ButtonRender {
    /// Render a `<button type="button">`.
    #[default]
    Element,
    /// Merge classes and attributes onto a single caller element, e.g. a link.
    AsChild(AsChild),
}

impl From<AsChild> for ButtonRender {
    fn from(child: AsChild) -> Self {
        Self::AsChild(child)
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;

    fn render<F, N>(view: F) -> String
    where
        F: FnOnce() -> N,
        N: IntoView,
    {
        let runtime = create_runtime();
        let html = view().into_view().render_to_string().to_string();
        runtime.dispose();
        html
    }

    #[test]
    fn button_forwards_passthrough_attributes() {
        let html = render(|| {
            view! {
                <Button variant=ButtonVariant::Outline size=ButtonSize::Lg class="mt-4" attr:data-testid="save">
                    "Save"
                </Button>
            }
        });

        assert!(html.contains("data-testid=\"save\""));
        assert!(html.contains(&button_class(ButtonVariant::Outline, ButtonSize::Lg, "mt-4")));
        assert!(html.contains("data-ui-variant=\"outline\""));
    }

    #[test]
    fn as_child_button_styles_the_link() {
        let html = render(|| {
            view! {
                <Button
                    variant=ButtonVariant::Link
                    render=AsChild::new(|| view! { <a href="/docs">"Docs"</a> })
                    attr:aria-label="Documentation"
                />
            }
        });

        assert!(html.contains("<a"));
        assert!(html.contains("href=\"/docs\""));
        assert!(html.contains("aria-label=\"Documentation\""));
        assert!(html.contains("underline-offset-4"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn card_regions_merge_overrides_and_attributes() {
        let html = render(|| {
            view! {
                <Card class="w-[350px]" attr:data-section="pricing">
                    <CardHeader>
                        <CardTitle>"Plan"</CardTitle>
                        <CardDescription class="italic">"Monthly"</CardDescription>
                    </CardHeader>
                    <CardContent>"Body"</CardContent>
                    <CardFooter>"Actions"</CardFooter>
                </Card>
            }
        });

        assert!(html.contains(&leaf_class(CARD_BASE, Some("w-[350px]"))));
        assert!(html.contains("data-section=\"pricing\""));
        assert!(html.contains(&leaf_class(CARD_DESCRIPTION_BASE, Some("italic"))));
        assert!(html.contains("data-ui-kind=\"card-footer\""));
    }

    #[test]
    fn fields_forward_placeholder_and_kind() {
        let html = render(|| {
            view! {
                <div>
                    <Input attr:placeholder="Email" input_type="email" />
                    <Textarea attr:rows="4" class="resize-none" />
                </div>
            }
        });

        assert!(html.contains("placeholder=\"Email\""));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("rows=\"4\""));
        assert!(html.contains("resize-none"));
    }

    #[test]
    fn passthrough_type_replaces_default_button_type() {
        let html = render(|| view! { <Button attr:type="submit">"Save"</Button> });

        assert_eq!(html.matches("type=").count(), 1);
        assert!(html.contains("type=\"submit\""));
        assert!(!html.contains("type=\"button\""));
    }

    #[test]
    fn passthrough_type_wins_over_input_type_prop() {
        let html = render(|| view! { <Input input_type="search" attr:type="email" /> });

        assert_eq!(html.matches("type=").count(), 1);
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn input_type_defaults_to_text() {
        let html = render(|| view! { <Input /> });

        assert!(html.contains("type=\"text\""));
    }

    #[test]
    fn disabled_as_child_marks_the_link() {
        let html = render(|| {
            view! {
                <Button disabled=true render=AsChild::new(|| view! { <a href="/download">"Download"</a> }) />
            }
        });

        assert!(html.contains("aria-disabled=\"true\""));
        assert!(html.contains("href=\"/download\""));
    }

    #[test]
    fn enabled_as_child_has_no_disabled_marker() {
        let html = render(|| {
            view! { <Button render=AsChild::new(|| view! { <a href="/docs">"Docs"</a> }) /> }
        });

        assert!(!html.contains("aria-disabled"));
    }

    #[test]
    fn fields_accept_keyboard_and_focus_handlers() {
        let html = render(|| {
            view! {
                <div>
                    <Button
                        on_keydown=Callback::new(|_| {})
                        on_focus=Callback::new(|_| {})
                        on_blur=Callback::new(|_| {})
                    >
                        "Go"
                    </Button>
                    <Input
                        on_change=Callback::new(|_| {})
                        on_keydown=Callback::new(|_| {})
                        on_focus=Callback::new(|_| {})
                        on_blur=Callback::new(|_| {})
                    />
                    <Textarea on_change=Callback::new(|_| {}) on_blur=Callback::new(|_| {}) />
                </div>
            }
        });

        assert!(html.contains("data-ui-kind=\"button\""));
        assert!(html.contains("data-ui-kind=\"input\""));
        assert!(html.contains("data-ui-kind=\"textarea\""));
    }

    #[test]
    fn card_regions_render_without_children() {
        let html = render(|| {
            view! {
                <Card>
                    <CardHeader />
                    <CardFooter />
                </Card>
            }
        });

        assert!(html.contains("data-ui-kind=\"card-header\""));
        assert!(html.contains("data-ui-kind=\"card-footer\""));
    }
}
