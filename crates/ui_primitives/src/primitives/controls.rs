use super::*;

#[component]
/// Shared button primitive with `variant`/`size` axes and an as-child mode.
///
/// Unrecognized props go through `attr:` and land on the rendered element,
/// e.g. `<Button attr:type="submit" attr:data-testid="save">`. Without an
/// `attr:type` the element renders as `type="button"`.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] render: ButtonRender,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let mut attrs = attrs;
    let class = button_class(variant, size, class.as_deref().unwrap_or_default());
    let events = ButtonEvents {
        on_click,
        on_keydown,
        on_focus,
        on_blur,
    };

    match render {
        ButtonRender::AsChild(child) => {
            if children.is_some() {
                leptos::logging::debug_warn!("Button children are ignored when rendering as child");
            }
            child
                .merge(class, variant, size, disabled, attrs, events)
                .into_view()
        }
        ButtonRender::Element => {
            let button_type = take_attr(&mut attrs, "type")
                .unwrap_or_else(|| Attribute::String("button".into()));
            view! {
                <button
                    type=button_type
                    class=class
                    node_ref=node_ref
                    disabled=move || disabled.get()
                    data-ui-primitive="true"
                    data-ui-kind="button"
                    data-ui-variant=variant.token()
                    data-ui-size=size.token()
                    {..attrs}
                    on:click=move |ev| events.click(ev)
                    on:keydown=move |ev| events.keydown(ev)
                    on:focus=move |ev| events.focus(ev)
                    on:blur=move |ev| events.blur(ev)
                >
                    {children.map(|children| children())}
                </button>
            }
            .into_view()
        }
    }
}

#[component]
/// Shared single-line text input. `input_type` defaults to `text`; an
/// `attr:type` passthrough takes precedence over it.
pub fn Input(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let mut attrs = attrs;
    let input_type = take_attr(&mut attrs, "type").unwrap_or_else(|| {
        Attribute::String(input_type.unwrap_or_else(|| "text".to_string()).into())
    });

    view! {
        <input
            class=leaf_class(INPUT_BASE, class.as_deref())
            type=input_type
            node_ref=node_ref
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="input"
            {..attrs}
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
        />
    }
}

#[component]
/// Shared multiline text area.
pub fn Textarea(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Textarea>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    view! {
        <textarea
            class=leaf_class(TEXTAREA_BASE, class.as_deref())
            node_ref=node_ref
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="textarea"
            {..attrs}
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
        ></textarea>
    }
}
