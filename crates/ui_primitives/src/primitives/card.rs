use super::*;

#[component]
/// Card container.
pub fn Card(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=leaf_class(CARD_BASE, class.as_deref())
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="card"
            {..attrs}
        >
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Card header region holding title and description.
pub fn CardHeader(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=leaf_class(CARD_HEADER_BASE, class.as_deref())
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="card-header"
            {..attrs}
        >
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Card title text.
pub fn CardTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::H3>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <h3
            class=leaf_class(CARD_TITLE_BASE, class.as_deref())
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="card-title"
            {..attrs}
        >
            {children.map(|children| children())}
        </h3>
    }
}

#[component]
/// Card description text.
pub fn CardDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::P>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <p
            class=leaf_class(CARD_DESCRIPTION_BASE, class.as_deref())
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="card-description"
            {..attrs}
        >
            {children.map(|children| children())}
        </p>
    }
}

#[component]
/// Card body.
pub fn CardContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=leaf_class(CARD_CONTENT_BASE, class.as_deref())
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="card-content"
            {..attrs}
        >
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Card footer, usually a row of actions.
pub fn CardFooter(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=leaf_class(CARD_FOOTER_BASE, class.as_deref())
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="card-footer"
            {..attrs}
        >
            {children.map(|children| children())}
        </div>
    }
}
