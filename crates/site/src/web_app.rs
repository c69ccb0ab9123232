use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use serde_json::{Map, Value};
use ui_showcase::UiShowcaseApp;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Primitives" />
        <Meta name="description" content="Button, card, input, and textarea primitives for new web projects." />

        <Router>
            <Routes>
                <Route path="" view=ShowcaseEntry />
            </Routes>
        </Router>
    }
}

/// `/?variant=outline&size=lg` preselects the showcase button.
#[component]
pub fn ShowcaseEntry() -> impl IntoView {
    let query = use_query_map();
    let launch_params = query.with_untracked(|map| {
        launch_params_from_query(map.get("variant").cloned(), map.get("size").cloned())
    });

    view! { <UiShowcaseApp launch_params=launch_params /> }
}

fn launch_params_from_query(variant: Option<String>, size: Option<String>) -> Option<Value> {
    let mut params = Map::new();
    if let Some(variant) = variant {
        params.insert("variant".into(), Value::String(variant));
    }
    if let Some(size) = size {
        params.insert("size".into(), Value::String(size));
    }
    (!params.is_empty()).then_some(Value::Object(params))
}
