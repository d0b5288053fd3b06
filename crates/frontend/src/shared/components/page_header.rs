use leptos::prelude::*;

/// Header of an entity page: kind caption, title and optional actions
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Entity kind shown above the title ("Table", "Step", ...)
    #[prop(optional, into)]
    kind: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                {kind.map(|k| view! { <div class="page-header__kind">{k}</div> })}
                <h1 class="page-header__title">{title}</h1>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
