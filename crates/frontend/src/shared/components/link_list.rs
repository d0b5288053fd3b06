use leptos::prelude::*;

/// One navigable entry; `href` is a `#fragment` handled by the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
    /// Secondary text shown on the right (e.g. a column count)
    pub hint: Option<String>,
}

impl LinkItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Titled list of links; an empty list still renders its heading
#[component]
pub fn LinkList(
    #[prop(optional, into)] title: Option<String>,
    items: Vec<LinkItem>,
) -> impl IntoView {
    view! {
        <section class="link-list">
            {title.map(|t| view! { <h2 class="link-list__title">{t}</h2> })}
            <div class="list-group">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a href=item.href class="list-group-item">
                                {item.label}
                                {item.hint.map(|h| view! { <span class="list-group-item__hint">{h}</span> })}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
