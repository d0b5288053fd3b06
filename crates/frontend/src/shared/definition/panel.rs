use super::view::DefinitionView;
use crate::shared::clipboard::copy_text;
use leptos::prelude::*;
use thaw::*;

/// Draws a [`DefinitionView`]
#[component]
pub fn DefinitionPanel(definition: DefinitionView) -> impl IntoView {
    match definition {
        DefinitionView::Literal(label) => {
            view! { <p class="literal-definition">{label}</p> }.into_any()
        }
        DefinitionView::Source {
            filename,
            lineno,
            html,
            text,
        } => view! {
            <div class="func-definition">
                <h3>"Source"</h3>
                <Flex gap=FlexGap::Medium style="align-items: center;">
                    <code>{format!("{} @ line: {}", filename, lineno)}</code>
                    {text.map(|text| view! { <CopySourceButton text=text /> })}
                </Flex>
                <div class="func-definition__body" inner_html=html></div>
            </div>
        }
        .into_any(),
        DefinitionView::Omitted => ().into_any(),
    }
}

#[component]
fn CopySourceButton(text: String) -> impl IntoView {
    let copied = RwSignal::new(false);
    let text = StoredValue::new(text);

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Secondary
            on_click=move |_| {
                copy_text(&text.get_value(), move || {
                    let _ = copied.try_set(true);
                });
            }
        >
            {move || if copied.get() { "Copied" } else { "Copy source" }}
        </Button>
    }
}
