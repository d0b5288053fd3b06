use contracts::pipeline::DefinitionPayload;

/// Presentation chosen for a definition payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionView {
    /// Fixed label for literally registered objects
    Literal(&'static str),
    /// Where a function lives plus its highlighted body
    Source {
        filename: String,
        lineno: u32,
        html: String,
        text: Option<String>,
    },
    /// Unrecognized discriminator; draw nothing
    Omitted,
}

/// Pick the presentation for `payload` from its `type` tag.
///
/// Total over every payload: unknown tags map to [`DefinitionView::Omitted`].
pub fn render_definition(payload: &DefinitionPayload) -> DefinitionView {
    match payload {
        DefinitionPayload::Dataframe => DefinitionView::Literal("DataFrame"),
        DefinitionPayload::Series => DefinitionView::Literal("Series"),
        DefinitionPayload::Local => DefinitionView::Literal("Local Column"),
        DefinitionPayload::Variable => DefinitionView::Literal("Variable"),
        DefinitionPayload::Function(source) => DefinitionView::Source {
            filename: source.filename.clone(),
            lineno: source.lineno,
            html: source.html.clone(),
            text: source.text.clone(),
        },
        DefinitionPayload::Unknown => DefinitionView::Omitted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::pipeline::FunctionSource;
    use serde_json::json;

    #[test]
    fn test_literal_labels() {
        assert_eq!(
            render_definition(&DefinitionPayload::Dataframe),
            DefinitionView::Literal("DataFrame")
        );
        assert_eq!(
            render_definition(&DefinitionPayload::Series),
            DefinitionView::Literal("Series")
        );
        assert_eq!(
            render_definition(&DefinitionPayload::Local),
            DefinitionView::Literal("Local Column")
        );
        assert_eq!(
            render_definition(&DefinitionPayload::Variable),
            DefinitionView::Literal("Variable")
        );
    }

    #[test]
    fn test_function_renders_source_reference() {
        let payload = DefinitionPayload::Function(FunctionSource {
            filename: "models.py".to_string(),
            lineno: 12,
            html: "<span>def f()</span>".to_string(),
            text: None,
        });
        match render_definition(&payload) {
            DefinitionView::Source { filename, lineno, html, .. } => {
                assert_eq!(filename, "models.py");
                assert_eq!(lineno, 12);
                assert_eq!(html, "<span>def f()</span>");
            }
            other => panic!("expected source view, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tag_renders_nothing() {
        let payload: DefinitionPayload =
            serde_json::from_value(json!({ "type": "generator" })).unwrap();
        assert_eq!(render_definition(&payload), DefinitionView::Omitted);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let payload: DefinitionPayload = serde_json::from_value(json!({
            "type": "function", "filename": "a.py", "lineno": 1, "html": "<b>x</b>"
        }))
        .unwrap();
        assert_eq!(render_definition(&payload), render_definition(&payload));
    }
}
