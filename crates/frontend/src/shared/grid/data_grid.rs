use super::spec::{cell_label, GridSpec};
use leptos::prelude::*;

/// Plain HTML table over a [`GridSpec`]; the whole dataset, no paging
#[component]
pub fn DataGrid(spec: GridSpec) -> impl IntoView {
    let GridSpec { headers, rows, .. } = spec;
    let row_count = rows.len();

    view! {
        <div class="data-grid">
            <table class="data-grid__table">
                <thead>
                    <tr>
                        {headers
                            .into_iter()
                            .map(|h| view! { <th class="data-grid__header">{h}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let cells = row
                                .iter()
                                .map(|cell| view! { <td class="data-grid__cell">{cell_label(cell)}</td> })
                                .collect_view();
                            view! { <tr>{cells}</tr> }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <div class="data-grid__footer">{format!("{} rows", row_count)}</div>
        </div>
    }
}
