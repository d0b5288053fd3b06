use crate::domain::broadcast::BroadcastRef;
use crate::domain::common::EntityKind;
use crate::domain::injectable::InjectableRef;
use crate::domain::step::StepRef;
use crate::domain::table::TableRef;
use crate::shared::components::LinkItem;
use contracts::pipeline::SchemaListing;

/// The four independent link lists of the schema root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaLinks {
    pub tables: Vec<LinkItem>,
    pub steps: Vec<LinkItem>,
    pub injectables: Vec<LinkItem>,
    pub broadcasts: Vec<LinkItem>,
}

impl SchemaLinks {
    pub fn from_listing(listing: &SchemaListing) -> Self {
        let tables = listing
            .tables
            .iter()
            .map(|table| {
                let item = LinkItem::new(table.clone(), TableRef::new(table.clone()).href());
                match listing.column_count(table) {
                    Some(1) => item.with_hint("1 column"),
                    Some(n) => item.with_hint(format!("{} columns", n)),
                    None => item,
                }
            })
            .collect();

        let steps = listing
            .steps
            .iter()
            .map(|step| {
                let href = StepRef { step: step.clone() }.href();
                LinkItem::new(step.clone(), href)
            })
            .collect();

        let injectables = listing
            .injectables
            .iter()
            .map(|name| {
                let href = InjectableRef { name: name.clone() }.href();
                LinkItem::new(name.clone(), href)
            })
            .collect();

        let broadcasts = listing
            .broadcasts
            .iter()
            .map(|(cast, onto)| {
                let href = BroadcastRef {
                    cast: cast.clone(),
                    onto: onto.clone(),
                }
                .href();
                LinkItem::new(format!("{} \u{2013}> {}", cast, onto), href)
            })
            .collect();

        Self {
            tables,
            steps,
            injectables,
            broadcasts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_table_listing() {
        let listing: SchemaListing = serde_json::from_value(json!({
            "tables": ["orders"],
            "steps": [],
            "injectables": [],
            "broadcasts": []
        }))
        .unwrap();

        let links = SchemaLinks::from_listing(&listing);
        assert_eq!(links.tables, vec![LinkItem::new("orders", "#tables/orders")]);
        assert!(links.steps.is_empty());
        assert!(links.injectables.is_empty());
        assert!(links.broadcasts.is_empty());
    }

    #[test]
    fn test_every_kind_links_to_its_route() {
        let listing: SchemaListing = serde_json::from_value(json!({
            "tables": ["households"],
            "columns": { "households": ["income", "persons"] },
            "steps": ["simulate"],
            "injectables": ["year"],
            "broadcasts": [["persons", "households"]]
        }))
        .unwrap();

        let links = SchemaLinks::from_listing(&listing);
        assert_eq!(links.tables[0].hint.as_deref(), Some("2 columns"));
        assert_eq!(links.steps[0].href, "#steps/simulate");
        assert_eq!(links.injectables[0].href, "#injectables/year");
        assert_eq!(links.broadcasts[0].href, "#broadcasts/persons/households");
        assert_eq!(links.broadcasts[0].label, "persons \u{2013}> households");
    }
}
