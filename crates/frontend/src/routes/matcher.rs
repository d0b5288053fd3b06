//! Segment-wise matching of URL fragments against route patterns.
//!
//! Patterns are `/`-delimited literals and `:name` placeholders. A fragment
//! matches only with the exact segment count; placeholders take one
//! non-empty segment each, percent-decoded.

use crate::shared::api_utils::decode_segment;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Placeholder values extracted from a matched fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: Vec<(String, String)>,
}

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of `name`, or an empty string for a name the pattern does not declare
    pub fn value(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }
}

/// Split a fragment into segments, ignoring a leading `#` and `/`
pub fn split_fragment(fragment: &str) -> Vec<&str> {
    let trimmed = fragment.trim_start_matches('#').trim_start_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    fn parse(pattern: &str) -> Self {
        let segments = split_fragment(pattern)
            .into_iter()
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    fn matches(&self, parts: &[&str]) -> Option<RouteParams> {
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => params.values.push((name.clone(), decode_segment(part))),
            }
        }
        Some(params)
    }
}

type Handler<T> = Box<dyn Fn(&RouteParams) -> T + Send + Sync>;

struct Route<T> {
    pattern: Pattern,
    handler: Handler<T>,
}

/// Ordered route table; handlers turn placeholder values into a `T`
pub struct Router<T> {
    routes: Vec<Route<T>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, pattern: &str, handler: F) -> &mut Self
    where
        F: Fn(&RouteParams) -> T + Send + Sync + 'static,
    {
        self.routes.push(Route {
            pattern: Pattern::parse(pattern),
            handler: Box::new(handler),
        });
        self
    }

    /// Run the handler of the first route matching `fragment`; `None` on a miss
    pub fn navigate(&self, fragment: &str) -> Option<T> {
        let parts = split_fragment(fragment);
        self.routes.iter().find_map(|route| {
            route
                .pattern
                .matches(&parts)
                .map(|params| (route.handler)(&params))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router<(&'static str, RouteParams)> {
        let mut router = Router::new();
        router
            .register("", |p| ("root", p.clone()))
            .register("tables/:table", |p| ("table", p.clone()))
            .register("tables/:table/columns/:column", |p| ("column", p.clone()));
        router
    }

    #[test]
    fn test_longer_pattern_wins_on_segment_count() {
        let (name, params) = router().navigate("tables/sales/columns/price").unwrap();
        assert_eq!(name, "column");
        assert_eq!(params.get("table"), Some("sales"));
        assert_eq!(params.get("column"), Some("price"));
    }

    #[test]
    fn test_empty_fragment_matches_root_only() {
        assert_eq!(router().navigate("").unwrap().0, "root");
        assert_eq!(router().navigate("#").unwrap().0, "root");
        assert_eq!(router().navigate("#/").unwrap().0, "root");
    }

    #[test]
    fn test_leading_hash_is_ignored() {
        let (name, params) = router().navigate("#tables/orders").unwrap();
        assert_eq!(name, "table");
        assert_eq!(params.value("table"), "orders");
    }

    #[test]
    fn test_wrong_segment_count_never_matches() {
        assert!(router().navigate("tables").is_none());
        assert!(router().navigate("tables/a/columns").is_none());
        assert!(router().navigate("tables/a/columns/b/extra").is_none());
        assert!(router().navigate("tables/orders/").is_none());
    }

    #[test]
    fn test_literals_must_match() {
        assert!(router().navigate("steps/orders").is_none());
        assert!(router().navigate("tables/a/rows/b").is_none());
    }

    #[test]
    fn test_placeholders_are_decoded() {
        let (_, params) = router().navigate("tables/land%20use").unwrap();
        assert_eq!(params.get("table"), Some("land use"));
        assert_eq!(params.get("column"), None);
        assert_eq!(params.value("column"), "");
    }

    #[test]
    fn test_first_registered_route_wins() {
        let mut router = Router::new();
        router
            .register("steps/:step", |_| "generic")
            .register("steps/run", |_| "literal");
        assert_eq!(router.navigate("steps/run"), Some("generic"));
    }
}
