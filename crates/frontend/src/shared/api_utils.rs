//! API utilities for frontend-backend communication
//!
//! Path building for the pipeline server. Every user-supplied segment
//! (table, column, step names) goes through [`encode_segment`].

/// Build a full API URL from a configured base and an absolute path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("http://localhost:8765/", "/schema");
/// assert_eq!(url, "http://localhost:8765/schema");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Percent-encode one path segment
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Decode one path segment, keeping it as-is when it is not valid UTF-8 once decoded
pub fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Download path for a whole table as CSV
pub fn table_csv_path(table: &str) -> String {
    format!("/tables/{}/csv", encode_segment(table))
}

/// Download path for a single column as CSV
pub fn column_csv_path(table: &str, column: &str) -> String {
    format!(
        "/tables/{}/columns/{}/csv",
        encode_segment(table),
        encode_segment(column)
    )
}
