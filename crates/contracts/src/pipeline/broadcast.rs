use serde::{Deserialize, Serialize};

/// Join parameters of a broadcast, mirroring the arguments it was registered with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastDefinition {
    /// Table being cast
    pub cast: String,
    /// Table cast onto
    pub onto: String,
    /// Join column on the cast table, null when joining on the index
    #[serde(default)]
    pub cast_on: Option<String>,
    /// Join column on the onto table, null when joining on the index
    #[serde(default)]
    pub onto_on: Option<String>,
    #[serde(default)]
    pub cast_index: bool,
    #[serde(default)]
    pub onto_index: bool,
}

impl BroadcastDefinition {
    /// Keyword arguments as they would be written at registration time,
    /// e.g. `cast_on = 'zone_id'` or `onto_index = True`
    pub fn keyword_lines(&self) -> [String; 4] {
        [
            format!("cast_on = {}", on_repr(self.cast_on.as_deref())),
            format!("onto_on = {}", on_repr(self.onto_on.as_deref())),
            format!("cast_index = {}", index_repr(self.cast_index)),
            format!("onto_index = {}", index_repr(self.onto_index)),
        ]
    }
}

fn on_repr(on: Option<&str>) -> String {
    match on {
        Some(column) => format!("'{}'", column),
        None => "None".to_string(),
    }
}

fn index_repr(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}
