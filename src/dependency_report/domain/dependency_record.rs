use serde::{Deserialize, Serialize};

/// One entry of the dependency file sent to Gemnasium
///
/// `transitive` is true exactly when `parents` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    pub version: String,
    pub requirement: String,
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    pub transitive: bool,
    pub parents: Vec<String>,
}

impl DependencyRecord {
    pub fn new(
        name: String,
        version: String,
        requirement: String,
        scope: String,
        classifier: Option<String>,
        parents: Vec<String>,
    ) -> Self {
        Self {
            name,
            version,
            requirement,
            scope,
            classifier,
            transitive: !parents.is_empty(),
            parents,
        }
    }
}
