use serde::{Deserialize, Serialize};

/// One catalog entry. Carries no identity beyond its fields; duplicates are
/// allowed and both fields may be empty strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bird {
    pub species: String,
    pub description: String,
}
