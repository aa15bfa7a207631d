use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustAnchor {
    pub name: String,
    #[serde(default)]
    pub locations: Vec<String>,
    /// Shipped with the validator rather than uploaded by an operator.
    #[serde(default)]
    pub preconfigured: bool,
    #[serde(default)]
    pub initial_certificate_tree_validation_run_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustAnchorsResponse {
    pub data: Vec<TrustAnchor>,
}

/// Comma separated names of the trust anchors whose initial validation run
/// has completed, in response order.
pub fn validated_names(trust_anchors: &[TrustAnchor]) -> String {
    trust_anchors
        .iter()
        .filter(|ta| ta.initial_certificate_tree_validation_run_completed)
        .map(|ta| ta.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
