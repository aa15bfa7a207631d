use serde::{Deserialize, Serialize};

/// A validated ROA prefix as listed by the validator. Only rendered, never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roa {
    pub asn: String,
    pub prefix: String,
    #[serde(default)]
    pub length: u8,
    #[serde(default)]
    pub trust_anchor: String,
    #[serde(default)]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    pub first: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

/// Page envelope returned by `/api/roas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoasResponse {
    pub data: Vec<Roa>,
    #[serde(default)]
    pub links: Links,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_page_envelope() {
        let json = r#"{
            "data": [
                {"asn": "AS3333", "prefix": "193.0.0.0/21", "length": 21, "trustAnchor": "RIPE NCC RPKI Root"}
            ],
            "links": {
                "first": "/api/roas?startFrom=0&pageSize=10",
                "last": "/api/roas?startFrom=41&pageSize=10"
            }
        }"#;
        let response: RoasResponse = serde_json::from_str(json).expect("valid envelope");

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].trust_anchor, "RIPE NCC RPKI Root");
        assert_eq!(response.data[0].uri, None);
        assert_eq!(
            response.links.last.as_deref(),
            Some("/api/roas?startFrom=41&pageSize=10")
        );
        assert_eq!(response.links.next, None);
    }

    #[test]
    fn missing_links_decode_as_empty() {
        let response: RoasResponse = serde_json::from_str(r#"{"data": []}"#).expect("valid envelope");
        assert_eq!(response.links, Links::default());
    }
}
