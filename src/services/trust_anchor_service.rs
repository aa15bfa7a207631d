use crate::error::ApiError;
use crate::models::trust_anchor::{TrustAnchor, TrustAnchorsResponse};
use crate::services::api_client::ApiClient;

const TRUST_ANCHORS_PATH: &str = "/api/trust-anchors";

pub async fn get_trust_anchors(client: &ApiClient) -> Result<Vec<TrustAnchor>, ApiError> {
    let response: TrustAnchorsResponse = client.get_json(TRUST_ANCHORS_PATH, &[]).await?;
    Ok(response.data)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::models::trust_anchor::validated_names;

    #[tokio::test]
    async fn lists_trust_anchors() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/trust-anchors")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"data": [
                    {"id": 1, "name": "TA1", "locations": ["rsync://ta1.example/ta.cer"], "initialCertificateTreeValidationRunCompleted": true},
                    {"id": 2, "name": "TA2", "initialCertificateTreeValidationRunCompleted": false}
                ]}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(&server.url(), Duration::from_secs(5)).expect("client");
        let trust_anchors = get_trust_anchors(&client).await.expect("trust anchors");

        mock.assert_async().await;
        assert_eq!(trust_anchors.len(), 2);
        assert_eq!(trust_anchors[0].locations, vec!["rsync://ta1.example/ta.cer"]);
        assert_eq!(validated_names(&trust_anchors), "TA1");
    }

    #[tokio::test]
    async fn unreachable_validator_is_a_request_error() {
        // Nothing listens on the discard port.
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).expect("client");
        let err = get_trust_anchors(&client).await.unwrap_err();
        assert!(matches!(err, ApiError::Request { .. }));
    }
}
