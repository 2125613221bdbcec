//! Policy document endpoints (terms of use, privacy, safety notices).

use serde_json::{json, Value};

use crate::api::{ApiClient, ApiError, Method};

impl ApiClient {
    pub async fn get_policies(&self, policy_type: Option<&str>) -> Result<Value, ApiError> {
        let query: Vec<(&str, String)> = policy_type
            .map(|t| vec![("policy_type", t.to_string())])
            .unwrap_or_default();
        self.request(Method::GET, "policies/", None, &query).await
    }

    pub async fn create_policy(
        &self,
        policy_type: &str,
        title: &str,
        content: &str,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "policies/create/",
            Some(json!({
                "policy_type": policy_type,
                "title": title,
                "content": content,
            })),
            &[],
        )
        .await
    }

    pub async fn update_policy(
        &self,
        policy_id: i64,
        policy_type: &str,
        title: &str,
        content: &str,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::PUT,
            "policies/update/",
            Some(json!({
                "policy_id": policy_id,
                "policy_type": policy_type,
                "title": title,
                "content": content,
            })),
            &[],
        )
        .await
    }

    pub async fn delete_policy(&self, policy_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "policies/delete/",
            None,
            &[("policy_id", policy_id.to_string())],
        )
        .await
    }
}
