//! ZNS notification endpoints: single sends, history, deletion, and the
//! per-location batch send used for tide warnings.

use serde_json::{json, Value};

use crate::api::{ApiClient, ApiError, Method};

impl ApiClient {
    pub async fn send_zns_notification(
        &self,
        user_id: &str,
        location_id: i64,
        notification_type: &str,
        content: &str,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "notifications/zns/create/",
            Some(json!({
                "user_id": user_id,
                "location_id": location_id,
                "notification_type": notification_type,
                "content": content,
            })),
            &[],
        )
        .await
    }

    pub async fn get_zns_notifications(
        &self,
        user_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::GET,
            "notifications/zns/",
            None,
            &[
                ("user_id", user_id.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    pub async fn delete_zns_notification(&self, notification_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "notifications/zns/delete/",
            None,
            &[("notification_id", notification_id.to_string())],
        )
        .await
    }

    /// Send one notification to every user attached to a location.
    pub async fn send_zns_batch(
        &self,
        location_id: i64,
        notification_type: &str,
        content: &str,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "notifications/zns/batch/",
            Some(json!({
                "location_id": location_id,
                "notification_type": notification_type,
                "content": content,
            })),
            &[],
        )
        .await
    }
}
