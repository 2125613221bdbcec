//! User account, notification-history, and OA follow endpoints.
//!
//! `access_token` is only ever sent where the backend requires it: user
//! creation (so the backend can call the Zalo APIs on the user's behalf)
//! and the follower-status check. Updates never resend it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::{ApiClient, ApiError, Method};
use crate::UserIdentity;

/// Full profile sent when registering a user.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub user_id: String,
    pub phone_number: Option<String>,
    pub access_token: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub location_id: Option<i64>,
    pub location_permission: bool,
}

/// Profile fields that may change after registration.
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    pub user_id: String,
    pub phone_number: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub location_id: Option<i64>,
    pub location_permission: bool,
}

/// Official-account follow record.
#[derive(Debug, Clone, Serialize)]
pub struct NewOaFollow {
    pub user_id: String,
    pub oa_id: String,
    pub follow_status: String,
    pub followed_at: DateTime<Utc>,
    pub source_app: String,
}

impl ApiClient {
    pub async fn get_user(&self, user_id: &str) -> Result<Value, ApiError> {
        self.request(
            Method::GET,
            "users/",
            None,
            &[("user_id", user_id.to_string())],
        )
        .await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "users/create/",
            Some(serde_json::to_value(user)?),
            &[],
        )
        .await
    }

    pub async fn update_user(&self, user: &UserUpdate) -> Result<Value, ApiError> {
        self.request(
            Method::PUT,
            "users/update/",
            Some(serde_json::to_value(user)?),
            &[],
        )
        .await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "users/delete/",
            None,
            &[("user_id", user_id.to_string())],
        )
        .await
    }

    pub async fn get_user_notifications(
        &self,
        user_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::GET,
            "users/notifications/",
            None,
            &[
                ("user_id", user_id.to_string()),
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    pub async fn create_oa_follow(&self, follow: &NewOaFollow) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "zalo/oa/follows/create/",
            Some(serde_json::to_value(follow)?),
            &[],
        )
        .await
    }

    pub async fn get_oa_follow(&self, user_id: &str, oa_id: &str) -> Result<Value, ApiError> {
        self.request(
            Method::GET,
            "zalo/oa/follows/",
            None,
            &[
                ("user_id", user_id.to_string()),
                ("oa_id", oa_id.to_string()),
            ],
        )
        .await
    }

    pub async fn update_oa_follow(
        &self,
        follow_id: i64,
        follow_status: &str,
        source_app: &str,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::PUT,
            "zalo/oa/follows/update/",
            Some(json!({
                "follow_id": follow_id,
                "follow_status": follow_status,
                "source_app": source_app,
            })),
            &[],
        )
        .await
    }

    pub async fn delete_oa_follow(&self, follow_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "zalo/oa/follows/delete/",
            None,
            &[("follow_id", follow_id.to_string())],
        )
        .await
    }

    /// Ask the backend whether this user currently follows the official
    /// account on the platform side.
    pub async fn check_oa_follow_status(
        &self,
        identity: &UserIdentity,
    ) -> Result<Value, ApiError> {
        self.request(Method::GET, "zalo/oa/followers/", None, &identity.query())
            .await
    }
}
