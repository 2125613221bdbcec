//! # Location Permission Negotiation Flow
//!
//! The one stateful sequence in this layer: ask the backend to raise the
//! location permission prompt, fetch the short-lived backend token, acquire
//! device coordinates through the host [`Geolocator`], and report the saved
//! position back to the user. Steps run strictly one after the other; there
//! is no retry and no cancellation.
//!
//! ## Failure channels
//!
//! Backend sub-calls degrade *softly*: a transport failure is logged and
//! collapses to `None`, ending the flow without further ceremony (the request
//! primitive has already notified the user once). Only a capability failure
//! is *hard*: it is classified, notified, and returned as a
//! [`NegotiationError`], on which the orchestrator runs the centralized
//! error-status check and surfaces its message. Each step hands back an
//! explicit result; no step signals an expected business outcome by
//! propagating a raw error through the others.

use serde::Deserialize;
use serde_json::Value;

use crate::api::{ApiClient, Method};
use crate::geo::{GeoError, Geolocator};
use crate::{Coordinates, UserIdentity};

const PERMISSION_ENDPOINT: &str = "zalo/location/permission/";
const TOKEN_ENDPOINT: &str = "zalo/location/token/";
const LOCATION_ENDPOINT: &str = "zalo/location/";
const ERROR_ENDPOINT: &str = "zalo/location/error/";

const NOTIFY_PERMISSION_SENT: &str =
    "Yêu cầu cấp quyền vị trí đã được gửi. Vui lòng xác nhận!";
const NOTIFY_NO_TOKEN: &str = "Không thể lấy token vị trí.";
const NOTIFY_LOCATION_SAVED: &str = "Vị trí của bạn đã được lưu!";
const NOTIFY_PERMISSION_DENIED: &str =
    "Bạn đã từ chối cấp quyền vị trí. Vui lòng bật quyền trong cài đặt Zalo.";
const NOTIFY_GEO_RETRY: &str = "Đã xảy ra lỗi khi lấy vị trí. Vui lòng thử lại.";

/// Permission state reported by the backend.
///
/// Transient only: it is re-derived from every permission-check response and
/// never stored between negotiation attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Pending,
    Granted,
    Denied,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Status payload shared by the permission-check and error-check endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PermissionResponse {
    #[serde(default)]
    pub status: PermissionState,
    #[serde(default)]
    pub message: String,
}

/// Payload of the backend coordinate-fetch endpoint. Latitude and longitude
/// are optional because the backend reports partial results while the host
/// token is still being validated.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationFix {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl LocationFix {
    /// Both coordinates, when the backend reported a complete position.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// Hard failure of the negotiation: the step that produced it has already
/// notified the user; the orchestrator answers with the centralized
/// error-status check.
#[derive(Debug, thiserror::Error)]
pub enum NegotiationError {
    #[error("failed to get location: {0}")]
    Geolocation(#[from] GeoError),
}

impl ApiClient {
    /// Ask the backend to raise the location permission prompt for this user.
    ///
    /// Soft on transport failure: the error is logged and `None` is returned,
    /// never propagated. On a `pending` status the user is told the request
    /// was sent; any other status is handed back as-is without notification.
    pub async fn request_location_permission(
        &self,
        identity: &UserIdentity,
    ) -> Option<PermissionResponse> {
        let response = self
            .fetch_status(PERMISSION_ENDPOINT, identity, "location permission request")
            .await?;
        if response.status == PermissionState::Pending {
            self.notifier().notify(NOTIFY_PERMISSION_SENT);
        }
        Some(response)
    }

    /// Fetch the backend-issued location token authorizing one coordinate
    /// fetch for this user. Soft on transport failure.
    pub async fn get_location_token(&self, identity: &UserIdentity) -> Option<String> {
        let payload = match self
            .request(Method::GET, TOKEN_ENDPOINT, None, &identity.query())
            .await
        {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "get location token failed");
                return None;
            }
        };
        payload
            .get("token")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Acquire device coordinates through the host capability and report them
    /// to the backend.
    ///
    /// A capability failure is the hard path: it is classified (permission
    /// denial vs. anything else), notified, and returned as an error. The
    /// backend sub-call stays soft and collapses to `Ok(None)`. When the
    /// returned fix carries both coordinates the user is told the location
    /// was saved.
    pub async fn fetch_user_location<G: Geolocator>(
        &self,
        identity: &UserIdentity,
        geolocator: &G,
    ) -> Result<Option<LocationFix>, NegotiationError> {
        let fix = match geolocator.locate().await {
            Ok(fix) => fix,
            Err(err) => {
                if err.is_permission_denied() {
                    self.notifier().notify(NOTIFY_PERMISSION_DENIED);
                } else {
                    self.notifier().notify(NOTIFY_GEO_RETRY);
                }
                return Err(err.into());
            }
        };

        let query = [
            ("access_token", identity.access_token.clone()),
            ("token", fix.token),
            ("user_id", identity.user_id.clone()),
        ];
        let payload = match self.request(Method::GET, LOCATION_ENDPOINT, None, &query).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "get user location failed");
                return Ok(None);
            }
        };

        let fix: LocationFix = match serde_json::from_value(payload) {
            Ok(fix) => fix,
            Err(err) => {
                tracing::warn!(error = %err, "unexpected location payload shape");
                return Ok(None);
            }
        };

        if fix.coordinates().is_some() {
            self.notifier().notify(NOTIFY_LOCATION_SAVED);
        }
        Ok(Some(fix))
    }

    /// Centralized recovery check: ask the backend why the last negotiation
    /// failed. Soft on transport failure: the recovery path itself never
    /// aborts anything, a failed check is logged and dropped.
    pub async fn check_location_error(
        &self,
        identity: &UserIdentity,
    ) -> Option<PermissionResponse> {
        self.fetch_status(ERROR_ENDPOINT, identity, "location error check")
            .await
    }

    /// Tell the user the location permission stays off, for UI paths where
    /// the prompt is declined without the capability ever being invoked.
    pub fn deny_location(&self) {
        self.notifier().notify(NOTIFY_PERMISSION_DENIED);
    }

    /// Run the whole negotiation for one user: permission prompt, token
    /// fetch, coordinate acquisition, final coordinate summary.
    ///
    /// The flow stops at the first gate that is not satisfied. A hard
    /// capability failure routes through [`Self::check_location_error`] and
    /// its message is surfaced to the user.
    pub async fn request_user_location<G: Geolocator>(
        &self,
        identity: &UserIdentity,
        geolocator: &G,
    ) {
        let Some(permission) = self.request_location_permission(identity).await else {
            return;
        };
        if permission.status != PermissionState::Pending {
            self.notifier().notify(&permission.message);
            return;
        }

        let Some(_token) = self.get_location_token(identity).await else {
            self.notifier().notify(NOTIFY_NO_TOKEN);
            return;
        };

        match self.fetch_user_location(identity, geolocator).await {
            Ok(Some(fix)) => {
                if let Some(coordinates) = fix.coordinates() {
                    self.notifier().notify(&format!(
                        "Vị trí: ({}, {})",
                        coordinates.latitude, coordinates.longitude
                    ));
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "location negotiation failed, checking status");
                if let Some(status) = self.check_location_error(identity).await {
                    self.notifier().notify(&status.message);
                }
            }
        }
    }

    async fn fetch_status(
        &self,
        endpoint: &str,
        identity: &UserIdentity,
        context: &'static str,
    ) -> Option<PermissionResponse> {
        let payload = match self
            .request(Method::GET, endpoint, None, &identity.query())
            .await
        {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "{context} failed");
                return None;
            }
        };
        match serde_json::from_value(payload) {
            Ok(response) => Some(response),
            Err(err) => {
                tracing::warn!(error = %err, "{context} returned an unexpected payload");
                None
            }
        }
    }
}
