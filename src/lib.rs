//! # Tide Client Core Library
//!
//! Client-side API access layer for the tide/weather mini-app. The library
//! talks to the app's REST backend (administrative areas, tide stations and
//! measurements, users, ZNS notifications, lunar calendar, policies) and
//! drives the one genuinely stateful sequence in the app: the location
//! permission negotiation against the host platform's geolocation capability.
//!
//! ## Design
//!
//! ### One request primitive
//! Every backend call funnels through [`api::ApiClient::request`], which owns
//! URL construction, query/body marshalling, JSON decoding, failure
//! classification, diagnostic logging, and the single user notification per
//! failed call. The per-resource modules (`geo_area`, `place`, `tide`,
//! `account`, `zns`, `lunar`, `policy`) are thin typed wrappers over it,
//! each sending exactly the field set its endpoint documents.
//!
//! ### Injected capabilities
//! The two external effects, user-visible alerts and device geolocation,
//! enter through traits ([`notify::Notifier`], [`geo::Geolocator`]) so the
//! negotiation logic runs unchanged under a real host runtime, the CLI, or a
//! test harness. Identity is always an explicit [`UserIdentity`] parameter;
//! nothing in the library reads credentials from ambient state.
//!
//! ### Failure channels
//! Backend sub-calls of the negotiation degrade softly (logged, collapsed to
//! `None`); only a geolocation capability failure is hard and routes through
//! the centralized backend error check. See [`location`] for the full
//! sequencing rules.
//!
//! ## Core Types
//!
//! - [`UserIdentity`]: caller-supplied user id + access token pair
//! - [`Coordinates`]: a complete latitude/longitude fix

use serde::{Deserialize, Serialize};

// Module declarations
pub mod account;
pub mod api;
pub mod config;
pub mod geo;
pub mod geo_area;
pub mod location;
pub mod lunar;
pub mod notify;
pub mod place;
pub mod policy;
pub mod tide;
pub mod zns;

/// Caller-supplied session identity, threaded through every backend call.
///
/// The library never stores or refreshes credentials; it only forwards this
/// pair as the `access_token` and `user_id` parameters the backend expects.
/// A backend-issued location token is only valid together with the identity
/// that obtained it, so both always travel through the same flow invocation.
///
/// # Example
/// ```
/// use tide_api_lib::UserIdentity;
///
/// let identity = UserIdentity::new("12345", "session-token");
/// assert_eq!(identity.user_id, "12345");
/// ```
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub user_id: String,
    pub access_token: String,
}

impl UserIdentity {
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            access_token: access_token.into(),
        }
    }

    /// The query pair every identity-scoped endpoint takes.
    pub(crate) fn query(&self) -> [(&'static str, String); 2] {
        [
            ("access_token", self.access_token.clone()),
            ("user_id", self.user_id.clone()),
        ]
    }
}

/// A complete device position as reported by the backend.
///
/// Produced transiently during the negotiation flow and never persisted by
/// this layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
