//! # Geolocation Capability Seam
//!
//! The host platform (the Zalo mini-app runtime in production) owns the real
//! geolocation implementation. This layer only needs its observable shape: an
//! async call that either yields a short-lived capability token or fails with
//! a numeric error code. [`Geolocator`] models that seam so the negotiation
//! flow can be driven by scripted implementations in tests and by a static
//! stand-in from the CLI.

use thiserror::Error;

/// Error codes the host reports when the user declined location access.
const PERMISSION_DENIED_CODES: [i32; 3] = [-201, -202, -2002];

/// Successful geolocation result.
///
/// The `token` is issued by the host platform and is forwarded verbatim to
/// the backend coordinate-fetch endpoint; this layer never inspects it.
#[derive(Debug, Clone)]
pub struct GeoFix {
    pub token: String,
}

/// Failure reported by the host geolocation capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("geolocation failed with code {code}")]
pub struct GeoError {
    pub code: i32,
}

impl GeoError {
    /// Whether this code means the user declined the location permission,
    /// as opposed to a transient platform failure.
    pub fn is_permission_denied(&self) -> bool {
        PERMISSION_DENIED_CODES.contains(&self.code)
    }
}

/// Host-provided device geolocation capability.
pub trait Geolocator: Send + Sync {
    fn locate(&self) -> impl std::future::Future<Output = Result<GeoFix, GeoError>> + Send;
}

/// Geolocator backed by a pre-configured token, used by the CLI driver to
/// exercise the negotiation flow without a host runtime. A missing token
/// behaves like the user declining the permission prompt.
pub struct StaticGeolocator {
    token: Option<String>,
}

impl StaticGeolocator {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }
}

impl Geolocator for StaticGeolocator {
    async fn locate(&self) -> Result<GeoFix, GeoError> {
        match &self.token {
            Some(token) => Ok(GeoFix {
                token: token.clone(),
            }),
            None => Err(GeoError { code: -2002 }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denial_codes_are_classified() {
        for code in [-201, -202, -2002] {
            assert!(GeoError { code }.is_permission_denied(), "code {code}");
        }
    }

    #[test]
    fn other_codes_are_not_denials() {
        for code in [0, -1, -200, -2001, 42] {
            assert!(!GeoError { code }.is_permission_denied(), "code {code}");
        }
    }

    #[tokio::test]
    async fn static_geolocator_yields_configured_token() {
        let geo = StaticGeolocator::new(Some("cap-tok".into()));
        let fix = geo.locate().await.unwrap();
        assert_eq!(fix.token, "cap-tok");
    }

    #[tokio::test]
    async fn static_geolocator_without_token_denies() {
        let geo = StaticGeolocator::new(None);
        let err = geo.locate().await.unwrap_err();
        assert!(err.is_permission_denied());
    }
}
