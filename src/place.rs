//! Saved location endpoints: the positions users have pinned to a ward.

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::{ApiClient, ApiError, Method};

/// Fields of a saved location as the backend expects them.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceFields {
    pub latitude: f64,
    pub longitude: f64,
    pub ward_id: i64,
}

impl ApiClient {
    pub async fn get_locations(&self) -> Result<Value, ApiError> {
        self.request(Method::GET, "location/", None, &[]).await
    }

    pub async fn create_location(&self, place: &PlaceFields) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "location/create/",
            Some(serde_json::to_value(place)?),
            &[],
        )
        .await
    }

    pub async fn update_location(
        &self,
        location_id: i64,
        place: &PlaceFields,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::PUT,
            "location/update/",
            Some(json!({
                "location_id": location_id,
                "latitude": place.latitude,
                "longitude": place.longitude,
                "ward_id": place.ward_id,
            })),
            &[],
        )
        .await
    }

    pub async fn delete_location(&self, location_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "location/delete/",
            None,
            &[("location_id", location_id.to_string())],
        )
        .await
    }

    pub async fn search_locations(&self, ward_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::GET,
            "locations/search/",
            None,
            &[("ward_id", ward_id.to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::notify::RecordingNotifier;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn update_includes_location_id_alongside_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/location/update/"))
            .and(body_json(json!({
                "location_id": 4,
                "latitude": 20.95,
                "longitude": 107.04,
                "ward_id": 31,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"location_id": 4})))
            .expect(1)
            .mount(&server)
            .await;

        let config = ApiConfig {
            base_url: format!("{}/api/", server.uri()),
            timeout_secs: 5,
        };
        let client = ApiClient::new(&config, Arc::new(RecordingNotifier::new())).unwrap();
        let place = PlaceFields {
            latitude: 20.95,
            longitude: 107.04,
            ward_id: 31,
        };
        client.update_location(4, &place).await.unwrap();
    }
}
