//! Tide station and measurement endpoints.
//!
//! Measurements are keyed by station and date; `sync_tide_data` asks the
//! backend to pull a station's measurements for one date from its upstream
//! source. Dates travel as ISO `YYYY-MM-DD`, times of occurrence as
//! `HH:MM:SS`, which is what `chrono`'s serde impls produce.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::{ApiClient, ApiError, Method};

/// One tide measurement as the backend expects it.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementFields {
    pub station_id: i64,
    pub measurement_date: NaiveDate,
    pub tide_type: String,
    pub water_level: f64,
    pub time_of_occurrence: NaiveTime,
}

impl ApiClient {
    pub async fn get_stations(&self) -> Result<Value, ApiError> {
        self.request(Method::GET, "tide/stations/", None, &[]).await
    }

    pub async fn create_station(&self, station_name: &str) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "tide/stations/create/",
            Some(json!({ "station_name": station_name })),
            &[],
        )
        .await
    }

    pub async fn update_station(
        &self,
        station_id: i64,
        station_name: &str,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::PUT,
            "tide/stations/update/",
            Some(json!({ "station_id": station_id, "station_name": station_name })),
            &[],
        )
        .await
    }

    pub async fn delete_station(&self, station_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "tide/stations/delete/",
            None,
            &[("station_id", station_id.to_string())],
        )
        .await
    }

    pub async fn get_tide_measurements(
        &self,
        station_id: i64,
        date: NaiveDate,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::GET,
            "tide/measurements/",
            None,
            &[
                ("station_id", station_id.to_string()),
                ("date", date.to_string()),
            ],
        )
        .await
    }

    pub async fn create_tide_measurement(
        &self,
        measurement: &MeasurementFields,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "tide/measurements/create/",
            Some(serde_json::to_value(measurement)?),
            &[],
        )
        .await
    }

    pub async fn update_tide_measurement(
        &self,
        measurement_id: i64,
        measurement: &MeasurementFields,
    ) -> Result<Value, ApiError> {
        let mut body = serde_json::to_value(measurement)?;
        body["measurement_id"] = json!(measurement_id);
        self.request(Method::PUT, "tide/measurements/update/", Some(body), &[])
            .await
    }

    pub async fn delete_tide_measurement(&self, measurement_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "tide/measurements/delete/",
            None,
            &[("measurement_id", measurement_id.to_string())],
        )
        .await
    }

    pub async fn sync_tide_data(
        &self,
        station_id: i64,
        date: NaiveDate,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "tide/sync/",
            Some(json!({ "station_id": station_id, "date": date })),
            &[],
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
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        let config = ApiConfig {
            base_url: format!("{}/api/", server.uri()),
            timeout_secs: 5,
        };
        ApiClient::new(&config, Arc::new(RecordingNotifier::new())).unwrap()
    }

    fn measurement() -> MeasurementFields {
        MeasurementFields {
            station_id: 3,
            measurement_date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            tide_type: "high".to_string(),
            water_level: 3.4,
            time_of_occurrence: NaiveTime::from_hms_opt(5, 40, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn measurement_create_serializes_date_and_time_as_iso() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tide/measurements/create/"))
            .and(body_json(json!({
                "station_id": 3,
                "measurement_date": "2026-08-30",
                "tide_type": "high",
                "water_level": 3.4,
                "time_of_occurrence": "05:40:00",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"measurement_id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.create_tide_measurement(&measurement()).await.unwrap();
    }

    #[tokio::test]
    async fn measurement_update_adds_the_id_to_the_same_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/tide/measurements/update/"))
            .and(body_json(json!({
                "measurement_id": 12,
                "station_id": 3,
                "measurement_date": "2026-08-30",
                "tide_type": "high",
                "water_level": 3.4,
                "time_of_occurrence": "05:40:00",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"measurement_id": 12})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .update_tide_measurement(12, &measurement())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn measurement_listing_passes_station_and_date() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tide/measurements/"))
            .and(query_param("station_id", "3"))
            .and(query_param("date", "2026-08-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .get_tide_measurements(3, NaiveDate::from_ymd_opt(2026, 8, 30).unwrap())
            .await
            .unwrap();
    }
}
