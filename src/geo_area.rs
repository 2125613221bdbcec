//! Administrative area endpoints: provinces, districts, wards.
//!
//! Pure parameter marshalling over [`ApiClient::request`]; each call sends
//! exactly the documented field set for its endpoint. District and ward
//! listings accept an optional parent filter.

use serde_json::{json, Value};

use crate::api::{ApiClient, ApiError, Method};

impl ApiClient {
    pub async fn get_provinces(&self) -> Result<Value, ApiError> {
        self.request(Method::GET, "provinces/", None, &[]).await
    }

    pub async fn create_province(&self, name: &str) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "provinces/create/",
            Some(json!({ "name": name })),
            &[],
        )
        .await
    }

    pub async fn update_province(&self, id: i64, name: &str) -> Result<Value, ApiError> {
        self.request(
            Method::PUT,
            "provinces/update/",
            Some(json!({ "id": id, "name": name })),
            &[],
        )
        .await
    }

    pub async fn delete_province(&self, id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "provinces/delete/",
            None,
            &[("id", id.to_string())],
        )
        .await
    }

    pub async fn get_districts(&self, province_id: Option<i64>) -> Result<Value, ApiError> {
        let query: Vec<(&str, String)> = province_id
            .map(|id| vec![("province_id", id.to_string())])
            .unwrap_or_default();
        self.request(Method::GET, "districts/", None, &query).await
    }

    pub async fn create_district(&self, name: &str, province_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "districts/create/",
            Some(json!({ "name": name, "province_id": province_id })),
            &[],
        )
        .await
    }

    pub async fn update_district(
        &self,
        id: i64,
        name: &str,
        province_id: i64,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::PUT,
            "districts/update/",
            Some(json!({ "id": id, "name": name, "province_id": province_id })),
            &[],
        )
        .await
    }

    pub async fn delete_district(&self, id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "districts/delete/",
            None,
            &[("id", id.to_string())],
        )
        .await
    }

    pub async fn get_wards(&self, district_id: Option<i64>) -> Result<Value, ApiError> {
        let query: Vec<(&str, String)> = district_id
            .map(|id| vec![("district_id", id.to_string())])
            .unwrap_or_default();
        self.request(Method::GET, "wards/", None, &query).await
    }

    pub async fn create_ward(&self, name: &str, district_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "wards/create/",
            Some(json!({ "name": name, "district_id": district_id })),
            &[],
        )
        .await
    }

    pub async fn update_ward(
        &self,
        id: i64,
        name: &str,
        district_id: i64,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::PUT,
            "wards/update/",
            Some(json!({ "id": id, "name": name, "district_id": district_id })),
            &[],
        )
        .await
    }

    pub async fn delete_ward(&self, id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "wards/delete/",
            None,
            &[("id", id.to_string())],
        )
        .await
    }
}
