//! Lunar calendar endpoints.
//!
//! The backend keeps a solar-to-lunar date table used for the fishing
//! calendar view; this module reads and maintains it. `sync_lunar_calendar`
//! asks the backend to recompute a date range from its upstream converter.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::{ApiClient, ApiError, Method};

/// One lunar calendar row as the backend expects it.
#[derive(Debug, Clone, Serialize)]
pub struct LunarDayFields {
    pub solar_date: NaiveDate,
    pub lunar_day: u8,
    pub lunar_month: u8,
    pub lunar_year: i32,
    pub is_leap_month: bool,
    pub description: Option<String>,
}

impl ApiClient {
    pub async fn get_lunar_calendar(&self, solar_date: NaiveDate) -> Result<Value, ApiError> {
        self.request(
            Method::GET,
            "calendar/lunar/",
            None,
            &[("solar_date", solar_date.to_string())],
        )
        .await
    }

    pub async fn create_lunar_calendar(&self, day: &LunarDayFields) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "calendar/lunar/create/",
            Some(serde_json::to_value(day)?),
            &[],
        )
        .await
    }

    pub async fn update_lunar_calendar(
        &self,
        lunar_id: i64,
        day: &LunarDayFields,
    ) -> Result<Value, ApiError> {
        let mut body = serde_json::to_value(day)?;
        body["lunar_id"] = json!(lunar_id);
        self.request(Method::PUT, "calendar/lunar/update/", Some(body), &[])
            .await
    }

    pub async fn delete_lunar_calendar(&self, lunar_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            "calendar/lunar/delete/",
            None,
            &[("lunar_id", lunar_id.to_string())],
        )
        .await
    }

    pub async fn sync_lunar_calendar(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "calendar/lunar/sync/",
            Some(json!({ "start_date": start_date, "end_date": end_date })),
            &[],
        )
        .await
    }
}
