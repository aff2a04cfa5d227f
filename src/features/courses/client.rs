//! Client helpers for `/api/courses`.

use crate::{
    api::{ApiError, Gateway},
    features::courses::types::{Course, CourseInput},
};
use serde::de::IgnoredAny;

/// Fetches every course.
pub async fn list(gateway: &Gateway) -> Result<Vec<Course>, ApiError> {
    gateway.get("/api/courses").await
}

pub async fn create(gateway: &Gateway, input: &CourseInput) -> Result<(), ApiError> {
    input.validate()?;
    let _: IgnoredAny = gateway.post("/api/courses", &input.trimmed()).await?;
    Ok(())
}

pub async fn update(gateway: &Gateway, id: i64, input: &CourseInput) -> Result<(), ApiError> {
    input.validate()?;
    let _: IgnoredAny = gateway
        .put(&format!("/api/courses/{id}"), &input.trimmed())
        .await?;
    Ok(())
}

pub async fn delete(gateway: &Gateway, id: i64) -> Result<(), ApiError> {
    let _: IgnoredAny = gateway.delete(&format!("/api/courses/{id}")).await?;
    Ok(())
}
