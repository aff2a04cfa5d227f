//! Client helpers for `/api/results`.

use crate::{
    api::{ApiError, Gateway},
    features::results::types::{ResultInput, ResultRecord},
};
use serde::de::IgnoredAny;

pub async fn list(gateway: &Gateway) -> Result<Vec<ResultRecord>, ApiError> {
    gateway.get("/api/results").await
}

/// The backend rejects results for unknown students or courses.
pub async fn create(gateway: &Gateway, input: &ResultInput) -> Result<(), ApiError> {
    input.validate()?;
    let _: IgnoredAny = gateway.post("/api/results", &input.trimmed()).await?;
    Ok(())
}

pub async fn update(gateway: &Gateway, id: i64, input: &ResultInput) -> Result<(), ApiError> {
    input.validate()?;
    let _: IgnoredAny = gateway
        .put(&format!("/api/results/{id}"), &input.trimmed())
        .await?;
    Ok(())
}

pub async fn delete(gateway: &Gateway, id: i64) -> Result<(), ApiError> {
    let _: IgnoredAny = gateway.delete(&format!("/api/results/{id}")).await?;
    Ok(())
}
