//! Client helpers for `/api/registrations`.

use crate::{
    api::{ApiError, Gateway},
    features::registrations::types::{NewRegistration, Registration},
};
use chrono::{Local, NaiveDate};
use serde::de::IgnoredAny;
use tracing::instrument;

pub async fn list(gateway: &Gateway) -> Result<Vec<Registration>, ApiError> {
    gateway.get("/api/registrations").await
}

/// Registers a student for a course. `date` defaults to today in local time.
#[instrument(skip(gateway))]
pub async fn enroll(
    gateway: &Gateway,
    student_id: i64,
    course_id: i64,
    date: Option<NaiveDate>,
) -> Result<(), ApiError> {
    let body = NewRegistration::new(
        student_id,
        course_id,
        date.unwrap_or_else(|| Local::now().date_naive()),
    );
    let _: IgnoredAny = gateway.post("/api/registrations", &body).await?;
    Ok(())
}

/// Removes a registration by its own id, not the course id.
pub async fn drop(gateway: &Gateway, registration_id: i64) -> Result<(), ApiError> {
    let _: IgnoredAny = gateway
        .delete(&format!("/api/registrations/{registration_id}"))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::RecordingNavigator, config::AppConfig, session::SessionContext,
        storage::MemoryStorage,
    };
    use anyhow::Result;
    use serde_json::json;
    use std::{net::TcpListener, sync::Arc};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn gateway(base_url: &str) -> Result<Gateway> {
        let context = Arc::new(SessionContext::new(Arc::new(MemoryStorage::new())));
        Ok(Gateway::new(
            &AppConfig::new(base_url)?,
            context,
            Arc::new(RecordingNavigator::new()),
        )?)
    }

    #[tokio::test]
    async fn enroll_posts_explicit_date() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/registrations"))
            .and(body_json(json!({
                "student": {"id": 7},
                "course": {"id": 3},
                "registrationDate": "2024-09-02"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11})))
            .expect(1)
            .mount(&server)
            .await;

        let date = NaiveDate::from_ymd_opt(2024, 9, 2);
        enroll(&gateway(&server.uri())?, 7, 3, date).await?;
        Ok(())
    }

    #[tokio::test]
    async fn enroll_defaults_to_today() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/registrations"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let before = Local::now().date_naive();
        enroll(&gateway(&server.uri())?, 7, 3, None).await?;
        let after = Local::now().date_naive();

        let requests = server.received_requests().await.unwrap_or_default();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
        let sent = body["registrationDate"].as_str().unwrap_or_default();
        assert!(sent == before.to_string() || sent == after.to_string());
        Ok(())
    }

    #[tokio::test]
    async fn drop_deletes_registration_and_list_parses() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/registrations/11"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/registrations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let gateway = gateway(&server.uri())?;
        drop(&gateway, 11).await?;
        assert!(list(&gateway).await?.is_empty());
        Ok(())
    }
}
