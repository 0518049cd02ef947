// src/api/client.rs

use crate::core::range::DateRange;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AttendanceEntry, AuthContext, Employee, NteRecord, NteResponse, ScheduleEntry, Ticket,
};
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::Instrument;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Some endpoints wrap their payload in `{ "data": ... }`, others do not.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(v) => v,
        }
    }
}

/// Issues `METHOD <base><path>` with the session's bearer token.
///
/// Non-2xx responses become [`AppError::Api`] carrying the server's JSON
/// error body. There is no retry: a failure surfaces once to the caller.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(base_url: &str, auth: AuthContext) -> AppResult<Self> {
        // a trailing slash keeps the last path segment when joining
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("hrportal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(&base)?,
            auth,
        })
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> AppResult<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Send a request and decode the JSON answer.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, query)?;
        let span = tracing::debug_span!("api_request", method = %method, path = %url.path());

        async move {
            let mut req = self
                .http
                .request(method, url)
                .header(AUTHORIZATION, self.auth.bearer())
                .header(ACCEPT, "application/json");
            if let Some(b) = body {
                req = req.json(b);
            }

            let resp = req.send().await?;
            let status = resp.status();
            tracing::debug!(status = status.as_u16(), "response received");

            if !status.is_success() {
                let text = resp.text().await.unwrap_or_default();
                let payload = serde_json::from_str(&text)
                    .unwrap_or_else(|_| json!({ "message": text.trim() }));
                tracing::warn!(status = status.as_u16(), %payload, "API returned an error");
                return Err(AppError::Api {
                    status: status.as_u16(),
                    payload,
                });
            }

            let envelope: Envelope<T> = resp.json().await?;
            Ok(envelope.into_inner())
        }
        .instrument(span)
        .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> AppResult<T> {
        self.request::<(), T>(Method::GET, path, query, None).await
    }

    // ---------------------------
    // Endpoints
    // ---------------------------

    pub async fn employees(&self) -> AppResult<Vec<Employee>> {
        self.get("employees", &[]).await
    }

    pub async fn attendance(
        &self,
        range: &DateRange,
        employee: Option<&str>,
    ) -> AppResult<Vec<AttendanceEntry>> {
        let mut query = range_query(range);
        if let Some(id) = employee {
            query.push(("employeeId", id.to_string()));
        }
        self.get("attendance", &query).await
    }

    pub async fn schedules(&self, range: &DateRange) -> AppResult<Vec<ScheduleEntry>> {
        self.get("schedules", &range_query(range)).await
    }

    pub async fn open_tickets(&self) -> AppResult<Vec<Ticket>> {
        self.get("tickets", &[("status", "open".to_string())]).await
    }

    pub async fn nte(&self, id: &str) -> AppResult<NteRecord> {
        self.get(&format!("nte/{id}"), &[]).await
    }

    pub async fn submit_nte_response(&self, id: &str, response: &NteResponse) -> AppResult<NteRecord> {
        self.request(Method::PUT, &format!("nte/{id}/response"), &[], Some(response))
            .await
    }
}

fn range_query(range: &DateRange) -> Vec<(&'static str, String)> {
    vec![("from", range.from.to_string()), ("to", range.to.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::serve_once;

    fn ctx() -> AuthContext {
        AuthContext::new("tok123", "it")
    }

    #[tokio::test]
    async fn sends_bearer_token_and_decodes_bare_array() {
        let (base, req) = serve_once(200, r#"[{"id": 1, "name": "Eve", "department": "IT"}]"#).await;
        let client = ApiClient::new(&base, ctx()).unwrap();

        let employees = client.employees().await.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, "1");

        let head = req.await.unwrap();
        assert!(head.starts_with("GET /api/employees HTTP/1.1"));
        assert!(head.to_lowercase().contains("authorization: bearer tok123"));
    }

    #[tokio::test]
    async fn decodes_data_envelope_and_sends_query() {
        let body = r#"{"data": [{"employeeId": "E1", "date": "2025-01-02", "status": "Present"}]}"#;
        let (base, req) = serve_once(200, body).await;
        let client = ApiClient::new(&base, ctx()).unwrap();

        let range = DateRange::parse("2025-01").unwrap();
        let entries = client.attendance(&range, Some("E1")).await.unwrap();
        assert_eq!(entries.len(), 1);

        let head = req.await.unwrap();
        assert!(head.starts_with(
            "GET /api/attendance?from=2025-01-01&to=2025-01-31&employeeId=E1 HTTP/1.1"
        ));
    }

    #[tokio::test]
    async fn error_body_is_returned_as_api_error() {
        let (base, _req) = serve_once(422, r#"{"message": "feedback is too short"}"#).await;
        let client = ApiClient::new(&base, ctx()).unwrap();

        let err = client
            .submit_nte_response(
                "9",
                &NteResponse {
                    employee_feedback: "x".into(),
                    declared: true,
                    employee_signature: "sig".into(),
                },
            )
            .await
            .unwrap_err();

        match &err {
            AppError::Api { status, .. } => assert_eq!(*status, 422),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.api_message(), Some("feedback is too short"));
    }

    #[tokio::test]
    async fn non_json_error_body_is_wrapped() {
        let (base, _req) = serve_once(502, "Bad Gateway").await;
        let client = ApiClient::new(&base, ctx()).unwrap();

        let err = client.open_tickets().await.unwrap_err();
        assert_eq!(err.api_message(), Some("Bad Gateway"));
    }

    #[tokio::test]
    async fn transport_failure_is_http_error() {
        // nothing listens on port 9 of localhost in test environments
        let client = ApiClient::new("http://127.0.0.1:9/api", ctx()).unwrap();
        assert!(matches!(client.employees().await, Err(AppError::Http(_))));
    }
}
