pub mod resource;

pub use resource::{QueryOrder, Resource};

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::{AppError, GatewayError};

/// Status plus decoded record, handed back from `create` so callers can tell
/// a fresh record (201) from an existing match (200).
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<R> {
    pub status: StatusCode,
    pub data: R,
}

/// Client for the advising API.
///
/// Every call is a single authenticated request; nothing is cached or retried.
#[derive(Clone, Debug)]
pub struct AdvisorApi {
    client: Client,
    base_url: Url,
}

impl AdvisorApi {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.api_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build http client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    /// Lists one page of records.
    pub async fn fetch_all<R: Resource>(
        &self,
        token: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<R>, GatewayError> {
        if limit == 0 {
            let err = GatewayError::new(
                StatusCode::BAD_REQUEST.as_u16(),
                "limit must be greater than zero",
            );
            warn!("Advisor API GET {} rejected: {}", R::PATH, err);
            return Err(err);
        }

        let url = self.list_url::<R>(offset, limit);
        let (status, body) = self
            .send(Method::GET, R::PATH, self.request(Method::GET, url, token))
            .await?;
        let data = accept(Method::GET, R::PATH, status, &body, &[StatusCode::OK])?;

        let records = match data {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => {
                let err = GatewayError::new(
                    StatusCode::BAD_GATEWAY.as_u16(),
                    format!("expected a list of {} records, got {}", R::NAME, other),
                );
                warn!("Advisor API GET {} failed: {}", R::PATH, err);
                return Err(err);
            }
        };
        let models: Vec<R> = records.iter().map(R::from_record).collect();

        debug!(
            "Advisor API Success: Retrieved {} {}(s) with offset={}, limit={}",
            models.len(),
            R::NAME,
            offset,
            limit
        );
        Ok(models)
    }

    /// Creates a record. The API may answer 200 with an existing match
    /// instead of 201 with a new one; both count as success.
    pub async fn create<R: Resource>(
        &self,
        token: &str,
        payload: &R::Payload,
    ) -> Result<Envelope<R>, GatewayError> {
        let url = self.endpoint(&[R::PATH]);
        let request = self.request(Method::POST, url, token).json(payload);
        let (status, body) = self.send(Method::POST, R::PATH, request).await?;
        let data = accept(
            Method::POST,
            R::PATH,
            status,
            &body,
            &[StatusCode::OK, StatusCode::CREATED],
        )?;
        let record = R::from_record(&data);

        debug!(
            "Advisor API Success: Created ({}) {} {} ({})",
            status.as_u16(),
            R::NAME,
            record.record_id().unwrap_or("?"),
            record.label().unwrap_or("")
        );
        Ok(Envelope {
            status,
            data: record,
        })
    }

    pub async fn edit<R: Resource>(
        &self,
        token: &str,
        id: &str,
        payload: &R::Update,
    ) -> Result<R, GatewayError> {
        let url = self.endpoint(&[R::PATH, id]);
        let request = self.request(Method::PUT, url, token).json(payload);
        let (status, body) = self.send(Method::PUT, R::PATH, request).await?;
        let data = accept(Method::PUT, R::PATH, status, &body, &[StatusCode::OK])?;
        let record = R::from_record(&data);

        debug!(
            "Advisor API Success: Edited ({}) {} {} ({})",
            status.as_u16(),
            R::NAME,
            id,
            record.label().unwrap_or("")
        );
        Ok(record)
    }

    pub async fn delete<R: Resource>(&self, token: &str, id: &str) -> Result<(), GatewayError> {
        let url = self.endpoint(&[R::PATH, id]);
        let (status, body) = self
            .send(Method::DELETE, R::PATH, self.request(Method::DELETE, url, token))
            .await?;
        // Any body on success is ignored.
        check_status(Method::DELETE, R::PATH, status, &body, &[StatusCode::OK])?;

        debug!("Advisor API Success: Deleted {} {}", R::NAME, id);
        Ok(())
    }

    /// URL of a list query, with pagination in the resource's parameter order.
    pub fn list_url<R: Resource>(&self, offset: u64, limit: u64) -> Url {
        let mut url = self.endpoint(&[R::PATH]);
        url.set_query(Some(&R::QUERY_ORDER.query(offset, limit)));
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs are checked to be hierarchical when the config is loaded.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url, token: &str) -> RequestBuilder {
        self.client.request(method, url).bearer_auth(token)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<(StatusCode, String), GatewayError> {
        let response = request.send().await.map_err(|e| {
            let err = GatewayError::transport(e);
            warn!("Advisor API {} {} failed: {}", method, path, err);
            err
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            let err = GatewayError::transport(e);
            warn!("Advisor API {} {} failed reading body: {}", method, path, err);
            err
        })?;
        Ok((status, body))
    }
}

fn check_status(
    method: Method,
    path: &str,
    status: StatusCode,
    body: &str,
    expected: &[StatusCode],
) -> Result<(), GatewayError> {
    if expected.contains(&status) {
        return Ok(());
    }
    let err = GatewayError::from_response(status, body);
    warn!("Advisor API {} {} failed: {}", method, path, err);
    Err(err)
}

/// Checks the status against `expected` and decodes the body. An empty
/// success body decodes to `Null`.
fn accept(
    method: Method,
    path: &str,
    status: StatusCode,
    body: &str,
    expected: &[StatusCode],
) -> Result<Value, GatewayError> {
    check_status(method.clone(), path, status, body, expected)?;

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| {
        let err = GatewayError::new(
            StatusCode::BAD_GATEWAY.as_u16(),
            format!("Failed to parse response body: {}", e),
        );
        warn!("Advisor API {} {} failed: {}", method, path, err);
        err
    })
}
