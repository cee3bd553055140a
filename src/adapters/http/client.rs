use crate::session::SessionContext;
use crate::utils::error::{PredictionsError, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Thin JSON client for the predictions API.
///
/// Every request carries the session's bearer token when one is set. Non
/// 2xx responses become `PredictionsError::Api` with the server's message.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    session: SessionContext,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiClient {
    pub fn new(
        base_url: Url,
        timeout: Duration,
        user_agent: &str,
        session: SessionContext,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self::with_client(client, base_url, session))
    }

    pub fn with_client(client: Client, base_url: Url, session: SessionContext) -> Self {
        Self {
            client,
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Appends percent-encoded path segments to the base URL.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PredictionsError::Config {
                message: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        tracing::debug!("{} {}", method, url);
        let mut builder = self.client.request(method, url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("{} -> {}", response.url().path(), status);

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| {
                if text.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                } else {
                    text
                }
            });
        Err(PredictionsError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let builder = self.request(Method::GET, segments)?;
        Ok(self.send(builder).await?.json().await?)
    }

    pub async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, segments)?.query(query);
        Ok(self.send(builder).await?.json().await?)
    }

    /// GET that maps a 404 to `Ok(None)`.
    pub async fn get_optional<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>> {
        match self.get(segments).await {
            Ok(value) => Ok(Some(value)),
            Err(PredictionsError::Api {
                status: 404,
                message,
            }) => {
                tracing::debug!("/{} not found: {}", segments.join("/"), message);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn send_json<B, T>(&self, method: Method, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, segments)?.json(body);
        Ok(self.send(builder).await?.json().await?)
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, segments, body).await
    }

    /// Request whose response body is ignored.
    pub async fn execute(&self, method: Method, segments: &[&str]) -> Result<StatusCode> {
        let builder = self.request(method, segments)?;
        Ok(self.send(builder).await?.status())
    }
}
