use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{client::error::ClientError, model::api::ErrorDto};

/// HTTP client bound to a server base URL, keeping the session cookie between requests.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the server at `base_url`, e.g. `http://localhost:8080`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().cookie_store(true).build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send_json(self.http.get(self.url(path))).await
    }

    pub(crate) async fn get_with_query<Q, T>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ClientError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.http.get(self.url(path)).query(query))
            .await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.http.post(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.http.patch(self.url(path)).json(body))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.http.delete(self.url(path))).await?;

        Ok(())
    }

    /// GET request whose response has no body, such as logout
    pub(crate) async fn get_empty(&self, path: &str) -> Result<(), ClientError> {
        self.send(self.http.get(self.url(path))).await?;

        Ok(())
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;

        Ok(response.json::<T>().await?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;

        error_for_status(response).await
    }
}

/// Turns a non-success response into [`ClientError::Api`] with the server's message.
async fn error_for_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ErrorDto>(&body) {
        Ok(error_dto) => error_dto.error,
        Err(_) if !body.is_empty() => body,
        Err(_) => "Unknown error".to_string(),
    };

    tracing::debug!("Request failed with status {}: {}", status, message);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
