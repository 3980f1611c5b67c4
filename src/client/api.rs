use reqwest::{Response, StatusCode, Url};
use thiserror::Error;

use crate::models::Item;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-2xx status; `message` is its body.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("invalid service url {url:?}")]
    InvalidUrl { url: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// HTTP transport for the inventory service.
#[derive(Debug, Clone)]
pub struct InventoryApi {
    http: reqwest::Client,
    base: Url,
}

impl InventoryApi {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> ClientResult<Self> {
        let invalid = || ClientError::InvalidUrl {
            url: base_url.to_string(),
        };
        let base = Url::parse(base_url).map_err(|_| invalid())?;
        if base.cannot_be_a_base() {
            return Err(invalid());
        }
        Ok(Self { http, base })
    }

    /// GET /inventory
    pub async fn list(&self) -> ClientResult<Vec<Item>> {
        let resp = self.http.get(self.endpoint(&["inventory"])).send().await?;
        read_inventory(resp).await
    }

    /// POST /add with the given form fields.
    pub async fn add(&self, fields: &[(String, String)]) -> ClientResult<Vec<Item>> {
        let resp = self
            .http
            .post(self.endpoint(&["add"]))
            .form(fields)
            .send()
            .await?;
        read_inventory(resp).await
    }

    /// POST /remove. `row` is sent as-is; the service decides whether it is
    /// a usable position.
    pub async fn remove(&self, row: &str) -> ClientResult<Vec<Item>> {
        let resp = self
            .http
            .post(self.endpoint(&["remove"]))
            .form(&[("row", row)])
            .send()
            .await?;
        read_inventory(resp).await
    }

    /// GET /name/{name}
    pub async fn heading(&self, name: &str) -> ClientResult<String> {
        let resp = self.http.get(self.endpoint(&["name", name])).send().await?;
        Ok(check_status(resp).await?.text().await?)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // checked in the constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

async fn check_status(resp: Response) -> ClientResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await?;
    Err(ClientError::Rejected { status, message })
}

async fn read_inventory(resp: Response) -> ClientResult<Vec<Item>> {
    Ok(check_status(resp).await?.json().await?)
}
