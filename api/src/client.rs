use crate::{StadiumStructure, decode_payload};
use log::debug;
use reqwest::{Client, StatusCode};
use std::fmt;

pub type ApiResult<T> = Result<T, ApiError>;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const STRUCTURE_PATH: &str = "/get_stadium_structure";

/// Client for the stadium seating endpoint.
#[derive(Debug, Clone)]
pub struct StadiumApi {
    client: Client,
    base_url: String,
}

impl Default for StadiumApi {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status. The body is never decoded.
    Request(StatusCode),
    /// The request never produced a response (connection refused, DNS, ...).
    Network(reqwest::Error),
    /// The body could not be read or is not a stadium structure.
    Parsing(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(status) => write!(f, "Error en la solicitud: {}", status.as_u16()),
            ApiError::Network(e) => write!(f, "{e}"),
            ApiError::Parsing(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl StadiumApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("stadium-view/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn structure_url(&self) -> String {
        format!("{}{STRUCTURE_PATH}", self.base_url)
    }

    /// Fetch the stadium structure with a single GET.
    ///
    /// `Ok(None)` means the server answered 2xx with a falsy JSON document.
    pub async fn fetch_structure(&self) -> ApiResult<Option<StadiumStructure>> {
        let url = self.structure_url();
        debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Request(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Parsing(e.to_string()))?;
        decode_payload(&body).map_err(|e| ApiError::Parsing(e.to_string()))
    }
}
