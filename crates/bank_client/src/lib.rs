//! Blocking HTTP client for the bank data-access API.
//!
//! # Responsibility
//! - Issue GET/POST/PUT/DELETE against a configured base address, speaking
//!   the wire DTO shapes from `bank_core`.
//! - Give end-to-end suites a reproducible view of response shapes and
//!   status codes.
//!
//! # Invariants
//! - Carries no service logic; every response is returned as the server
//!   shaped it.
//! - A 404 on single-row GET is `Ok(None)`; any other unexpected status is
//!   an error.

use bank_core::{AccountDto, ClientDto};
use log::debug;
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status} from {path}")]
    UnexpectedStatus { status: StatusCode, path: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Path-based JSON request wrapper over one controller base address.
///
/// The base address includes the controller segment, e.g.
/// `https://host/api/Client/`; operation routes are relative to it.
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http: HttpClient::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET returning the full materialized sequence; expects 200.
    pub fn get_list<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        debug!("event=http_request module=client method=GET path={path}");
        let response = self.http.get(self.url(path)).send()?;
        expect_json(response, path, StatusCode::OK)
    }

    /// GET returning a single row; 404 maps to `Ok(None)`, expects 200 otherwise.
    pub fn get_one<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        debug!("event=http_request module=client method=GET path={path}");
        let response = self.http.get(self.url(path)).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        expect_json(response, path, StatusCode::OK).map(Some)
    }

    /// POST creating a row; expects 201 and the created body.
    pub fn post_new<T: Serialize + DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ClientResult<T> {
        debug!("event=http_request module=client method=POST path={path}");
        let response = self.http.post(self.url(path)).json(body).send()?;
        expect_json(response, path, StatusCode::CREATED)
    }

    /// PUT overwriting a row; expects 200 and the persisted body.
    pub fn put_update<T: Serialize + DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ClientResult<T> {
        debug!("event=http_request module=client method=PUT path={path}");
        let response = self.http.put(self.url(path)).json(body).send()?;
        expect_json(response, path, StatusCode::OK)
    }

    /// DELETE returning the removal outcome; expects 200 and a boolean body.
    pub fn delete_row(&self, path: &str) -> ClientResult<bool> {
        debug!("event=http_request module=client method=DELETE path={path}");
        let response = self.http.delete(self.url(path)).send()?;
        expect_json(response, path, StatusCode::OK)
    }
}

fn expect_json<T: DeserializeOwned>(
    response: Response,
    path: &str,
    expected: StatusCode,
) -> ClientResult<T> {
    let status = response.status();
    if status != expected {
        return Err(ClientError::UnexpectedStatus {
            status,
            path: path.to_string(),
        });
    }
    Ok(response.json()?)
}

/// Typed routes of the clients controller.
pub struct ClientsApi {
    api: ApiClient,
}

impl ClientsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(base_url),
        }
    }

    pub fn get_clients(&self) -> ClientResult<Vec<ClientDto>> {
        self.api.get_list("Get")
    }

    pub fn get_client(&self, id: i64) -> ClientResult<Option<ClientDto>> {
        self.api.get_one(&format!("GetAll/{id}"))
    }

    pub fn new_client(&self, client: &ClientDto) -> ClientResult<ClientDto> {
        self.api.post_new("NewClient", client)
    }

    pub fn update_client(&self, id: i64, client: &ClientDto) -> ClientResult<ClientDto> {
        self.api.put_update(&format!("UpdateClient/{id}"), client)
    }

    pub fn remove_client(&self, id: i64) -> ClientResult<bool> {
        self.api.delete_row(&format!("RemoveClient/{id}"))
    }
}

/// Typed routes of the accounts controller.
pub struct AccountsApi {
    api: ApiClient,
}

impl AccountsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiClient::new(base_url),
        }
    }

    pub fn get_accounts(&self) -> ClientResult<Vec<AccountDto>> {
        self.api.get_list("Get")
    }

    pub fn get_account(&self, id: i64) -> ClientResult<Option<AccountDto>> {
        self.api.get_one(&format!("GetAll/{id}"))
    }

    pub fn new_account(&self, account: &AccountDto) -> ClientResult<AccountDto> {
        self.api.post_new("NewAccount", account)
    }

    pub fn update_account(&self, id: i64, account: &AccountDto) -> ClientResult<AccountDto> {
        self.api.put_update(&format!("UpdateAccount/{id}"), account)
    }

    pub fn remove_account(&self, id: i64) -> ClientResult<bool> {
        self.api.delete_row(&format!("RemoveAccount/{id}"))
    }
}
