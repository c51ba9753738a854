//! Client for the remote practice service (`/api/v2`).
//!
//! This layer surfaces failures as [`Error::Transport`] carrying the raw
//! status and body payload; user-facing messaging is the caller's job.

use crate::error::{Error, Result};

mod http_client;
use self::http_client::with_retries;

mod catalog;
mod solutions;
mod types;

pub struct RemoteClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent("praxis")
            .build()
            .map_err(|err| Error::Transport(format!("build http client: {err}")))?;
        Ok(Self {
            base_url: base_url.into(),
            token,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
