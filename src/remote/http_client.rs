use super::*;

/// Retry wrapper for idempotent GETs. Mutations never go through here.
pub(super) fn with_retries<T>(label: &str, mut f: impl FnMut() -> Result<T>) -> Result<T> {
    const ATTEMPTS: usize = 3;
    let mut last: Option<Error> = None;
    for i in 0..ATTEMPTS {
        match f() {
            Ok(v) => return Ok(v),
            Err(err) => {
                tracing::debug!(label, attempt = i + 1, %err, "remote request failed");
                last = Some(err);
                if i + 1 < ATTEMPTS {
                    std::thread::sleep(std::time::Duration::from_millis(200 * (1 << i)));
                }
            }
        }
    }
    Err(last.unwrap_or_else(|| Error::Transport(format!("{label}: unknown error"))))
}

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn bearer(&self) -> Result<String> {
        let token = self.token.as_deref().ok_or_else(|| {
            Error::Config("no API token configured (run `praxis configure`)".into())
        })?;
        Ok(format!("Bearer {token}"))
    }

    pub(super) fn send(
        &self,
        label: &str,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::Response> {
        let resp = req
            .send()
            .map_err(|err| Error::Transport(format!("{label}: {err}")))?;
        self.ensure_ok(resp, label)
    }

    /// Non-2xx responses become a transport error carrying the raw payload.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        Err(Error::Transport(format!("{label}: {status}: {body}")))
    }
}
