//! Authenticated solution status mutations.

use super::*;
use crate::actions::SolutionAction;

impl RemoteClient {
    /// PATCH `/solutions/{id}/{complete|publish|unpublish}`. Mutations are
    /// not retried.
    pub fn set_solution_status(&self, solution_id: &str, action: SolutionAction) -> Result<()> {
        let spec = action.spec();
        let url = self.url(&format!("/solutions/{solution_id}/{}", spec.segment));
        tracing::debug!(%url, action = spec.segment, "set solution status");
        let req = self
            .http
            .request(spec.method, url)
            .header(reqwest::header::AUTHORIZATION, self.bearer()?);
        self.send(spec.segment, req)?;
        Ok(())
    }
}
