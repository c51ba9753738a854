use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://exercises.praxis.dev/api/v2";
pub const DEFAULT_TOOL_PROGRAM: &str = "praxis-cli";

/// `settings.json`: the API token and workspace root. The file format is
/// owned by the companion tool's `configure` step; unknown fields are kept
/// out of our way by serde's default ignore behavior.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub token: String,

    /// Root directory under which `<track>/<exercise>` directories live.
    pub workspace: PathBuf,

    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Companion CLI program name or path.
    #[serde(default)]
    pub tool: Option<String>,
}

impl Settings {
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn tool_program(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL_PROGRAM)
    }
}

/// `state.json`: client-owned state that survives restarts. Only the current
/// track does; exercise metadata/manifest are re-read from the workspace.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClientState {
    #[serde(default)]
    pub current_track: Option<String>,
}
