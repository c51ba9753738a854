use std::path::PathBuf;

use praxis::model::Settings;
use praxis::store::ClientStore;
use praxis::tool::ToolRunner;

use super::*;

/// Persists settings locally, then hands the same token/workspace to the
/// companion tool's own `configure`. Runs without any pre-existing config.
pub(super) fn handle_configure_command(
    token: String,
    workspace: PathBuf,
    api_base_url: Option<String>,
    tool: Option<String>,
) -> Result<()> {
    let store = ClientStore::open(ClientStore::default_dir()?);
    let settings = Settings {
        token,
        workspace,
        api_base_url,
        tool,
    };
    store.write_settings(&settings)?;

    let runner = ToolRunner::new(settings.tool_program());
    runner.configure(&settings.token, &settings.workspace)?;

    println!("praxis configured (settings at {})", store.settings_path().display());
    Ok(())
}
