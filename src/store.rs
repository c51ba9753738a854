//! On-disk client store: `settings.json` (token/workspace, written by
//! `configure`) and `state.json` (current track, survives restarts).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{ClientState, Settings};

const SETTINGS_FILE: &str = "settings.json";
const STATE_FILE: &str = "state.json";

#[derive(Clone)]
pub struct ClientStore {
    root: PathBuf,
}

impl ClientStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$PRAXIS_CONFIG_DIR`, else `$HOME/.config/praxis`.
    pub fn default_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os("PRAXIS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }
        let home = std::env::var_os("HOME")
            .ok_or_else(|| Error::Config("cannot locate config dir (HOME is unset)".into()))?;
        Ok(PathBuf::from(home).join(".config").join("praxis"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// Missing or unreadable settings are fatal to setup, not to the session.
    pub fn read_settings(&self) -> Result<Settings> {
        let path = self.settings_path();
        let bytes = fs::read(&path).map_err(|err| {
            Error::Config(format!(
                "cannot read {} ({err}); run `praxis configure --token ... --workspace ...`",
                path.display()
            ))
        })?;
        serde_json::from_slice(&bytes)
            .map_err(|err| Error::Config(format!("malformed {} ({err})", path.display())))
    }

    pub fn write_settings(&self, settings: &Settings) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(settings)
            .map_err(|err| Error::Parse(format!("serialize settings ({err})")))?;
        write_atomic(&self.settings_path(), &bytes)
    }

    /// Absent state file reads as the default state, not an error.
    pub fn read_state(&self) -> Result<ClientState> {
        let path = self.root.join(STATE_FILE);
        if !path.exists() {
            return Ok(ClientState::default());
        }
        let bytes = fs::read(&path)?;
        serde_json::from_slice(&bytes)
            .map_err(|err| Error::Parse(format!("malformed {} ({err})", path.display())))
    }

    pub fn write_state(&self, state: &ClientState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(state)
            .map_err(|err| Error::Parse(format!("serialize state ({err})")))?;
        write_atomic(&self.root.join(STATE_FILE), &bytes)
    }

    pub fn set_current_track(&self, track: &str) -> Result<()> {
        let mut state = self.read_state()?;
        state.current_track = Some(track.to_string());
        self.write_state(&state)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_roundtrip_and_default() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ClientStore::open(tmp.path());

        let state = store.read_state().unwrap();
        assert!(state.current_track.is_none());

        store.set_current_track("rust").unwrap();
        let state = store.read_state().unwrap();
        assert_eq!(state.current_track.as_deref(), Some("rust"));
    }

    #[test]
    fn missing_settings_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ClientStore::open(tmp.path());
        let err = store.read_settings().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
