use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

/// File name of the token file inside the config directory
const TOKEN_FILE: &str = "token";

/// An opaque football-data.org API token.
///
/// The token never expires and is not validated beyond being non-empty;
/// the API itself rejects bad tokens with a 403.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("API token must not be empty")]
    Empty,

    #[error("could not write token file: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent storage for the API token: a single file next to config.toml.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store in the XDG config directory for this program.
    /// Returns None if no config directory can be determined.
    pub fn from_xdg() -> Option<Self> {
        let pgm = env!("CARGO_PKG_NAME");
        let xdg_dirs = BaseDirectories::with_prefix(pgm);
        let config_home = xdg_dirs.get_config_home()?;
        Some(Self::new(config_home.join(TOKEN_FILE)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the stored token. Absence (no file, unreadable file, or a file
    /// holding only whitespace) is a valid state and yields None.
    pub fn load(&self) -> Option<Credential> {
        let content = fs::read_to_string(&self.path).ok()?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Credential(trimmed.to_string()))
        }
    }

    /// Persist a token, overwriting any previous value. The input is
    /// trimmed first; input that trims to nothing is rejected.
    pub fn save(&self, value: &str) -> Result<Credential, CredentialError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, trimmed)?;
        Ok(Credential(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> CredentialStore {
        let dir = std::env::temp_dir().join(format!("footy-credentials-{}-{}", name, std::process::id()));
        CredentialStore::new(dir.join(TOKEN_FILE))
    }

    #[test]
    fn test_load_absent_token() {
        let store = temp_store("absent");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = temp_store("round-trip");
        store.save("  abc123token  ").unwrap();

        // A fresh store over the same path simulates a new process
        let reopened = CredentialStore::new(store.path().clone());
        let loaded = reopened.load().unwrap();
        assert_eq!(loaded.as_str(), "abc123token");
    }

    #[test]
    fn test_save_rejects_empty_input() {
        let store = temp_store("empty");
        assert!(matches!(store.save(""), Err(CredentialError::Empty)));
        assert!(matches!(store.save("   \n"), Err(CredentialError::Empty)));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let store = temp_store("overwrite");
        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap().as_str(), "second");
    }

    #[test]
    fn test_whitespace_only_file_is_absent() {
        let store = temp_store("whitespace");
        if let Some(parent) = store.path().parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(store.path(), "   \n").unwrap();
        assert_eq!(store.load(), None);
    }
}
