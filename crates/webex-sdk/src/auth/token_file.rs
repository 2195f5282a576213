/*
[INPUT]:  Token file path and token data
[OUTPUT]: Token data persisted across runs
[POS]:    Auth layer - on-disk storage for integration tokens
[UPDATE]: When token file format or permissions change
*/

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::auth::TokenData;

/// JSON file holding the last token grant of an integration
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load stored tokens; a missing or unreadable file yields `None`
    pub fn load(&self) -> Option<TokenData> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Write tokens, creating parent directories and restricting permissions
    pub fn save(&self, data: &TokenData) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
        let mut file = open_private(&self.path)?;
        // an existing file keeps its old mode on open
        restrict_permissions(&file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()
    }

    /// Remove the file if it exists
    pub fn remove(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

fn open_private(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

#[cfg(unix)]
fn restrict_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Tokens;
    use chrono::Utc;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("webex-sdk-test-{}", Uuid::new_v4()));
        path.push("tokens.json");
        path
    }

    #[test]
    fn test_save_and_load() {
        let file = TokenFile::new(temp_path());
        assert!(file.load().is_none());

        let data = TokenData::from_grant(
            Tokens {
                access_token: "a".to_string(),
                expires_in: Some(100),
                refresh_token: Some("r".to_string()),
                refresh_token_expires_in: Some(200),
            },
            Utc::now(),
        );
        file.save(&data).unwrap();

        assert_eq!(file.load(), Some(data));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(file.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        file.remove().unwrap();
        file.remove().unwrap();
        if let Some(parent) = file.path().parent() {
            fs::remove_dir_all(parent).unwrap();
        }
    }
    #[cfg(unix)]
    #[test]
    fn test_save_tightens_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let file = TokenFile::new(temp_path());
        let parent = file.path().parent().unwrap().to_path_buf();
        fs::create_dir_all(&parent).unwrap();
        fs::write(file.path(), "stale contents that are longer than the new grant body").unwrap();
        fs::set_permissions(file.path(), fs::Permissions::from_mode(0o644)).unwrap();

        let data = TokenData::from_grant(
            Tokens {
                access_token: "a".to_string(),
                expires_in: None,
                refresh_token: None,
                refresh_token_expires_in: None,
            },
            Utc::now(),
        );
        file.save(&data).unwrap();

        let mode = fs::metadata(file.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(file.load(), Some(data));

        fs::remove_dir_all(parent).unwrap();
    }
}
