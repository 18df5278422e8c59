use crate::error::{CxError, Result};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub const STORE_ENV_VAR: &str = "CX_CLIPBOARD";
const DEFAULT_STORE_FILENAME: &str = ".cx_clipboard.json";

/// Where the clipboard lives for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CxConfig {
    pub store_path: PathBuf,
}

impl CxConfig {
    /// Picks the store path from, in order: the `--clipboard` flag, the
    /// `CX_CLIPBOARD` environment variable, `~/.cx_clipboard.json`.
    pub fn resolve(
        flag: Option<PathBuf>,
        env: Option<PathBuf>,
        home: Option<&Path>,
    ) -> Result<Self> {
        let store_path = match (flag, env.filter(|p| !p.as_os_str().is_empty())) {
            (Some(path), _) => path,
            (None, Some(path)) => path,
            (None, None) => home
                .map(|home| home.join(DEFAULT_STORE_FILENAME))
                .ok_or_else(|| {
                    CxError::Config("could not determine home directory".to_string())
                })?,
        };
        Ok(Self { store_path })
    }

    /// [`CxConfig::resolve`] against the real environment.
    pub fn load(flag: Option<PathBuf>) -> Result<Self> {
        let env = std::env::var_os(STORE_ENV_VAR).map(PathBuf::from);
        let base_dirs = BaseDirs::new();
        Self::resolve(flag, env, base_dirs.as_ref().map(|dirs| dirs.home_dir()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins() {
        let config = CxConfig::resolve(
            Some(PathBuf::from("/flag.json")),
            Some(PathBuf::from("/env.json")),
            Some(Path::new("/home/me")),
        )
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/flag.json"));
    }

    #[test]
    fn env_beats_home() {
        let config = CxConfig::resolve(
            None,
            Some(PathBuf::from("/env.json")),
            Some(Path::new("/home/me")),
        )
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/env.json"));
    }

    #[test]
    fn empty_env_is_ignored() {
        let config =
            CxConfig::resolve(None, Some(PathBuf::new()), Some(Path::new("/home/me"))).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/home/me/.cx_clipboard.json"));
    }

    #[test]
    fn defaults_to_home_dotfile() {
        let config = CxConfig::resolve(None, None, Some(Path::new("/home/me"))).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/home/me/.cx_clipboard.json"));
    }

    #[test]
    fn no_home_is_an_error() {
        let err = CxConfig::resolve(None, None, None).unwrap_err();
        assert!(matches!(err, CxError::Config(_)));
    }
}
