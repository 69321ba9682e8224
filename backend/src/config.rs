use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

pub const DEFAULT_ENV_FILE: &str = ".env.local";

const URL_KEYS: &[&str] = &["SUPABASE_URL", "VITE_SUPABASE_URL"];
const SERVICE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} is not a valid URL: {reason}")]
    InvalidUrl { key: &'static str, reason: String },
}

#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub database_url: Url,
    pub service_role_key: String,
}

impl SeedConfig {
    /// Reads key/value pairs from `path` without touching the process environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let env_err = |source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };
        let pairs = dotenvy::from_path_iter(path)
            .map_err(env_err)?
            .collect::<Result<Vec<(String, String)>, _>>()
            .map_err(env_err)?;
        Self::from_pairs(pairs)
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut url: Option<String> = None;
        let mut url_key = URL_KEYS[0];
        let mut key: Option<String> = None;
        for (k, v) in pairs {
            let k = k.as_ref();
            if let Some(pos) = URL_KEYS.iter().position(|u| *u == k) {
                // SUPABASE_URL wins over the VITE_ fallback whatever the file order
                if url.is_none() || pos == 0 {
                    url = Some(v.into());
                    url_key = URL_KEYS[pos];
                }
            } else if k == SERVICE_KEY {
                key = Some(v.into());
            }
        }

        let raw_url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::Missing(URL_KEYS[0]))?;
        let service_role_key = key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing(SERVICE_KEY))?;

        Ok(SeedConfig {
            database_url: parse_database_url(url_key, raw_url.trim())?,
            service_role_key: service_role_key.trim().to_string(),
        })
    }
}

fn parse_database_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl { key, reason };
    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    // join() replaces the last segment unless the base ends with '/'
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_url_and_key() {
        let cfg = SeedConfig::from_pairs([
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "secret"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url.host_str(), Some("abc.supabase.co"));
        assert_eq!(cfg.service_role_key, "secret");
    }

    #[test]
    fn falls_back_to_vite_prefixed_url() {
        let cfg = SeedConfig::from_pairs([
            ("VITE_SUPABASE_URL", "https://vite.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "secret"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url.host_str(), Some("vite.supabase.co"));
    }

    #[test]
    fn plain_url_key_wins_over_fallback() {
        let cfg = SeedConfig::from_pairs([
            ("SUPABASE_URL", "https://main.supabase.co"),
            ("VITE_SUPABASE_URL", "https://vite.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "secret"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url.host_str(), Some("main.supabase.co"));
    }

    #[test]
    fn missing_url_is_rejected() {
        let err = SeedConfig::from_pairs([("SUPABASE_SERVICE_ROLE_KEY", "secret")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SUPABASE_URL")));

        let err = SeedConfig::from_pairs([
            ("SUPABASE_URL", "  "),
            ("SUPABASE_SERVICE_ROLE_KEY", "secret"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SUPABASE_URL")));
    }

    #[test]
    fn malformed_url_is_rejected() {
        for bad in ["not a url", "abc.supabase.co", "ftp://abc.supabase.co"] {
            let err = SeedConfig::from_pairs([
                ("SUPABASE_URL", bad),
                ("SUPABASE_SERVICE_ROLE_KEY", "secret"),
            ])
            .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUrl { .. }), "{bad}");
        }
    }

    #[test]
    fn missing_service_key_is_rejected() {
        let err = SeedConfig::from_pairs([("SUPABASE_URL", "https://abc.supabase.co")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SUPABASE_SERVICE_ROLE_KEY")));
    }

    #[test]
    fn base_path_gets_trailing_slash() {
        let cfg = SeedConfig::from_pairs([
            ("SUPABASE_URL", "https://db.example.com/supabase"),
            ("SUPABASE_SERVICE_ROLE_KEY", "secret"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url.as_str(), "https://db.example.com/supabase/");
    }

    #[test]
    fn loads_values_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SUPABASE_URL=https://abc.supabase.co").unwrap();
        writeln!(file, "SUPABASE_SERVICE_ROLE_KEY=secret").unwrap();

        let cfg = SeedConfig::load(file.path()).unwrap();
        assert_eq!(cfg.database_url.host_str(), Some("abc.supabase.co"));
        assert_eq!(cfg.service_role_key, "secret");
    }

    #[test]
    fn malformed_url_in_env_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SUPABASE_URL=abc.supabase.co").unwrap();
        writeln!(file, "SUPABASE_SERVICE_ROLE_KEY=secret").unwrap();

        let err = SeedConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { key: "SUPABASE_URL", .. }));
    }

    #[test]
    fn missing_env_file_is_an_error() {
        let err = SeedConfig::load(Path::new("/definitely/not/here/.env.local")).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
    }
}
