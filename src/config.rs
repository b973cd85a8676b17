use std::{env, path::PathBuf};
use tracing::warn;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub db_pool_size: u32,
    /// Upper bound on the total size of one multipart booking form.
    pub max_upload_bytes: usize,
    /// When off, the service runs without the `/patient/ai` booking path.
    pub ai_analysis: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            database_url: env_or("DATABASE_URL", "hospital.db"),
            bind_addr: env_or("BIND_ADDR", "127.0.0.1:8080"),
            upload_dir: env_or("UPLOAD_DIR", "static/uploads").into(),
            static_dir: env_or("STATIC_DIR", "static").into(),
            db_pool_size: env::var("DB_POOL_SIZE")
                .ok()
                .and_then(|size| match size.parse() {
                    Ok(size) if size > 0 => Some(size),
                    _ => {
                        warn!("Invalid DB_POOL_SIZE '{}', using 4", size);
                        None
                    }
                })
                .unwrap_or(4),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|size| match size.parse() {
                    Ok(size) if size > 0 => Some(size),
                    _ => {
                        warn!("Invalid MAX_UPLOAD_BYTES '{}', using {}", size, DEFAULT_MAX_UPLOAD_BYTES);
                        None
                    }
                })
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            ai_analysis: env::var("AI_ANALYSIS")
                .map(|flag| parse_flag(&flag))
                .unwrap_or(true),
        }
    }
}

/// Reads `key`, falling back to `default` with a warning.
fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("{} not set, using {}", key, default);
        default.to_string()
    })
}

fn parse_flag(flag: &str) -> bool {
    !matches!(
        flag.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        assert_eq!(env_or("HOSPITAL_TEST_UNSET_BIND_ADDR", "127.0.0.1:8080"), "127.0.0.1:8080");

        env::set_var("HOSPITAL_TEST_UPLOAD_DIR", "/srv/uploads");
        assert_eq!(env_or("HOSPITAL_TEST_UPLOAD_DIR", "static/uploads"), "/srv/uploads");
    }

    #[test]
    fn flags() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(" False "));
        assert!(!parse_flag("OFF"));
        assert!(!parse_flag("no"));
    }
}
