use anyhow::{bail, Context, Result};

use crate::screening::fields::SkillMatching;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a whole multipart request (job description + all résumés).
    pub max_upload_bytes: usize,
    pub skill_matching: SkillMatching,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            skill_matching: SkillMatching::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            skill_matching: match optional_env("SKILL_MATCH_MODE") {
                Some(v) => parse_skill_matching(&v)?,
                None => SkillMatching::default(),
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_skill_matching(raw: &str) -> Result<SkillMatching> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "substring" => Ok(SkillMatching::Substring),
        "word" => Ok(SkillMatching::WordBoundary),
        other => bail!("SKILL_MATCH_MODE must be 'substring' or 'word', got '{other}'"),
    }
}
