//! Environment driven configuration
//!
//! | Variable           | Effect                                               |
//! |--------------------|------------------------------------------------------|
//! | `TWIG_COMMIT_DATE` | Fixed timestamp for new commits (RFC 3339, RFC 2822 or `%Y-%m-%d %H:%M:%S %z`) |
//! | `NO_PAGER`         | Disable paging of `log` output                       |
//! | `NO_COLOR`         | Disable colored output                               |
//! | `RUST_LOG`         | Diagnostic log filter (defaults to `warn`)           |

use anyhow::Context;
use chrono::{DateTime, FixedOffset};

pub const COMMIT_DATE_ENV: &str = "TWIG_COMMIT_DATE";
pub const NO_PAGER_ENV: &str = "NO_PAGER";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Timestamp stamped on every commit created by this process
    pub commit_date: Option<DateTime<FixedOffset>>,
    pub pager_disabled: bool,
    pub color_disabled: bool,
}

impl Settings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let commit_date = match std::env::var(COMMIT_DATE_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Some(
                parse_date(raw.trim())
                    .with_context(|| format!("invalid {COMMIT_DATE_ENV} value: {raw}"))?,
            ),
            _ => None,
        };

        Ok(Settings {
            commit_date,
            pager_disabled: std::env::var_os(NO_PAGER_ENV).is_some(),
            color_disabled: std::env::var_os(NO_COLOR_ENV).is_some(),
        })
    }

    /// Timestamp for a commit created now
    pub fn commit_timestamp(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }
}

pub fn parse_date(raw: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .or_else(|_| DateTime::parse_from_str(raw, FALLBACK_DATE_FORMAT))
        .with_context(|| format!("unrecognized date format: {raw}"))
}
