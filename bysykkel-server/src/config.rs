//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};
use chrono_tz::Tz;

use crate::availability::TargetStations;
use crate::gbfs::GbfsConfig;
use crate::locale::Locale;

/// Default widget title.
pub const DEFAULT_TITLE: &str = "Bergen Bysykkel";

const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {key}={value:?}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: &'static str,
}

/// Zone the feed's `last_updated` time is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// Constant offset from UTC; no daylight saving.
    Fixed(FixedOffset),
    /// IANA zone such as `Europe/Oslo`, daylight saving included.
    Named(Tz),
}

impl Default for DisplayZone {
    fn default() -> Self {
        DisplayZone::Fixed(Utc.fix())
    }
}

/// How the board is presented.
#[derive(Debug, Clone)]
pub struct WidgetSettings {
    /// Heading above the board; empty means no heading.
    pub title: String,
    /// Language used when a request doesn't ask for one.
    pub default_locale: Locale,
    /// Zone used to show the feed's `last_updated` time.
    pub zone: DisplayZone,
}

impl WidgetSettings {
    /// Settings with a sanitized `title`, English text and UTC times.
    pub fn new(title: &str) -> Self {
        Self {
            title: sanitize_title(title),
            default_locale: Locale::default(),
            zone: DisplayZone::default(),
        }
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    pub bind: SocketAddr,
    /// Feed URLs, timeout and client identifier
    pub feeds: GbfsConfig,
    /// Stations shown on the board
    pub targets: TargetStations,
    pub widget: WidgetSettings,
    /// Serve feeds from this directory instead of the network
    pub mock_dir: Option<PathBuf>,
    /// Log this crate at debug level
    pub debug: bool,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset keys.
    ///
    /// | Key | Meaning |
    /// |---|---|
    /// | `BYSYKKEL_BIND` | listen address |
    /// | `BYSYKKEL_INFO_URL` | station information feed |
    /// | `BYSYKKEL_STATUS_URL` | station status feed |
    /// | `BYSYKKEL_TIMEOUT_SECS` | feed request timeout |
    /// | `BYSYKKEL_CLIENT_ID` | `Client-Identifier` header |
    /// | `BYSYKKEL_TITLE` | widget title (may be empty) |
    /// | `BYSYKKEL_LANG` | default language, `en` or `nb` |
    /// | `BYSYKKEL_TZ` | IANA zone for the update time, e.g. `Europe/Oslo` |
    /// | `BYSYKKEL_UTC_OFFSET_MINS` | fixed offset instead, no daylight saving |
    /// | `BYSYKKEL_MOCK_DIR` | serve feeds from files |
    /// | `BYSYKKEL_DEBUG` | `1`/`true`/`yes` for debug logs |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup("BYSYKKEL_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse().map_err(|_| ConfigError {
            key: "BYSYKKEL_BIND",
            value: bind_raw.clone(),
            reason: "expected host:port",
        })?;

        let mut feeds = match lookup("BYSYKKEL_CLIENT_ID") {
            Some(id) => GbfsConfig::new(id),
            None => GbfsConfig::default(),
        };
        if let Some(url) = lookup("BYSYKKEL_INFO_URL") {
            feeds.information_url = url;
        }
        if let Some(url) = lookup("BYSYKKEL_STATUS_URL") {
            feeds.status_url = url;
        }
        if let Some(raw) = lookup("BYSYKKEL_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError {
                key: "BYSYKKEL_TIMEOUT_SECS",
                value: raw.clone(),
                reason: "expected a whole number of seconds",
            })?;
            if secs == 0 {
                return Err(ConfigError {
                    key: "BYSYKKEL_TIMEOUT_SECS",
                    value: raw,
                    reason: "timeout must be at least one second",
                });
            }
            feeds = feeds.with_timeout(secs);
        }

        let mut widget = match lookup("BYSYKKEL_TITLE") {
            Some(title) => WidgetSettings::new(&title),
            None => WidgetSettings::default(),
        };
        if let Some(raw) = lookup("BYSYKKEL_LANG") {
            widget.default_locale = Locale::parse(&raw).ok_or(ConfigError {
                key: "BYSYKKEL_LANG",
                value: raw.clone(),
                reason: "expected en or nb",
            })?;
        }
        let offset = lookup("BYSYKKEL_UTC_OFFSET_MINS");
        if let Some(raw) = lookup("BYSYKKEL_TZ") {
            if offset.is_some() {
                return Err(ConfigError {
                    key: "BYSYKKEL_TZ",
                    value: raw,
                    reason: "conflicts with BYSYKKEL_UTC_OFFSET_MINS",
                });
            }
            let tz = Tz::from_str_insensitive(raw.trim()).map_err(|_| ConfigError {
                key: "BYSYKKEL_TZ",
                value: raw.clone(),
                reason: "expected an IANA time zone name",
            })?;
            widget.zone = DisplayZone::Named(tz);
        }
        if let Some(raw) = offset {
            let fixed = raw
                .trim()
                .parse::<i32>()
                .ok()
                .and_then(|mins| mins.checked_mul(60))
                .and_then(FixedOffset::east_opt)
                .ok_or(ConfigError {
                    key: "BYSYKKEL_UTC_OFFSET_MINS",
                    value: raw.clone(),
                    reason: "expected minutes east of UTC, within a day",
                })?;
            widget.zone = DisplayZone::Fixed(fixed);
        }

        let mock_dir = lookup("BYSYKKEL_MOCK_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let debug = lookup("BYSYKKEL_DEBUG").is_some_and(|v| is_truthy(&v));

        Ok(Self {
            bind,
            feeds,
            targets: TargetStations::default(),
            widget,
            mock_dir,
            debug,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: ([127, 0, 0, 1], 3000).into(),
            feeds: GbfsConfig::default(),
            targets: TargetStations::default(),
            widget: WidgetSettings::default(),
            mock_dir: None,
            debug: false,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Clean a title for display: drop `<...>` tags and control characters,
/// collapse whitespace runs to one space, trim.
///
/// An unclosed `<` drops the rest of the input.
pub fn sanitize_title(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut in_tag = false;
    let mut pending_space = false;

    for c in raw.chars() {
        if in_tag {
            in_tag = c != '>';
            continue;
        }
        if c == '<' {
            in_tag = true;
            pending_space = true;
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if c.is_control() {
            continue;
        }
        if pending_space && !cleaned.is_empty() {
            cleaned.push(' ');
        }
        pending_space = false;
        cleaned.push(c);
    }

    cleaned
}
