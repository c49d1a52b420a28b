//! Flags shared by several components.

use crate::Options;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Logfmt,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Logfmt => "logfmt",
            LogFormat::Json => "json",
        })
    }
}

crate::impl_flag_value_display!(LogLevel, LogFormat);

/// `--log.level` / `--log.format`, understood by Thanos and Alertmanager
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Options)]
#[serde(default)]
pub struct LogOpts {
    #[opt("log.level")]
    pub level: Option<LogLevel>,
    #[opt("log.format")]
    pub format: Option<LogFormat>,
}
