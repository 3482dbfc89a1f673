//! Machine-readable command results.
//!
//! Every `--format json` response is one [`Envelope`]: a fixed header (version,
//! timestamp, ULID event id, command, status) with the command's own payload
//! flattened next to it.

use crate::core::error::BestiaryError;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use ulid::Ulid;

pub const ENVELOPE_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub envelope_version: &'static str,
    /// Unix seconds with a `Z` suffix, e.g. `1771220592Z`.
    pub ts: String,
    pub event_id: String,
    pub cmd: &'static str,
    pub status: &'static str,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(cmd: &'static str, payload: T) -> Self {
        Self {
            envelope_version: ENVELOPE_VERSION,
            ts: epoch_z(SystemTime::now()),
            event_id: Ulid::new().to_string(),
            cmd,
            status: "ok",
            payload,
        }
    }

    pub fn to_json(&self) -> Result<String, BestiaryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn epoch_z(at: SystemTime) -> String {
    let secs = at
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("{}Z", secs)
}
