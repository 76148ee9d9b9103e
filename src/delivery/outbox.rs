//! File-based outbox transport
//!
//! Each delivered message becomes a directory under the outbox holding a
//! `message.json` envelope and the attachment file itself.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::storage::{read_json, write_bytes_atomic, write_json_atomic};

use super::{DeliveryDispatcher, OutboundMessage};

const ENVELOPE_FILE: &str = "message.json";

/// On-disk record of a delivered message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub attachment_file: String,
    pub content_type: String,
    pub attachment_size: usize,
    pub delivered_at: Option<DateTime<Utc>>,
}

/// Writes messages into a local outbox directory
#[derive(Debug, Clone)]
pub struct OutboxDispatcher {
    dir: PathBuf,
}

impl OutboxDispatcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Envelopes of every delivered message, oldest first
    pub fn delivered(&self) -> ReportResult<Vec<(PathBuf, Envelope)>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.join(ENVELOPE_FILE).exists())
            .collect();
        entries.sort();

        entries
            .into_iter()
            .map(|dir| {
                let envelope: Envelope = read_json(dir.join(ENVELOPE_FILE))?;
                Ok((dir, envelope))
            })
            .collect()
    }

    fn message_dir(&self, message: &OutboundMessage, now: DateTime<Utc>) -> PathBuf {
        let recipient: String = message
            .to
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
            .collect();
        let base = format!("{}-{}", now.format("%Y%m%dT%H%M%S%3f"), recipient);

        let mut dir = self.dir.join(&base);
        let mut n = 1;
        while dir.exists() {
            dir = self.dir.join(format!("{}-{}", base, n));
            n += 1;
        }
        dir
    }
}

impl DeliveryDispatcher for OutboxDispatcher {
    fn deliver(&self, message: &OutboundMessage) -> ReportResult<()> {
        if !message.to.contains('@') {
            return Err(ReportError::delivery(
                format!("Invalid recipient address: '{}'", message.to),
                None,
            ));
        }

        let now = Utc::now();
        let dir = self.message_dir(message, now);
        let envelope = Envelope {
            from: message.from.clone(),
            to: message.to.clone(),
            subject: message.subject.clone(),
            html_body: message.html_body.clone(),
            attachment_file: message.attachment.file_name.clone(),
            content_type: message.attachment.content_type.clone(),
            attachment_size: message.attachment.bytes.len(),
            delivered_at: Some(now),
        };

        let wrap = |e: ReportError| {
            ReportError::delivery(
                format!("Could not write message to outbox {}", self.dir.display()),
                Some(e.to_string()),
            )
        };

        write_bytes_atomic(
            dir.join(&message.attachment.file_name),
            &message.attachment.bytes,
        )
        .map_err(wrap)?;
        write_json_atomic(dir.join(ENVELOPE_FILE), &envelope).map_err(wrap)?;

        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            path = %dir.display(),
            "message written to outbox"
        );
        Ok(())
    }
}
