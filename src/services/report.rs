//! Report service
//!
//! The three host-facing report operations: generate, download and email.
//! Each one runs the aggregation engine, assembles the document and encodes
//! it; email additionally dispatches the encoded file.

use crate::config::Settings;
use crate::delivery::{report_html_body, report_subject, Attachment, DeliveryDispatcher, OutboundMessage};
use crate::error::{ReportError, ReportResult};
use crate::export::{DocumentEncoder, ReportFormat};
use crate::models::{ReportPeriod, UserRef};
use crate::reports::{assemble, AggregationEngine, EngineOptions, ReportData, ReportDocument, ReportSource};

/// An encoded report and what it was built from
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub data: ReportData,
    pub document: ReportDocument,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Success flag plus a human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome {
    pub success: bool,
    pub message: String,
}

impl OperationOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(prefix: &str, err: &ReportError) -> Self {
        Self {
            success: false,
            message: format!("{}{}", prefix, err.failure_message()),
        }
    }

    /// Outcome of a generate call
    pub fn from_generate(period: ReportPeriod, result: &ReportResult<ReportArtifact>) -> Self {
        match result {
            Ok(_) => Self::ok(generated_message(period)),
            Err(e) => Self::failed("Failed to generate report: ", e),
        }
    }

    /// Outcome of an email call
    pub fn from_email(result: &ReportResult<String>) -> Self {
        match result {
            Ok(message) => Self::ok(message.clone()),
            Err(e) => Self::failed("Failed to send email: ", e),
        }
    }
}

/// `expense_report_<month>_<year>.<ext>`, month name in lower case
pub fn report_file_name(period: ReportPeriod, extension: &str) -> String {
    format!(
        "expense_report_{}_{}.{}",
        period.month_name().to_lowercase(),
        period.year,
        extension
    )
}

/// Status text for a successful generate call
pub fn generated_message(period: ReportPeriod) -> String {
    format!("Report generated for {}", period.numeric_label())
}

/// Service for building and sending monthly reports
pub struct ReportService<'a, S: ?Sized> {
    source: &'a S,
    settings: &'a Settings,
}

impl<'a, S: ReportSource + ?Sized> ReportService<'a, S> {
    /// Create a new report service
    pub fn new(source: &'a S, settings: &'a Settings) -> Self {
        Self { source, settings }
    }

    fn engine(&self) -> AggregationEngine<'a, S> {
        AggregationEngine::new(self.source, EngineOptions::from(self.settings))
    }

    /// Collect and assemble without encoding
    pub fn build(&self, user: &UserRef, period: ReportPeriod) -> ReportResult<(ReportData, ReportDocument)> {
        let data = self.engine().collect(user, period)?;
        let degraded = data.degraded();
        if !degraded.is_empty() {
            tracing::warn!(user = %data.user.id, %period, ?degraded, "report built with defaulted figures");
        }
        let document = assemble(&data);
        Ok((data, document))
    }

    /// Build and encode a report
    pub fn generate(
        &self,
        user: &UserRef,
        period: ReportPeriod,
        format: ReportFormat,
    ) -> ReportResult<ReportArtifact> {
        let encoder = format.encoder(&self.settings.currency_symbol);
        self.generate_with(user, period, encoder.as_ref())
    }

    /// Build a report with a caller-supplied encoder
    pub fn generate_with(
        &self,
        user: &UserRef,
        period: ReportPeriod,
        encoder: &dyn DocumentEncoder,
    ) -> ReportResult<ReportArtifact> {
        let (data, document) = self.build(user, period).inspect_err(|e| {
            tracing::error!(%user, %period, error = %e, "report generation failed");
        })?;

        let bytes = encoder.encode(&document).inspect_err(|e| {
            tracing::error!(%user, %period, error = %e, "report encoding failed");
        })?;

        tracing::info!(
            user = %data.user.id,
            %period,
            format = encoder.extension(),
            bytes = bytes.len(),
            "report generated"
        );

        Ok(ReportArtifact {
            file_name: report_file_name(period, encoder.extension()),
            content_type: encoder.content_type().to_string(),
            data,
            document,
            bytes,
        })
    }

    /// Same artifact as [`generate`](Self::generate); callers stream the
    /// bytes under `file_name`
    pub fn download(
        &self,
        user: &UserRef,
        period: ReportPeriod,
        format: ReportFormat,
    ) -> ReportResult<ReportArtifact> {
        self.generate(user, period, format)
    }

    /// Generate a report and send it to `destination`, or to the user's own
    /// address when none is given
    ///
    /// Returns the confirmation message. Nothing is dispatched unless the
    /// report was fully generated and encoded.
    pub fn email(
        &self,
        user: &UserRef,
        destination: Option<&str>,
        period: ReportPeriod,
        format: ReportFormat,
        dispatcher: &dyn DeliveryDispatcher,
    ) -> ReportResult<String> {
        let artifact = self.generate(user, period, format)?;
        let to = destination
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(&artifact.data.user.email)
            .to_string();

        let message = OutboundMessage {
            from: self.settings.sender_address.clone(),
            to: to.clone(),
            subject: report_subject(period),
            html_body: report_html_body(period),
            attachment: Attachment {
                file_name: artifact.file_name,
                content_type: artifact.content_type,
                bytes: artifact.bytes,
            },
        };

        dispatcher.deliver(&message).inspect_err(|e| {
            tracing::error!(%to, %period, error = %e, "report delivery failed");
        })?;

        Ok(format!("Report sent to {}", to))
    }
}
