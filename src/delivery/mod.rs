//! Outbound delivery of generated reports
//!
//! A report is sent as a single message with an HTML body and the encoded
//! document attached. Transports implement [`DeliveryDispatcher`]; the
//! bundled [`OutboxDispatcher`] drops messages into a local outbox.

pub mod outbox;

pub use outbox::OutboxDispatcher;

use serde::{Deserialize, Serialize};

use crate::error::ReportResult;
use crate::models::ReportPeriod;

/// A file carried by an outbound message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// A fully composed message, ready to dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub attachment: Attachment,
}

/// Transport for outbound messages
pub trait DeliveryDispatcher {
    /// Fails with [`crate::error::ReportError::Delivery`] on transport errors
    fn deliver(&self, message: &OutboundMessage) -> ReportResult<()>;
}

/// Subject line for a monthly report message
pub fn report_subject(period: ReportPeriod) -> String {
    format!("Monthly Expense Report - {}", period.label())
}

/// HTML body listing the report contents
pub fn report_html_body(period: ReportPeriod) -> String {
    format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2 style="color: #007bff;">Monthly Expense Report</h2>
    <p>Your financial summary for <strong>{label}</strong></p>
    <h3>Report Contents</h3>
    <ul>
      <li><strong>Monthly Summary:</strong> Overview of income, expenses, and net amount</li>
      <li><strong>Transaction Details:</strong> Complete list of all transactions</li>
      <li><strong>Category Breakdown:</strong> Spending analysis by category</li>
      <li><strong>Budget vs Actual:</strong> Comparison of planned vs actual spending</li>
    </ul>
    <p style="color: #666; font-size: 14px;">This report was generated automatically.</p>
  </div>
</body>
</html>
"#,
        label = period.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_and_body() {
        let period = ReportPeriod::new(3, 2024);
        assert_eq!(report_subject(period), "Monthly Expense Report - March 2024");

        let body = report_html_body(period);
        assert!(body.contains("<strong>March 2024</strong>"));
        assert!(body.contains("Budget vs Actual"));
    }
}
