//! Report text handling.

use crate::error::{TtpxError, TtpxResult};

/// Demonstration report preloaded into the input form.
pub const SAMPLE_REPORT: &str = r#"**Threat Intelligence Report: FIN7 Operations**
**Date:** 2024-10-26
**Executive Summary:**
This report details the recent activities of the financially motivated threat group FIN7. The group continues to target retail and hospitality sectors. Our analysis indicates a multi-stage attack methodology, beginning with a spearphishing campaign.
**Initial Access:**
FIN7 initiates its campaigns with carefully crafted spearphishing emails containing malicious attachments. These attachments are often Word documents with macros (T1566.001) that, when enabled, execute a PowerShell script to download the initial payload.
**Execution & Persistence:**
The downloaded payload is a PowerShell script (T1059.001) that establishes persistence by creating a scheduled task (T1543.003) set to run periodically. This ensures the malware survives system reboots."#;

/// Trim a submitted report and reject empty submissions.
///
/// An empty report never results in an outbound call.
pub fn validate(text: &str) -> TtpxResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TtpxError::EmptyReport);
    }
    Ok(trimmed)
}
