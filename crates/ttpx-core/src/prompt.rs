//! The fixed instruction template sent to the completion service.
//!
//! The template asks the model to map a threat report onto MITRE ATT&CK
//! tactics, techniques, and sub-techniques in a plain-text list. The report
//! text is spliced in verbatim; nothing else varies between requests.

/// Render the extraction prompt for one report.
pub fn extraction_prompt(report: &str) -> String {
    format!(
        r#"You are an expert cybersecurity analyst. Your task is to extract MITRE ATT&CK Tactics, Techniques, and Sub-techniques (TTPs) from the provided cyber threat intelligence report.
**Instructions:**
1.  Carefully read the threat report below.
2.  Identify all mentions of actions that correspond to the MITRE ATT&CK framework.
3.  Format your output *exactly* as follows, using plain text:
    - Tactic: [Tactic Name] (ID: [Tactic ID])
      - Technique: [Technique Name] (ID: [Technique ID])
      - Sub-technique: [Sub-technique Name] (ID: [Sub-technique ID])  (if applicable)
4.  **Crucially, only include TTPs that are explicitly mentioned or strongly implied in the report text.** Do not infer or add any information that is not present.
5.  If no TTPs are found, state "No MITRE ATT&CK TTPs were identified in the report."
**Threat Report:**
---
{report}
---"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_report_text() {
        let prompt = extraction_prompt("APT29 used spear-phishing emails.");
        assert!(prompt.contains("APT29 used spear-phishing emails."));
    }

    #[test]
    fn test_prompt_carries_the_instruction_scaffold() {
        let prompt = extraction_prompt("some report");
        assert!(prompt.starts_with("You are an expert cybersecurity analyst."));
        assert!(prompt.contains("MITRE ATT&CK"));
        assert!(prompt.contains("Tactic: [Tactic Name] (ID: [Tactic ID])"));
        assert!(prompt.contains("No MITRE ATT&CK TTPs were identified in the report."));
    }

    #[test]
    fn test_report_is_fenced() {
        let prompt = extraction_prompt("fenced text");
        let fenced = prompt
            .split("---")
            .nth(1)
            .expect("report section should be fenced by --- markers");
        assert!(fenced.contains("fenced text"));
    }
}
