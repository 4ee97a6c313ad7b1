use serde::Deserialize;

/// One section of the backend's report (SOA, SPF, DMARC, ...).
///
/// The backend payload is treated as loosely structured: every field falls
/// back to its default when absent so a partial report still renders.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub records: Vec<String>,
    /// Prose advisories; may cite RFCs and drafts.
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Prose summary of the check; may cite RFCs and drafts.
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The backend's full posture report for one domain.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DomainReport {
    #[serde(default)]
    pub soa: CheckOutcome,
    #[serde(default)]
    pub spf: CheckOutcome,
    #[serde(default)]
    pub dmarc: CheckOutcome,
    #[serde(default)]
    pub mta_sts: CheckOutcome,
    #[serde(default)]
    pub bimi: CheckOutcome,
    /// Present only when the backend was asked to probe SMTP TLS.
    #[serde(default)]
    pub smtp_tls: Option<CheckOutcome>,
}

impl DomainReport {
    /// True when the SOA lookup reports that the domain does not exist.
    pub fn domain_does_not_exist(&self) -> bool {
        self.soa
            .error
            .as_ref()
            .map_or(false, |error| error.to_lowercase().contains("does not exist"))
    }

    /// The report sections in display order, labeled for the page.
    pub fn sections(&self) -> Vec<(&'static str, &CheckOutcome)> {
        let mut sections = vec![
            ("SOA", &self.soa),
            ("SPF", &self.spf),
            ("DMARC", &self.dmarc),
            ("MTA-STS", &self.mta_sts),
            ("BIMI", &self.bimi),
        ];
        if let Some(smtp_tls) = &self.smtp_tls {
            sections.push(("SMTP TLS", smtp_tls));
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_report() {
        let report: DomainReport = serde_json::from_str(
            r#"{
                "soa": {"valid": true, "records": ["ns1.example.com. hostmaster.example.com."]},
                "spf": {"valid": true, "records": ["v=spf1 -all"]},
                "dmarc": {
                    "valid": false,
                    "warnings": ["Policy is not quarantine or reject, see RFC 7489 § 6.3"],
                    "explanation": "DMARC is specified in RFC 7489."
                },
                "mta_sts": {"valid": true},
                "bimi": {"error": "No BIMI record found"},
                "smtp_tls": {"valid": true}
            }"#,
        )
        .unwrap();

        assert!(report.soa.valid);
        assert_eq!(report.spf.records, vec!["v=spf1 -all"]);
        assert_eq!(report.dmarc.warnings.len(), 1);
        assert_eq!(report.bimi.error.as_deref(), Some("No BIMI record found"));
        assert_eq!(report.sections().len(), 6);
        assert!(!report.domain_does_not_exist());
    }

    #[test]
    fn test_partial_payload_tolerated() {
        let report: DomainReport = serde_json::from_str(r#"{"soa": {}}"#).unwrap();
        assert!(!report.soa.valid);
        assert!(report.smtp_tls.is_none());
        assert_eq!(report.sections().len(), 5);
    }

    #[test]
    fn test_domain_does_not_exist_detection() {
        let report: DomainReport = serde_json::from_str(
            r#"{"soa": {"error": "The domain Does Not Exist"}}"#,
        )
        .unwrap();
        assert!(report.domain_does_not_exist());

        let report: DomainReport =
            serde_json::from_str(r#"{"soa": {"error": "SERVFAIL"}}"#).unwrap();
        assert!(!report.domain_does_not_exist());
    }
}
