//! Report aggregation.
//!
//! Collects findings into a pass/fail verdict with corpus-wide summary
//! statistics. Findings are stored in a deterministic order so that two runs
//! over an unchanged corpus serialize byte-identically.

use crate::model::{Finding, Severity};
use serde::Serialize;
use std::collections::BTreeMap;

/// The structured result of one audit run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub pages_audited: usize,
    pub findings: Vec<Finding>,
    /// True when no Error-severity findings exist. Warnings alone pass.
    pub pass: bool,
}

impl AuditReport {
    /// Builds a report, sorting findings deterministically.
    pub fn new(pages_audited: usize, mut findings: Vec<Finding>) -> Self {
        findings.sort_by(|a, b| {
            a.pages
                .cmp(&b.pages)
                .then_with(|| a.kind.label().cmp(b.kind.label()))
                .then_with(|| a.detail.cmp(&b.detail))
        });
        let pass = !findings.iter().any(Finding::is_error);
        Self {
            pages_audited,
            findings,
            pass,
        }
    }

    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// Finding counts grouped by kind label, alphabetical.
    pub fn counts_by_kind(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.kind.label()).or_insert(0) += 1;
        }
        counts
    }

    /// Findings of one kind, in report order.
    pub fn findings_of_kind(&self, label: &str) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.kind.label() == label)
            .collect()
    }

    /// Process exit status: 0 when the run passes, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.pass {
            0
        } else {
            1
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
