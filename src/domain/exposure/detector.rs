//! Sensitive Data Detector - Scans the full conversation for critical data.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::SensitiveDataCatalog;
use crate::domain::foundation::{fold_case, Severity};

/// Exposure-level verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExposureRisk {
    #[default]
    Safe,
    High,
    Critical,
}

impl ExposureRisk {
    /// Critical at two or more exposures, high at one.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => ExposureRisk::Safe,
            1 => ExposureRisk::High,
            _ => ExposureRisk::Critical,
        }
    }
}

/// One pattern match of a sensitive data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exposure {
    pub data_type: String,
    pub description: String,
    pub severity: Severity,
    pub pattern_matched: String,
    pub remediation: String,
}

/// Exposure output for one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExposureReport {
    /// Distinct exposed types, first-seen order.
    pub exposed_data_types: Vec<String>,
    pub exposures: Vec<Exposure>,
    pub risk_level: ExposureRisk,
    pub total_exposures: usize,
}

/// Detects sensitive-data exposure.
pub struct SensitiveDataDetector;

impl SensitiveDataDetector {
    /// Scans `conversation` for every pattern of every type.
    ///
    /// Each matching pattern is one exposure, so a type with two matching
    /// patterns counts twice. An empty catalog reports no exposures.
    pub fn detect(catalog: &SensitiveDataCatalog, conversation: &str) -> ExposureReport {
        let folded = fold_case(conversation);
        let mut report = ExposureReport::default();

        for entry in catalog.entries() {
            let data_type = &entry.data_type;
            for pattern in &entry.patterns {
                if !pattern.is_match(conversation, &folded) {
                    continue;
                }
                if !report.exposed_data_types.contains(&data_type.data_type) {
                    report.exposed_data_types.push(data_type.data_type.clone());
                }
                report.exposures.push(Exposure {
                    data_type: data_type.data_type.clone(),
                    description: data_type.description.clone(),
                    severity: data_type.severity,
                    pattern_matched: pattern.as_str().to_string(),
                    remediation: format!(
                        "Review {} handling procedures and re-train agent.",
                        data_type.data_type
                    ),
                });
            }
        }

        report.total_exposures = report.exposures.len();
        report.risk_level = ExposureRisk::from_count(report.total_exposures);

        debug!(
            exposures = report.total_exposures,
            types = report.exposed_data_types.len(),
            "Sensitive data scan complete"
        );

        report
    }
}
