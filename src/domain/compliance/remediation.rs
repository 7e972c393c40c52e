//! Remediation advice per policy id.

/// Advice for ids without a specific entry.
pub const GENERIC_REMEDIATION: &str = "Review policy compliance procedure.";

const REMEDIATIONS: &[(&str, &str)] = &[
    (
        "BANK_SEC_3.2.1",
        "Never request OTP verbally. Direct customer to secure channel.",
    ),
    (
        "BANK_SEC_3.2.2",
        "Use tokenized payment processing. Never collect raw CVV.",
    ),
    (
        "BANK_KYC_4.1.1",
        "Complete all KYC steps before account activation.",
    ),
    (
        "BANK_DISC_5.1.1",
        "Always provide mandatory disclaimer before financial discussion.",
    ),
    (
        "BANK_DATA_6.1.1",
        "Use secure SMS/email for sensitive data. Never verbally confirm.",
    ),
    (
        "BANK_LOAN_7.1.1",
        "Only state that approval is subject to bank assessment.",
    ),
    (
        "TELECOM_ROAM_1.1.1",
        "Provide written roaming cost estimate before activation.",
    ),
    (
        "TELECOM_SLA_2.1.1",
        "Describe SLA as \"best effort\" subject to network conditions.",
    ),
];

/// Remediation for a policy id, falling back to the generic advice.
pub fn remediation_for(policy_id: &str) -> &'static str {
    REMEDIATIONS
        .iter()
        .find(|(id, _)| *id == policy_id)
        .map(|(_, advice)| *advice)
        .unwrap_or(GENERIC_REMEDIATION)
}

/// Policy ids with specific advice.
pub fn mapped_policy_ids() -> impl Iterator<Item = &'static str> {
    REMEDIATIONS.iter().map(|(id, _)| *id)
}
