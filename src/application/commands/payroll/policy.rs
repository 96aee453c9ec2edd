use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Whether rows created by a payroll run get audit entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayrollAuditPolicy {
    /// Payroll rows are written without audit entries.
    #[default]
    Skip,
    /// One INSERT entry per created transaction.
    PerTransaction,
}

impl PayrollAuditPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayrollAuditPolicy::Skip => "skip",
            PayrollAuditPolicy::PerTransaction => "per-transaction",
        }
    }
}

impl fmt::Display for PayrollAuditPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayrollAuditPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" | "none" => Ok(PayrollAuditPolicy::Skip),
            "per-transaction" | "per_transaction" => Ok(PayrollAuditPolicy::PerTransaction),
            other => Err(format!(
                "unknown payroll audit policy '{other}' (expected 'skip' or 'per-transaction')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_spellings() {
        assert_eq!(
            "per_transaction".parse::<PayrollAuditPolicy>().unwrap(),
            PayrollAuditPolicy::PerTransaction
        );
        assert_eq!(" SKIP ".parse::<PayrollAuditPolicy>().unwrap(), PayrollAuditPolicy::Skip);
        assert!("always".parse::<PayrollAuditPolicy>().is_err());
    }
}
