use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of the content view mounted in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    #[default]
    Dashboard,
    GovernanceSpend,
    CloudIntegration,
    Compliance,
    ComplianceSpend,
    Forecast,
    Chargeback,
    Notifications,
    Reports,
    RegulatoryImpact,
    AiOptimization,
    ComplianceFrameworks,
    SpendRoi,
    DocumentVault,
    Collaboration,
    Profile,
    Settings,
}

impl PageId {
    pub const DEFAULT: PageId = PageId::Dashboard;

    pub const ALL: [PageId; 17] = [
        PageId::Dashboard,
        PageId::GovernanceSpend,
        PageId::CloudIntegration,
        PageId::Compliance,
        PageId::ComplianceSpend,
        PageId::Forecast,
        PageId::Chargeback,
        PageId::Notifications,
        PageId::Reports,
        PageId::RegulatoryImpact,
        PageId::AiOptimization,
        PageId::ComplianceFrameworks,
        PageId::SpendRoi,
        PageId::DocumentVault,
        PageId::Collaboration,
        PageId::Profile,
        PageId::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::GovernanceSpend => "governance-spend",
            PageId::CloudIntegration => "cloud-integration",
            PageId::Compliance => "compliance",
            PageId::ComplianceSpend => "compliance-spend",
            PageId::Forecast => "forecast",
            PageId::Chargeback => "chargeback",
            PageId::Notifications => "notifications",
            PageId::Reports => "reports",
            PageId::RegulatoryImpact => "regulatory-impact",
            PageId::AiOptimization => "ai-optimization",
            PageId::ComplianceFrameworks => "compliance-frameworks",
            PageId::SpendRoi => "spend-roi",
            PageId::DocumentVault => "document-vault",
            PageId::Collaboration => "collaboration",
            PageId::Profile => "profile",
            PageId::Settings => "settings",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| ServiceError::UnknownPage(s.to_string()))
    }
}
