use serde::Serialize;
use shared::model::PageId;

/// Content component mounted for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewDescriptor {
    pub component: &'static str,
    pub title: &'static str,
}

const fn view(component: &'static str, title: &'static str) -> ViewDescriptor {
    ViewDescriptor { component, title }
}

pub fn view_for(page: PageId) -> ViewDescriptor {
    match page {
        PageId::Dashboard => view("Dashboard", "Dashboard"),
        PageId::GovernanceSpend => view("GovernanceSpendDashboard", "Governance Spend"),
        PageId::CloudIntegration => view("CloudIntegration", "Cloud Integration"),
        PageId::Compliance => view("ComplianceDashboard", "Compliance Dashboard"),
        PageId::ComplianceSpend => view("ComplianceSpendCenter", "Compliance Spend Center"),
        PageId::Forecast => view("AIForecast", "AI Forecast"),
        PageId::Chargeback => view("ChargebackSummary", "Chargeback"),
        PageId::Notifications => view("NotificationSettings", "Notifications"),
        PageId::Reports => view("ReportsPage", "Reports"),
        PageId::RegulatoryImpact => view("RegulatoryImpact", "Regulatory Impact"),
        PageId::AiOptimization => view("AIOptimization", "AI Optimization"),
        PageId::ComplianceFrameworks => view("ComplianceFrameworks", "Compliance Frameworks"),
        PageId::SpendRoi => view("SpendROIAnalytics", "Spend & ROI Analytics"),
        PageId::DocumentVault => view("DocumentVault", "Document Vault"),
        PageId::Collaboration => view("CollaborationHub", "Collaboration Hub"),
        PageId::Profile => view("ProfilePage", "Profile"),
        PageId::Settings => view("SettingsPage", "Settings"),
    }
}
