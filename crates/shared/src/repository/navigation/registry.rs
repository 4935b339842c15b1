use crate::model::{NavigationEntry, PageId};

use crate::model::Role::{
    Cfo, Ciso, CloudManager, ComplianceOfficer, FinOpsAnalyst, FinanceManager, GovernanceLead,
};

/// Sidebar menu in display order.
pub const SIDEBAR_MENU: [NavigationEntry; 15] = [
    NavigationEntry::sidebar(
        PageId::Dashboard,
        "Dashboard",
        "layout-dashboard",
        &[
            Cfo,
            GovernanceLead,
            FinOpsAnalyst,
            FinanceManager,
            CloudManager,
            Ciso,
            ComplianceOfficer,
        ],
    ),
    NavigationEntry::sidebar(
        PageId::GovernanceSpend,
        "Governance Spend",
        "building",
        &[Cfo, GovernanceLead, FinanceManager, FinOpsAnalyst],
    ),
    NavigationEntry::sidebar(
        PageId::ComplianceSpend,
        "Compliance Spend Center",
        "shield",
        &[Cfo, GovernanceLead, ComplianceOfficer, FinanceManager],
    ),
    NavigationEntry::sidebar(
        PageId::SpendRoi,
        "Spend & ROI Analytics",
        "bar-chart-3",
        &[Cfo, GovernanceLead, FinOpsAnalyst, FinanceManager],
    ),
    NavigationEntry::sidebar(
        PageId::DocumentVault,
        "Document Vault",
        "folder-open",
        &[Cfo, GovernanceLead, ComplianceOfficer, FinanceManager],
    ),
    NavigationEntry::sidebar(
        PageId::Collaboration,
        "Collaboration Hub",
        "message-square",
        &[
            Cfo,
            GovernanceLead,
            FinOpsAnalyst,
            FinanceManager,
            CloudManager,
            Ciso,
            ComplianceOfficer,
        ],
    ),
    NavigationEntry::sidebar(
        PageId::CloudIntegration,
        "Cloud Integration",
        "cloud",
        &[CloudManager, FinOpsAnalyst, GovernanceLead],
    ),
    NavigationEntry::sidebar(
        PageId::Compliance,
        "Compliance Dashboard",
        "shield",
        &[
            Ciso,
            Cfo,
            FinOpsAnalyst,
            CloudManager,
            ComplianceOfficer,
            GovernanceLead,
        ],
    ),
    NavigationEntry::sidebar(
        PageId::ComplianceFrameworks,
        "Compliance Frameworks",
        "book-open",
        &[
            Cfo,
            FinOpsAnalyst,
            CloudManager,
            Ciso,
            ComplianceOfficer,
            GovernanceLead,
        ],
    ),
    NavigationEntry::sidebar(
        PageId::Forecast,
        "AI Forecast",
        "trending-up",
        &[Cfo, FinOpsAnalyst, GovernanceLead, FinanceManager],
    ),
    NavigationEntry::sidebar(
        PageId::RegulatoryImpact,
        "Regulatory Impact",
        "scale",
        &[Cfo, ComplianceOfficer, Ciso, GovernanceLead],
    ),
    NavigationEntry::sidebar(
        PageId::AiOptimization,
        "AI Optimization",
        "cpu",
        &[FinOpsAnalyst, CloudManager, GovernanceLead],
    ),
    NavigationEntry::sidebar(
        PageId::Chargeback,
        "Chargeback",
        "receipt",
        &[Cfo, FinOpsAnalyst, FinanceManager],
    ),
    NavigationEntry::sidebar(
        PageId::Notifications,
        "Notifications",
        "bell",
        &[
            Cfo,
            FinOpsAnalyst,
            CloudManager,
            Ciso,
            ComplianceOfficer,
            GovernanceLead,
            FinanceManager,
        ],
    ),
    NavigationEntry::sidebar(
        PageId::Reports,
        "Reports",
        "file-text",
        &[
            Cfo,
            Ciso,
            FinOpsAnalyst,
            ComplianceOfficer,
            GovernanceLead,
            FinanceManager,
        ],
    ),
];

/// Header account menu; open to every role.
pub const ACCOUNT_MENU: [NavigationEntry; 2] = [
    NavigationEntry::account(PageId::Profile, "Profile", "user"),
    NavigationEntry::account(PageId::Settings, "Settings", "settings"),
];
