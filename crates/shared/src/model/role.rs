use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Job-function tag that decides which pages a user may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "CFO")]
    Cfo,
    #[serde(rename = "FinOps Analyst")]
    FinOpsAnalyst,
    #[serde(rename = "Cloud Manager")]
    CloudManager,
    #[serde(rename = "CISO")]
    Ciso,
    #[serde(rename = "Compliance Officer")]
    ComplianceOfficer,
    #[serde(rename = "Finance Manager")]
    FinanceManager,
    #[serde(rename = "Governance Lead")]
    GovernanceLead,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Cfo,
        Role::FinOpsAnalyst,
        Role::CloudManager,
        Role::Ciso,
        Role::ComplianceOfficer,
        Role::FinanceManager,
        Role::GovernanceLead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Cfo => "CFO",
            Role::FinOpsAnalyst => "FinOps Analyst",
            Role::CloudManager => "Cloud Manager",
            Role::Ciso => "CISO",
            Role::ComplianceOfficer => "Compliance Officer",
            Role::FinanceManager => "Finance Manager",
            Role::GovernanceLead => "Governance Lead",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ServiceError::UnknownRole(s.to_string()))
    }
}

/// Bitmask of roles, one bit per [`Role`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const EMPTY: RoleSet = RoleSet(0);

    pub const ALL: RoleSet = RoleSet::of(&Role::ALL);

    pub const fn of(roles: &[Role]) -> Self {
        let mut mask = 0u8;
        let mut i = 0;
        while i < roles.len() {
            mask |= roles[i].bit();
            i += 1;
        }
        RoleSet(mask)
    }

    pub const fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|role| self.contains(*role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        RoleSet(iter.into_iter().fold(0, |mask, role| mask | role.bit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().ok(), Some(role));
        }
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "Intern".parse::<Role>().unwrap_err();
        assert!(matches!(err, ServiceError::UnknownRole(name) if name == "Intern"));
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&Role::FinOpsAnalyst).unwrap();
        assert_eq!(json, "\"FinOps Analyst\"");

        let parsed: Role = serde_json::from_str("\"Governance Lead\"").unwrap();
        assert_eq!(parsed, Role::GovernanceLead);

        assert!(serde_json::from_str::<Role>("\"cfo\"").is_err());
    }

    #[test]
    fn role_set_membership() {
        let set = RoleSet::of(&[Role::Cfo, Role::Ciso]);
        assert!(set.contains(Role::Cfo));
        assert!(set.contains(Role::Ciso));
        assert!(!set.contains(Role::CloudManager));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Role::Cfo, Role::Ciso]);
    }

    #[test]
    fn all_and_empty() {
        assert!(RoleSet::EMPTY.is_empty());
        for role in Role::ALL {
            assert!(RoleSet::ALL.contains(role));
            assert!(!RoleSet::EMPTY.contains(role));
        }
        assert_eq!(Role::ALL.into_iter().collect::<RoleSet>(), RoleSet::ALL);
    }
}
