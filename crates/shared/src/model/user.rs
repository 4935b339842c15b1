use crate::model::Role;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, alias = "join_date", skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    #[serde(default, alias = "last_login", skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(id: &str, name: &str, email: &str, role: Role) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: None,
            company: None,
            title: None,
            country: None,
            phone: None,
            department: None,
            join_date: None,
            last_login: None,
        }
    }

    /// First letter of every word in the display name, e.g. "Sarah Chen" -> "SC".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_name() {
        let user = User::new("1", "Sarah Chen", "sarah@example.com", Role::Cfo);
        assert_eq!(user.initials(), "SC");

        let user = User::new("2", "  maria  de la cruz ", "m@example.com", Role::Ciso);
        assert_eq!(user.initials(), "mdlc");

        let user = User::new("3", "", "x@example.com", Role::Ciso);
        assert_eq!(user.initials(), "");
    }

    #[test]
    fn deserializes_minimal_profile() {
        let json = r#"{"id":"7","name":"Alex Kim","email":"alex@example.com","role":"Cloud Manager"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::CloudManager);
        assert!(user.company.is_none());
        assert!(user.join_date.is_none());
    }

    #[test]
    fn deserializes_dates() {
        let json = r#"{
            "id":"7","name":"Alex Kim","email":"alex@example.com","role":"CISO",
            "joinDate":"2022-03-15","lastLogin":"2024-01-20T09:30:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.join_date, NaiveDate::from_ymd_opt(2022, 3, 15));
        assert!(user.last_login.is_some());
    }

    #[test]
    fn dates_serialize_camel_case_and_accept_snake_case() {
        let json = r#"{
            "id":"7","name":"Alex Kim","email":"alex@example.com","role":"CISO",
            "join_date":"2022-03-15"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.join_date, NaiveDate::from_ymd_opt(2022, 3, 15));

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["joinDate"], "2022-03-15");
        assert!(value.get("join_date").is_none());
        assert!(value.get("lastLogin").is_none());
    }

    #[test]
    fn unknown_role_fails_to_deserialize() {
        let json = r#"{"id":"7","name":"Alex","email":"a@example.com","role":"Intern"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
