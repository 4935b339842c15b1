use crate::model::{PageId, User};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Payload of the logged-in state.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub session_id: Uuid,
    pub user: User,
    pub current_page: PageId,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn start(user: User) -> Self {
        Session {
            session_id: Uuid::new_v4(),
            user,
            current_page: PageId::DEFAULT,
            started_at: Utc::now(),
        }
    }
}
