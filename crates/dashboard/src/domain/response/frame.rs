use crate::{domain::response::MenuItemResponse, view::ViewDescriptor};
use serde::Serialize;
use shared::{
    errors::ErrorResponse,
    model::{PageId, User},
};
use uuid::Uuid;

/// What the view layer should show after an event has been applied.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Frame {
    Login,
    Shell(Box<ShellFrame>),
    Metrics { text: String },
    Error(ErrorResponse),
}

#[derive(Debug, Clone, Serialize)]
pub struct ShellFrame {
    pub session_id: Uuid,
    pub user: User,
    pub initials: String,
    pub current_page: PageId,
    pub sidebar: Vec<MenuItemResponse>,
    pub account_menu: Vec<MenuItemResponse>,
    pub view: ViewDescriptor,
}

impl Frame {
    pub fn error(message: impl Into<String>) -> Self {
        Frame::Error(ErrorResponse {
            status: "error".to_string(),
            message: message.into(),
        })
    }
}
