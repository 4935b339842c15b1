use crate::{
    domain::{requests::UiEvent, response::Frame},
    state::AppState,
    view::render,
};
use shared::{errors::ServiceError, model::PageId, utils::render_metrics};
use tracing::{error, warn};

pub struct EventHandler {
    state: AppState,
}

impl EventHandler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn current_frame(&self) -> Frame {
        let session = self.state.session.lock().await;
        render(&**session)
    }

    pub async fn handle_line(&self, line: &str) -> Frame {
        match serde_json::from_str::<UiEvent>(line) {
            Ok(event) => self.handle(event).await,
            Err(e) => {
                warn!("Rejected malformed event: {e}");
                Frame::error(format!("Invalid event: {e}"))
            }
        }
    }

    pub async fn handle(&self, event: UiEvent) -> Frame {
        if let UiEvent::Metrics = event {
            return self.metrics_frame().await;
        }

        let mut session = self.state.session.lock().await;

        let result: Result<(), ServiceError> = match event {
            UiEvent::Login { user } => {
                session.login(user);
                Ok(())
            }
            UiEvent::Logout => {
                session.logout();
                Ok(())
            }
            UiEvent::UpdateProfile { user } => session.update_profile(user).map(|_| ()),
            UiEvent::RequestPage { page } => match page.parse::<PageId>() {
                Ok(requested) => session.request_page(requested).map(|_| ()),
                Err(_) => session.request_unknown_page(&page).map(|_| ()),
            },
            UiEvent::Metrics => Ok(()),
        };

        match result {
            Ok(()) => render(&**session),
            Err(e) => {
                error!("❌ Event rejected: {e}");
                Frame::error(e.to_string())
            }
        }
    }

    async fn metrics_frame(&self) -> Frame {
        let registry = self.state.registry.lock().await;
        match render_metrics(&registry) {
            Ok(text) => Frame::Metrics { text },
            Err(e) => {
                error!("❌ Failed to encode metrics: {e}");
                Frame::error("Failed to encode metrics")
            }
        }
    }
}
