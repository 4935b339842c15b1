mod navigation;
mod session;

pub use self::navigation::{NavigationService, change_page, visible_entries};
pub use self::session::{SessionService, UNKNOWN_PAGE_LABEL};
