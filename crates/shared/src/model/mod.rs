mod navigation;
mod page;
mod role;
mod session;
mod user;

pub use self::navigation::{MenuSection, NavigationEntry};
pub use self::page::PageId;
pub use self::role::{Role, RoleSet};
pub use self::session::Session;
pub use self::user::User;
