use crate::{
    errors::ServiceError,
    model::{NavigationEntry, PageId, Session, User},
};

pub type DynSessionService = Box<dyn SessionServiceTrait + Send + Sync>;

pub trait SessionServiceTrait {
    fn login(&mut self, candidate: User) -> &Session;
    fn logout(&mut self) -> bool;
    fn update_profile(&mut self, patch: User) -> Result<&User, ServiceError>;
    fn request_page(&mut self, requested: PageId) -> Result<PageId, ServiceError>;
    /// A page name with no `PageId`, e.g. a stale deep link. Lands on the
    /// default page and is counted once under a fixed label.
    fn request_unknown_page(&mut self, raw: &str) -> Result<PageId, ServiceError>;

    fn session(&self) -> Option<&Session>;
    fn current_user(&self) -> Option<&User>;
    fn current_page(&self) -> PageId;
    fn sidebar_menu(&self) -> Vec<NavigationEntry>;
    fn account_menu(&self) -> Vec<NavigationEntry>;
}
