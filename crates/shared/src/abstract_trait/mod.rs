mod navigation;
mod session;

pub use self::navigation::{
    DynNavigationRepository, DynNavigationService, NavigationRepositoryTrait,
    NavigationServiceTrait,
};
pub use self::session::{DynSessionService, SessionServiceTrait};
