mod navigation;

pub use self::navigation::{
    ACCOUNT_MENU, NavigationRepository, RegistryDefect, SIDEBAR_MENU, validate_registry,
};
