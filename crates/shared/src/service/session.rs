use crate::{
    abstract_trait::{DynNavigationService, SessionServiceTrait},
    errors::ServiceError,
    model::{NavigationEntry, PageId, Session, User},
    utils::{Metrics, Operation, Outcome, Status},
};
use tracing::{error, info, warn};

/// Metric label for page names that do not parse.
pub const UNKNOWN_PAGE_LABEL: &str = "unknown";

/// Owner of the active user and current page.
///
/// `login` is a stub: whatever profile the login form submits becomes the
/// active user. Nothing here authenticates anyone.
pub struct SessionService {
    /// `None` while logged out.
    state: Option<Session>,
    navigation: DynNavigationService,
    metrics: Metrics,
}

impl SessionService {
    pub fn new(navigation: DynNavigationService, metrics: Metrics) -> Self {
        Self {
            state: None,
            navigation,
            metrics,
        }
    }

    fn active_mut(&mut self, operation: Operation) -> Result<&mut Session, ServiceError> {
        match &mut self.state {
            Some(session) => Ok(session),
            None => {
                error!("❌ {:?} rejected: no active session", operation);
                self.metrics.record(operation, Status::Error);
                Err(ServiceError::NoActiveSession)
            }
        }
    }
}

impl SessionServiceTrait for SessionService {
    fn login(&mut self, candidate: User) -> &Session {
        if let Some(previous) = &self.state {
            warn!(
                "Replacing active session {} for user {}",
                previous.session_id, previous.user.id
            );
        }

        let session = Session::start(candidate);
        info!(
            "🔐 Login user={} role={} session={}",
            session.user.id, session.user.role, session.session_id
        );
        self.metrics.record(Operation::Login, Status::Success);

        self.state.insert(session)
    }

    fn logout(&mut self) -> bool {
        match self.state.take() {
            Some(session) => {
                info!(
                    "👋 Logout user={} session={}",
                    session.user.id, session.session_id
                );
                self.metrics.record(Operation::Logout, Status::Success);
                true
            }
            None => false,
        }
    }

    fn update_profile(&mut self, patch: User) -> Result<&User, ServiceError> {
        let navigation = self.navigation.clone();
        let session = self.active_mut(Operation::UpdateProfile)?;

        if patch.role != session.user.role
            && !navigation.is_permitted(session.current_page, patch.role)
        {
            warn!(
                "Role changed {} -> {}, page {} no longer permitted; falling back to {}",
                session.user.role,
                patch.role,
                session.current_page,
                PageId::DEFAULT
            );
            session.current_page = PageId::DEFAULT;
        }

        info!("✏️ Profile updated for user={}", patch.id);
        session.user = patch;
        self.metrics.record(Operation::UpdateProfile, Status::Success);

        self.current_user().ok_or(ServiceError::NoActiveSession)
    }

    fn request_page(&mut self, requested: PageId) -> Result<PageId, ServiceError> {
        let navigation = self.navigation.clone();
        let metrics = self.metrics.clone();
        let session = self.active_mut(Operation::RequestPage)?;

        let resolved = navigation.change_page(requested, session.user.role);
        if navigation.is_permitted(requested, session.user.role) {
            metrics.record_page(requested.as_str(), Outcome::Granted);
            info!("📄 Page {} -> {}", session.current_page, resolved);
        } else {
            metrics.record_page(requested.as_str(), Outcome::Fallback);
            warn!(
                "Page {} not available to {}; falling back to {}",
                requested, session.user.role, resolved
            );
        }

        session.current_page = resolved;
        metrics.record(Operation::RequestPage, Status::Success);
        Ok(resolved)
    }

    fn request_unknown_page(&mut self, raw: &str) -> Result<PageId, ServiceError> {
        let metrics = self.metrics.clone();
        let session = self.active_mut(Operation::RequestPage)?;

        warn!(
            "Unknown page {:?}; treating as stale link to {}",
            raw,
            PageId::DEFAULT
        );
        metrics.record_page(UNKNOWN_PAGE_LABEL, Outcome::Fallback);

        session.current_page = PageId::DEFAULT;
        metrics.record(Operation::RequestPage, Status::Success);
        Ok(PageId::DEFAULT)
    }

    fn session(&self) -> Option<&Session> {
        self.state.as_ref()
    }

    fn current_user(&self) -> Option<&User> {
        self.session().map(|s| &s.user)
    }

    fn current_page(&self) -> PageId {
        self.session()
            .map(|s| s.current_page)
            .unwrap_or(PageId::DEFAULT)
    }

    fn sidebar_menu(&self) -> Vec<NavigationEntry> {
        self.current_user()
            .map(|user| self.navigation.sidebar_entries(user.role))
            .unwrap_or_default()
    }

    fn account_menu(&self) -> Vec<NavigationEntry> {
        self.current_user()
            .map(|user| self.navigation.account_entries(user.role))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::Role,
        repository::NavigationRepository,
        service::NavigationService,
        utils::PageLabels,
    };
    use std::sync::Arc;

    fn service() -> SessionService {
        let navigation = Arc::new(NavigationService::new(Arc::new(NavigationRepository::new())))
            as DynNavigationService;
        SessionService::new(navigation, Metrics::new())
    }

    fn page_count(svc: &SessionService, page: &str, outcome: Outcome) -> u64 {
        svc.metrics
            .page_requests
            .get_or_create(&PageLabels {
                page: page.into(),
                outcome,
            })
            .get()
    }

    fn user(role: Role) -> User {
        User::new("u-1", "Dana Whitfield", "dana@example.com", role)
    }

    #[test]
    fn starts_logged_out() {
        let svc = service();
        assert!(svc.session().is_none());
        assert!(svc.current_user().is_none());
        assert_eq!(svc.current_page(), PageId::Dashboard);
        assert!(svc.sidebar_menu().is_empty());
        assert!(svc.account_menu().is_empty());
    }

    #[test]
    fn login_lands_on_dashboard() {
        let mut svc = service();
        let session = svc.login(user(Role::Cfo));
        assert_eq!(session.current_page, PageId::Dashboard);
        assert_eq!(session.user.role, Role::Cfo);
        assert_eq!(svc.current_user().map(|u| u.name.as_str()), Some("Dana Whitfield"));
    }

    #[test]
    fn ciso_scenario() {
        let mut svc = service();
        svc.login(user(Role::Ciso));

        let page = svc.request_page(PageId::RegulatoryImpact).unwrap();
        assert_eq!(page, PageId::RegulatoryImpact);
        assert_eq!(svc.current_page(), PageId::RegulatoryImpact);

        assert!(svc.logout());
        assert_eq!(svc.current_page(), PageId::Dashboard);
        assert!(svc.current_user().is_none());
    }

    #[test]
    fn forbidden_request_falls_back() {
        let mut svc = service();
        svc.login(user(Role::CloudManager));
        svc.request_page(PageId::CloudIntegration).unwrap();

        assert_eq!(svc.request_page(PageId::Reports).unwrap(), PageId::Dashboard);
        assert_eq!(svc.current_page(), PageId::Dashboard);
    }

    #[test]
    fn account_pages_are_reachable() {
        let mut svc = service();
        svc.login(user(Role::FinanceManager));
        assert_eq!(svc.request_page(PageId::Profile).unwrap(), PageId::Profile);
        assert_eq!(svc.account_menu().len(), 2);
    }

    #[test]
    fn logout_resets_regardless_of_page() {
        let mut svc = service();
        svc.login(user(Role::GovernanceLead));
        svc.request_page(PageId::SpendRoi).unwrap();
        svc.logout();
        assert_eq!(svc.current_page(), PageId::Dashboard);

        // next login starts from the default page again
        svc.login(user(Role::GovernanceLead));
        assert_eq!(svc.current_page(), PageId::Dashboard);
    }

    #[test]
    fn logout_when_logged_out_is_noop() {
        let mut svc = service();
        assert!(!svc.logout());
        assert!(svc.session().is_none());
    }

    #[test]
    fn relogin_replaces_session() {
        let mut svc = service();
        let first = svc.login(user(Role::Cfo)).session_id;
        svc.request_page(PageId::Chargeback).unwrap();

        let second = svc.login(user(Role::Ciso)).session_id;
        assert_ne!(first, second);
        assert_eq!(svc.current_page(), PageId::Dashboard);
        assert_eq!(svc.current_user().map(|u| u.role), Some(Role::Ciso));
    }

    #[test]
    fn update_profile_keeps_page() {
        let mut svc = service();
        svc.login(user(Role::FinOpsAnalyst));
        svc.request_page(PageId::Forecast).unwrap();

        let mut patch = user(Role::FinOpsAnalyst);
        patch.title = Some("Lead Analyst".into());
        patch.phone = Some("+1 555 0100".into());

        let updated = svc.update_profile(patch.clone()).unwrap();
        assert_eq!(updated, &patch);
        assert_eq!(svc.current_page(), PageId::Forecast);
    }

    #[test]
    fn update_profile_keeps_session_id() {
        let mut svc = service();
        let id = svc.login(user(Role::Cfo)).session_id;
        svc.update_profile(user(Role::Cfo)).unwrap();
        assert_eq!(svc.session().map(|s| s.session_id), Some(id));
    }

    #[test]
    fn role_switch_renormalizes_page() {
        let mut svc = service();
        svc.login(user(Role::Cfo));
        svc.request_page(PageId::Chargeback).unwrap();

        svc.update_profile(user(Role::Ciso)).unwrap();
        assert_eq!(svc.current_page(), PageId::Dashboard);
        assert!(svc.sidebar_menu().iter().all(|e| e.permits(Role::Ciso)));
    }

    #[test]
    fn role_switch_keeps_page_still_permitted() {
        let mut svc = service();
        svc.login(user(Role::Cfo));
        svc.request_page(PageId::Reports).unwrap();

        svc.update_profile(user(Role::Ciso)).unwrap();
        assert_eq!(svc.current_page(), PageId::Reports);
    }

    #[test]
    fn update_profile_requires_session() {
        let mut svc = service();
        let err = svc.update_profile(user(Role::Cfo)).unwrap_err();
        assert!(matches!(err, ServiceError::NoActiveSession));
        assert!(svc.session().is_none());
    }

    #[test]
    fn request_page_requires_session() {
        let mut svc = service();
        assert!(matches!(
            svc.request_page(PageId::Reports),
            Err(ServiceError::NoActiveSession)
        ));
        assert_eq!(svc.current_page(), PageId::Dashboard);
    }

    #[test]
    fn fallbacks_are_counted() {
        let mut svc = service();
        svc.login(user(Role::CloudManager));
        svc.request_page(PageId::Reports).unwrap();

        assert_eq!(page_count(&svc, "reports", Outcome::Fallback), 1);
        assert_eq!(page_count(&svc, "reports", Outcome::Granted), 0);
    }

    #[test]
    fn unknown_pages_share_one_series() {
        let mut svc = service();
        svc.login(user(Role::Cfo));
        svc.request_page(PageId::Chargeback).unwrap();

        for i in 0..50 {
            let page = svc.request_unknown_page(&format!("junk-{i}")).unwrap();
            assert_eq!(page, PageId::Dashboard);
        }
        assert_eq!(svc.current_page(), PageId::Dashboard);
        assert_eq!(page_count(&svc, UNKNOWN_PAGE_LABEL, Outcome::Fallback), 50);
        assert_eq!(page_count(&svc, "dashboard", Outcome::Granted), 0);
    }

    #[test]
    fn unknown_page_requires_session() {
        let mut svc = service();
        assert!(matches!(
            svc.request_unknown_page("billing"),
            Err(ServiceError::NoActiveSession)
        ));
        assert_eq!(page_count(&svc, UNKNOWN_PAGE_LABEL, Outcome::Fallback), 0);
    }

    #[test]
    fn default_page_without_entry_counts_as_fallback() {
        let repo = NavigationRepository::with_entries(
            vec![NavigationEntry::sidebar(
                PageId::Reports,
                "Reports",
                "file-text",
                &[Role::Cfo],
            )],
            vec![],
        );
        let navigation =
            Arc::new(NavigationService::new(Arc::new(repo))) as DynNavigationService;
        let mut svc = SessionService::new(navigation, Metrics::new());
        svc.login(user(Role::Cfo));

        assert_eq!(svc.request_page(PageId::Dashboard).unwrap(), PageId::Dashboard);
        assert_eq!(page_count(&svc, "dashboard", Outcome::Fallback), 1);
        assert_eq!(page_count(&svc, "dashboard", Outcome::Granted), 0);

        svc.request_page(PageId::Reports).unwrap();
        assert_eq!(page_count(&svc, "reports", Outcome::Granted), 1);
    }
}
