use crate::{
    domain::response::{Frame, MenuItemResponse, ShellFrame},
    view::view_for,
};
use shared::{abstract_trait::SessionServiceTrait, model::NavigationEntry};

/// Login screen when nobody is signed in, otherwise the shell for the active user.
pub fn render(session: &dyn SessionServiceTrait) -> Frame {
    let Some(active) = session.session() else {
        return Frame::Login;
    };

    let current_page = active.current_page;
    let menu = |entries: Vec<NavigationEntry>| {
        entries
            .iter()
            .map(|entry| MenuItemResponse::from_entry(entry, current_page))
            .collect::<Vec<_>>()
    };

    Frame::Shell(Box::new(ShellFrame {
        session_id: active.session_id,
        user: active.user.clone(),
        initials: active.user.initials(),
        current_page,
        sidebar: menu(session.sidebar_menu()),
        account_menu: menu(session.account_menu()),
        view: view_for(current_page),
    }))
}
