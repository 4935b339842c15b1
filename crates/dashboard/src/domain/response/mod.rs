mod frame;
mod menu;

pub use self::frame::{Frame, ShellFrame};
pub use self::menu::MenuItemResponse;
