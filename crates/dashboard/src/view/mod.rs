mod registry;
mod render;

pub use self::registry::{ViewDescriptor, view_for};
pub use self::render::render;
