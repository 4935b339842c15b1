pub mod domain;
pub mod handler;
pub mod state;
pub mod view;
