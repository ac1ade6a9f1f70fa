//! Page chrome shared by every page: header menus and the mobile drawer.

pub mod drawer;
pub mod global_context;
pub mod header;
