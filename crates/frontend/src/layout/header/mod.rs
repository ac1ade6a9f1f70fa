//! Desktop navigation bar behaviour: dropdown menus and active-route marks.

pub mod dropdowns;
pub mod menu;

pub use dropdowns::install_dropdowns;
pub use menu::apply_highlight;
