pub mod dropdown;

pub use dropdown::DropdownMenu;
