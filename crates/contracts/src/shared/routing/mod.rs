pub mod menu;
pub mod router;

pub use menu::{active_entries, MenuEntry};
pub use router::{resolve, FragmentConvention, Navigation, RouterConfig, ScrollReset, ViewSet};
