use contracts::domain::gallery::Lightbox;
use contracts::domain::navigation::DropdownMenu;
use leptos::prelude::*;

/// UI state shared between otherwise independent page features.
///
/// The routers close the drawer, so the drawer's open flag lives here rather
/// than inside the drawer module.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub drawer_open: RwSignal<bool>,
    pub dropdowns: RwSignal<DropdownMenu>,
    pub lightbox: RwSignal<Option<Lightbox>>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self {
            drawer_open: RwSignal::new(false),
            dropdowns: RwSignal::new(DropdownMenu::default()),
            lightbox: RwSignal::new(None),
        }
    }

    pub fn open_drawer(&self) {
        self.drawer_open.set(true);
    }

    pub fn close_drawer(&self) {
        self.drawer_open.set(false);
    }

    pub fn close_dropdowns(&self) {
        self.dropdowns.update(|menu| menu.close_all());
    }

    pub fn lightbox_is_open(&self) -> bool {
        self.lightbox.with_untracked(|lightbox| lightbox.is_some())
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new()
    }
}
