/// Open state of the header's dropdown menus; at most one is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownMenu {
    open: Option<usize>,
}

impl DropdownMenu {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Click on dropdown `index`: close everything, then open it unless it
    /// was the one already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut menu = DropdownMenu::default();
        menu.toggle(1);
        assert!(menu.is_open(1));
        menu.toggle(1);
        assert_eq!(menu.open_index(), None);
    }

    #[test]
    fn test_opening_another_closes_previous() {
        let mut menu = DropdownMenu::default();
        menu.toggle(0);
        menu.toggle(2);
        assert!(!menu.is_open(0));
        assert!(menu.is_open(2));
    }

    #[test]
    fn test_close_all() {
        let mut menu = DropdownMenu::default();
        menu.toggle(3);
        menu.close_all();
        assert_eq!(menu, DropdownMenu::default());
    }
}
