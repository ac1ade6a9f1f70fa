/// Lightbox position over the gallery items that were visible when it
/// opened. Later filter changes do not reach an open lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    /// Indices into the full gallery item list
    visible: Vec<usize>,
    position: usize,
}

impl Lightbox {
    /// Open on gallery item `item`. `None` when the item is not among the
    /// visible ones (which includes an empty visible list).
    pub fn open(visible: Vec<usize>, item: usize) -> Option<Self> {
        let position = visible.iter().position(|&index| index == item)?;
        Some(Self { visible, position })
    }

    /// Open at `position` within the visible list
    pub fn open_at(visible: Vec<usize>, position: usize) -> Option<Self> {
        if position >= visible.len() {
            return None;
        }
        Some(Self { visible, position })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Gallery item currently displayed
    pub fn current_item(&self) -> usize {
        self.visible[self.position]
    }

    pub fn next(&mut self) {
        self.position = (self.position + 1) % self.visible.len();
    }

    pub fn prev(&mut self) {
        let len = self.visible.len();
        self.position = (self.position + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_on_visible_item() {
        let lightbox = Lightbox::open(vec![0, 2, 5], 2).unwrap();
        assert_eq!(lightbox.position(), 1);
        assert_eq!(lightbox.current_item(), 2);
    }

    #[test]
    fn test_open_on_hidden_item_or_empty_list() {
        assert_eq!(Lightbox::open(vec![0, 2, 5], 3), None);
        assert_eq!(Lightbox::open(Vec::new(), 0), None);
        assert_eq!(Lightbox::open_at(Vec::new(), 0), None);
        assert_eq!(Lightbox::open_at(vec![1, 2], 2), None);
    }

    #[test]
    fn test_next_wraps_to_start() {
        let mut lightbox = Lightbox::open(vec![1, 3, 4], 4).unwrap();
        lightbox.next();
        assert_eq!(lightbox.position(), 0);
        assert_eq!(lightbox.current_item(), 1);
    }

    #[test]
    fn test_prev_wraps_to_end() {
        let mut lightbox = Lightbox::open(vec![1, 3, 4], 1).unwrap();
        lightbox.prev();
        assert_eq!(lightbox.position(), 2);
        assert_eq!(lightbox.current_item(), 4);
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        for len in 1..6 {
            let visible: Vec<usize> = (0..len).map(|i| i * 2).collect();
            for start in 0..len {
                let mut forward = Lightbox::open_at(visible.clone(), start).unwrap();
                let mut backward = forward.clone();
                for step in 1..=2 * len {
                    forward.next();
                    backward.prev();
                    assert!(forward.position() < len);
                    assert!(backward.position() < len);
                    assert_eq!(forward.position(), (start + step) % len);
                    assert_eq!(backward.position(), (start + len * 2 - step) % len);
                }
            }
        }
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut lightbox = Lightbox::open(vec![7], 7).unwrap();
        lightbox.next();
        assert_eq!(lightbox.current_item(), 7);
        lightbox.prev();
        assert_eq!(lightbox.current_item(), 7);
    }
}
