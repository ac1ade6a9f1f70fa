/// Category filter selected with the gallery's filter buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryFilter {
    All,
    Category(String),
}

impl GalleryFilter {
    /// Build from a button's `data-filter` value
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("all") | None => GalleryFilter::All,
            Some(category) => GalleryFilter::Category(category.to_string()),
        }
    }

    /// Whether an item with the given `data-category` stays visible
    pub fn shows(&self, category: Option<&str>) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shows_everything() {
        let filter = GalleryFilter::from_attr(Some("all"));
        assert!(filter.shows(Some("sports")));
        assert!(filter.shows(None));
    }

    #[test]
    fn test_category_matches_exactly() {
        let filter = GalleryFilter::from_attr(Some("sports"));
        assert!(filter.shows(Some("sports")));
        assert!(!filter.shows(Some("Sports")));
        assert!(!filter.shows(Some("events")));
        assert!(!filter.shows(None));
    }
}
