/// Colour scheme of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value stored in localStorage and written to `data-theme`
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored preference
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Mode used at startup: a valid stored preference wins, otherwise the
    /// OS colour-scheme preference decides.
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored
            .and_then(Self::from_stored)
            .unwrap_or_else(|| Self::from_dark(prefers_dark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_preference_wins() {
        assert_eq!(ThemeMode::initial(Some("light"), true), ThemeMode::Light);
        assert_eq!(ThemeMode::initial(Some("dark"), false), ThemeMode::Dark);
    }

    #[test]
    fn test_falls_back_to_system_preference() {
        assert_eq!(ThemeMode::initial(None, true), ThemeMode::Dark);
        assert_eq!(ThemeMode::initial(None, false), ThemeMode::Light);
        assert_eq!(ThemeMode::initial(Some("sepia"), true), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_round_trips_storage_value() {
        let mode = ThemeMode::Light.toggled();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(mode.as_str()), Some(mode));
        assert_eq!(mode.toggled(), ThemeMode::Light);
    }
}
