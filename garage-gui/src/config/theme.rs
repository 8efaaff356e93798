use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl From<&Theme> for iced::Theme {
    fn from(theme: &Theme) -> Self {
        match theme {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
