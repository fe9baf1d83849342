use log::error;
use serde::{Deserialize, Serialize};

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub theme: Theme,
    pub show_weight: bool,
}

impl Settings {
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        match self.theme {
            Theme::System => {
                let Some(window) = web_sys::window() else {
                    error!("failed to access window to determine preferred color scheme");
                    return Theme::Light;
                };
                match window.match_media("(prefers-color-scheme: dark)") {
                    Ok(Some(media_query_list)) => {
                        if media_query_list.matches() {
                            Theme::Dark
                        } else {
                            Theme::Light
                        }
                    }
                    Ok(None) => {
                        error!("failed to determine preferred color scheme");
                        Theme::Light
                    }
                    Err(_) => {
                        error!("failed to match media to determine preferred color scheme");
                        Theme::Light
                    }
                }
            }
            Theme::Light | Theme::Dark => self.theme,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            show_weight: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, strum::Display, strum::EnumIter)]
pub enum Theme {
    System,
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Theme::Light)]
    #[case(Theme::Dark)]
    fn test_current_theme_explicit(#[case] theme: Theme) {
        assert_eq!(
            Settings {
                theme,
                ..Settings::default()
            }
            .current_theme(),
            theme
        );
    }

    #[test]
    fn test_settings_from_json() {
        assert_eq!(
            serde_json::from_str::<Settings>(r#"{"theme":"Dark","show_weight":false}"#).unwrap(),
            Settings {
                theme: Theme::Dark,
                show_weight: false
            }
        );
    }
}
