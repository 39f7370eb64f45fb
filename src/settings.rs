//! User settings panel
//!
//! Holds the profile, notification, preference and privacy options together
//! with a dirty flag. Settings live in memory only; `save` marks the current
//! values as accepted and `reset` restores the configured defaults.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Time zones offered by the preferences section
pub const TIMEZONES: [&str; 4] = [
    "Europe/Paris",
    "Europe/London",
    "America/New_York",
    "Asia/Tokyo",
];

/// Date display formats offered by the preferences section
pub const DATE_FORMATS: [&str; 3] = ["DD/MM/YYYY", "MM/DD/YYYY", "YYYY-MM-DD"];

/// Color theme
///
/// Uses lowercase naming to match TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    light,
    dark,
    auto,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::light),
            "dark" => Ok(Theme::dark),
            "auto" => Ok(Theme::auto),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options are: light, dark, auto",
                s
            )),
        }
    }
}

/// Display language of the static label tables
///
/// Uses lowercase naming to match TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    fr,
    en,
    es,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Language::fr),
            "en" => Ok(Language::en),
            "es" => Ok(Language::es),
            _ => Err(format!(
                "Invalid language '{}'. Valid options are: fr, en, es",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub deadlines: bool,
    pub daily_digest: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            deadlines: true,
            daily_digest: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSettings {
    pub theme: Theme,
    pub language: Language,
    pub timezone: String,
    pub date_format: String,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::light,
            language: Language::fr,
            timezone: TIMEZONES[0].to_string(),
            date_format: DATE_FORMATS[0].to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacySettings {
    pub profile_public: bool,
    pub analytics_tracking: bool,
    pub data_sharing: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_public: false,
            analytics_tracking: true,
            data_sharing: false,
        }
    }
}

/// All user-editable settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub name: String,
    pub email: String,
    pub notifications: NotificationSettings,
    pub preferences: PreferenceSettings,
    pub privacy: PrivacySettings,
}

/// Errors raised when editing a setting
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error(
        "Unknown settings section '{0}'. Valid sections: profile, notifications, preferences, privacy"
    )]
    UnknownSection(String),
    #[error("Unknown field '{field}' in section '{section}'. Valid fields: {valid}")]
    UnknownField {
        section: String,
        field: String,
        valid: &'static str,
    },
    #[error("Invalid value '{value}' for {field}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

fn parse_bool(field: &str, value: &str) -> Result<bool, SettingsError> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(SettingsError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Expected true or false".to_string(),
        }),
    }
}

fn parse_choice(field: &str, value: &str, options: &[&str]) -> Result<String, SettingsError> {
    let value = value.trim();
    if options.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(SettingsError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!("Valid options are: {}", options.join(", ")),
        })
    }
}

fn parse_enum<T: FromStr<Err = String>>(field: &str, value: &str) -> Result<T, SettingsError> {
    value.trim().parse().map_err(|reason| SettingsError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    })
}

impl UserSettings {
    /// Set one field addressed by section and field name
    pub fn set(&mut self, section: &str, field: &str, value: &str) -> Result<(), SettingsError> {
        let unknown_field = |valid: &'static str| SettingsError::UnknownField {
            section: section.to_string(),
            field: field.to_string(),
            valid,
        };
        let path = format!("{}.{}", section, field);

        match section {
            "profile" => match field {
                "name" => self.name = value.trim().to_string(),
                "email" => self.email = value.trim().to_string(),
                _ => return Err(unknown_field("name, email")),
            },
            "notifications" => {
                let slot = match field {
                    "email" => &mut self.notifications.email,
                    "push" => &mut self.notifications.push,
                    "deadlines" => &mut self.notifications.deadlines,
                    "daily_digest" => &mut self.notifications.daily_digest,
                    _ => return Err(unknown_field("email, push, deadlines, daily_digest")),
                };
                *slot = parse_bool(&path, value)?;
            }
            "preferences" => match field {
                "theme" => self.preferences.theme = parse_enum(&path, value)?,
                "language" => self.preferences.language = parse_enum(&path, value)?,
                "timezone" => self.preferences.timezone = parse_choice(&path, value, &TIMEZONES)?,
                "date_format" => {
                    self.preferences.date_format = parse_choice(&path, value, &DATE_FORMATS)?
                }
                _ => return Err(unknown_field("theme, language, timezone, date_format")),
            },
            "privacy" => {
                let slot = match field {
                    "profile_public" => &mut self.privacy.profile_public,
                    "analytics_tracking" => &mut self.privacy.analytics_tracking,
                    "data_sharing" => &mut self.privacy.data_sharing,
                    _ => {
                        return Err(unknown_field(
                            "profile_public, analytics_tracking, data_sharing",
                        ));
                    }
                };
                *slot = parse_bool(&path, value)?;
            }
            _ => return Err(SettingsError::UnknownSection(section.to_string())),
        }

        Ok(())
    }
}

/// Settings panel state: current values, defaults and the dirty flag
pub struct SettingsPanel {
    current: UserSettings,
    defaults: UserSettings,
    has_changes: bool,
}

impl SettingsPanel {
    pub fn new(defaults: UserSettings) -> Self {
        Self {
            current: defaults.clone(),
            defaults,
            has_changes: false,
        }
    }

    pub fn current(&self) -> &UserSettings {
        &self.current
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    /// Set one field; the panel is dirty afterwards
    ///
    /// A rejected value leaves both the settings and the dirty flag untouched.
    pub fn set(&mut self, section: &str, field: &str, value: &str) -> Result<(), SettingsError> {
        self.current.set(section, field, value)?;
        self.has_changes = true;
        Ok(())
    }

    /// Accept the current values
    ///
    /// # Returns
    /// Whether there were unsaved changes
    pub fn save(&mut self) -> bool {
        let had_changes = self.has_changes;
        self.has_changes = false;
        tracing::info!(had_changes, "settings saved");
        had_changes
    }

    /// Restore the defaults; the panel is dirty afterwards
    pub fn reset(&mut self) {
        self.current = self.defaults.clone();
        self.has_changes = true;
        tracing::info!("settings reset to defaults");
    }
}
