//! Light/dark presentation mode.
//!
//! Resolution precedence: explicit stored choice, then the operating
//! system's color-scheme preference, then light. The stored value is a bare
//! `"light"` / `"dark"` string under the `theme` key; anything else in
//! storage is treated as if nothing were stored.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized theme {0:?}")]
pub struct ParseThemeError(String);

impl Theme {
    /// Key used in durable client-side storage.
    pub const STORAGE_KEY: &'static str = "theme";

    /// Inline script applying the resolved theme to the document root before
    /// hydration, so a dark-preference visitor never flashes light on first
    /// paint. Must mirror [`Theme::resolve`]: stored `"dark"` or `"light"`
    /// wins, anything else falls through to the OS preference.
    pub const EARLY_APPLY_SCRIPT: &'static str = r#"(function(){var t;try{t=localStorage.getItem("theme")}catch(e){}var dark=t==="dark"||(t!=="light"&&window.matchMedia("(prefers-color-scheme: dark)").matches);if(dark){document.documentElement.classList.add("dark")}})()"#;

    /// Resolve the effective theme from an optional stored value and the OS
    /// preference. A malformed stored value falls through to the OS.
    pub fn resolve(stored: Option<&str>, os_prefers_dark: bool) -> Self {
        stored
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(if os_prefers_dark {
                Self::Dark
            } else {
                Self::Light
            })
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_preference_applies_without_stored_value() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn test_stored_value_overrides_os_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_malformed_stored_value_falls_back_to_os() {
        assert_eq!(Theme::resolve(Some("solarized"), true), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        let start = Theme::Dark;
        assert_eq!(start.toggled(), Theme::Light);
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn test_stored_representation() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
        // What we write is what resolve reads back
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::resolve(Some(theme.as_str()), false), theme);
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_parse_error_keeps_offending_value() {
        let err = "blue".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized theme \"blue\"");
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_early_apply_script_mirrors_resolve() {
        let script = Theme::EARLY_APPLY_SCRIPT;
        // Same storage key and stored representations as resolve()
        assert!(script.contains(&format!("localStorage.getItem(\"{}\")", Theme::STORAGE_KEY)));
        assert!(script.contains(&format!("t===\"{}\"", Theme::Dark.as_str())));
        assert!(script.contains(&format!("t!==\"{}\"", Theme::Light.as_str())));
        // Unrecognized stored values fall through to the OS preference
        assert!(script.contains("prefers-color-scheme: dark"));
        // Only ever adds the dark class; light is the unmarked state
        assert!(script.contains("classList.add(\"dark\")"));
        assert!(!script.contains("classList.remove"));
    }
}
