//! Locale identification
//!
//! Parses BCP 47 tags (`de-DE`, `zh-Hans-CN`) and POSIX locale names
//! (`de_DE.UTF-8@euro`) into a language/script/region triple.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variables consulted by [`Locale::from_env`], in order.
pub const LOCALE_ENV_VARS: [&str; 4] = ["INTL_FORMAT_LOCALE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// A locale tag could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid locale: {0}")]
pub struct LocaleError(pub String);

/// A locale (language + optional script and region).
///
/// ```
/// use intl_format_formatters::Locale;
///
/// let de = Locale::parse("de_DE.UTF-8").unwrap();
/// assert_eq!(de.tag(), "de-DE");
/// assert_eq!(de, Locale::de_de());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// Language code (ISO 639-1, e.g., "en", "fr", "de")
    pub language: String,
    /// Optional script (e.g., "Latn", "Hans")
    pub script: Option<String>,
    /// Optional region code (ISO 3166-1, e.g., "US", "GB", "FR")
    pub region: Option<String>,
}

impl Locale {
    /// Create a new locale.
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            script: None,
            region: region.map(|r| r.into().to_uppercase()),
        }
    }

    /// Parse a BCP 47 tag or a POSIX locale name.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        // POSIX: strip codeset and modifier.
        let core = tag.split(['.', '@']).next().unwrap_or_default().trim();
        let mut parts = core.split(['-', '_']);

        let language = parts.next().unwrap_or_default().to_lowercase();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LocaleError(tag.to_string()));
        }

        let mut script = None;
        let mut region = None;

        for part in parts {
            let alpha = part.chars().all(|c| c.is_ascii_alphabetic());
            match part.len() {
                4 if alpha && script.is_none() && region.is_none() => {
                    script = Some(title_case(part));
                }
                2 if alpha && region.is_none() => region = Some(part.to_uppercase()),
                3 if part.chars().all(|c| c.is_ascii_digit()) && region.is_none() => {
                    region = Some(part.to_string());
                }
                _ => {}
            }
        }

        Ok(Self {
            language,
            script,
            region,
        })
    }

    /// Locale from the first usable environment variable, else `en-US`.
    ///
    /// `C` and `POSIX` are skipped.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .filter(|value| !matches!(value.as_str(), "" | "C" | "POSIX") && !value.starts_with("C."))
            .find_map(|value| Self::parse(&value).ok())
            .unwrap_or_default()
    }

    /// The BCP 47 tag (e.g., "en-US").
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(ref script) = self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(ref region) = self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// Same locale without region.
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            script: self.script.clone(),
            region: None,
        }
    }

    pub(crate) fn region_is(&self, region: &str) -> bool {
        self.region.as_deref() == Some(region)
    }

    /// English (no region)
    pub fn en() -> Self {
        Self::new("en", None::<&str>)
    }

    /// English (US)
    pub fn en_us() -> Self {
        Self::new("en", Some("US"))
    }

    /// English (GB)
    pub fn en_gb() -> Self {
        Self::new("en", Some("GB"))
    }

    /// German (Germany)
    pub fn de_de() -> Self {
        Self::new("de", Some("DE"))
    }

    /// French (France)
    pub fn fr_fr() -> Self {
        Self::new("fr", Some("FR"))
    }

    /// Spanish (Spain)
    pub fn es_es() -> Self {
        Self::new("es", Some("ES"))
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_bcp47() {
        let en_us = Locale::parse("en-US").unwrap();
        assert_eq!(en_us.language, "en");
        assert_eq!(en_us.region.as_deref(), Some("US"));

        let zh = Locale::parse("zh-hans-cn").unwrap();
        assert_eq!(zh.tag(), "zh-Hans-CN");

        let es_419 = Locale::parse("es-419").unwrap();
        assert_eq!(es_419.region.as_deref(), Some("419"));
    }

    #[test]
    fn test_parse_posix() {
        assert_eq!(Locale::parse("de_DE.UTF-8").unwrap(), Locale::de_de());
        assert_eq!(Locale::parse("fr_FR@euro").unwrap(), Locale::fr_fr());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("x").is_err());
        assert!(Locale::parse("12-US").is_err());
        assert_eq!(
            "english".parse::<Locale>().unwrap_err().to_string(),
            "Invalid locale: english"
        );
    }

    #[test]
    fn test_from_lookup_order() {
        let vars: HashMap<&str, &str> = [("LANG", "fr_FR.UTF-8"), ("LC_ALL", "C")].into();
        let locale = Locale::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(locale, Locale::fr_fr());

        let vars: HashMap<&str, &str> = [("INTL_FORMAT_LOCALE", "de-DE"), ("LANG", "fr_FR")].into();
        let locale = Locale::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(locale, Locale::de_de());

        assert_eq!(Locale::from_lookup(|_| None), Locale::en_us());
    }

    #[test]
    fn test_language_only_and_serde() {
        let gb = Locale::en_gb();
        assert_eq!(gb.language_only(), Locale::en());

        let json = serde_json::to_string(&gb).unwrap();
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gb);
    }
}
