use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Streaming service a show is watched on.
///
/// Stored as free text. The known services round-trip through their display
/// names; anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    #[default]
    Netflix,
    PrimeVideo,
    AppleTvPlus,
    Other(String),
}

impl Platform {
    pub fn name(&self) -> &str {
        match self {
            Platform::Netflix => "Netflix",
            Platform::PrimeVideo => "Prime Video",
            Platform::AppleTvPlus => "Apple TV+",
            Platform::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Platform::Other(_))
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Netflix" => Platform::Netflix,
            "Prime Video" => Platform::PrimeVideo,
            "Apple TV+" => Platform::AppleTvPlus,
            _ => Platform::Other(value),
        }
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses user input into one of the known services only.
impl FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '+')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "netflix" => Ok(Platform::Netflix),
            "primevideo" | "prime" | "amazonprime" => Ok(Platform::PrimeVideo),
            "appletv+" | "appletvplus" | "appletv" | "apple" => Ok(Platform::AppleTvPlus),
            _ => Err(ParseError::InvalidPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platforms_use_display_names() {
        assert_eq!(serde_json::to_string(&Platform::PrimeVideo).unwrap(), "\"Prime Video\"");
        assert_eq!(serde_json::to_string(&Platform::AppleTvPlus).unwrap(), "\"Apple TV+\"");
        let parsed: Platform = serde_json::from_str("\"Netflix\"").unwrap();
        assert_eq!(parsed, Platform::Netflix);
    }

    #[test]
    fn test_free_text_platform_is_preserved() {
        let parsed: Platform = serde_json::from_str("\"Crunchyroll\"").unwrap();
        assert_eq!(parsed, Platform::Other("Crunchyroll".to_string()));
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Crunchyroll\"");
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("netflix".parse::<Platform>().unwrap(), Platform::Netflix);
        assert_eq!("Prime Video".parse::<Platform>().unwrap(), Platform::PrimeVideo);
        assert_eq!("prime-video".parse::<Platform>().unwrap(), Platform::PrimeVideo);
        assert_eq!("Apple TV+".parse::<Platform>().unwrap(), Platform::AppleTvPlus);
        assert!("Hulu".parse::<Platform>().is_err());
    }
}
