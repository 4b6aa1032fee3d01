use serde::Deserialize;

fn default_scheme() -> String {
    "http".to_string()
}

/// Formatter settings shared by every resource.
///
/// Deserializable so it can live in an application's config file:
///
/// ```json
/// { "default_scheme": "https" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatterConfig {
    /// Scheme used for `Link` URLs when the request URI carries none.
    ///
    /// Server-side requests usually arrive in origin form (`/items?range=0-10`),
    /// so this is what ends up in the generated links.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            default_scheme: default_scheme(),
        }
    }
}

impl FormatterConfig {
    #[must_use]
    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: FormatterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FormatterConfig::default());
        assert_eq!(config.default_scheme, "http");
    }

    #[test]
    fn test_override() {
        let config: FormatterConfig =
            serde_json::from_str(r#"{"default_scheme": "https"}"#).unwrap();
        assert_eq!(config, FormatterConfig::default().with_default_scheme("https"));
    }
}
