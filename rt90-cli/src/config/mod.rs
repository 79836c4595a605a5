//! Configuration de la sortie

use serde::Serialize;
use tracing::warn;

/// Format de sortie
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `lat, lon` (défaut)
    #[default]
    Text,
    /// Objet JSON avec l'entrée et le résultat
    Json,
    /// Feature GeoJSON (Point)
    Geojson,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "geojson" => Ok(OutputFormat::Geojson),
            _ => Err(format!("Invalid format: {}. Use: text, json, geojson", s)),
        }
    }
}

/// Nombre de décimales par défaut (≈ 10 cm)
pub const DEFAULT_PRECISION: u8 = 6;

/// Décimales au-delà desquelles f64 n'apporte plus rien
const MAX_PRECISION: u8 = 15;

/// Configuration de la sortie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub precision: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl OutputConfig {
    /// Charge la configuration depuis les variables d'environnement
    /// (`RT90_FORMAT`, `RT90_PRECISION`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let format = match lookup("RT90_FORMAT") {
            Some(s) => s.parse().unwrap_or_else(|e| {
                warn!("RT90_FORMAT ignoré: {}", e);
                defaults.format
            }),
            None => defaults.format,
        };

        let precision = match lookup("RT90_PRECISION") {
            Some(s) => s.trim().parse().unwrap_or_else(|e| {
                warn!("RT90_PRECISION ignoré ({}): {}", s, e);
                defaults.precision
            }),
            None => defaults.precision,
        };

        Self {
            format,
            precision: precision.min(MAX_PRECISION),
        }
    }

    /// Applique les options de la ligne de commande (prioritaires sur l'env)
    pub fn with_overrides(self, format: Option<OutputFormat>, precision: Option<u8>) -> Self {
        Self {
            format: format.unwrap_or(self.format),
            precision: precision.map_or(self.precision, |p| p.min(MAX_PRECISION)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = OutputConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, OutputConfig::default());
        assert_eq!(cfg.precision, 6);
    }

    #[test]
    fn test_from_vars() {
        let cfg = OutputConfig::from_lookup(lookup(&[
            ("RT90_FORMAT", "GeoJSON"),
            ("RT90_PRECISION", " 8 "),
        ]));
        assert_eq!(cfg.format, OutputFormat::Geojson);
        assert_eq!(cfg.precision, 8);
    }

    #[test]
    fn test_invalid_vars_fall_back() {
        let cfg = OutputConfig::from_lookup(lookup(&[
            ("RT90_FORMAT", "xml"),
            ("RT90_PRECISION", "-1"),
        ]));
        assert_eq!(cfg, OutputConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cfg = OutputConfig::default().with_overrides(Some(OutputFormat::Json), Some(40));
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.precision, 15);

        let cfg = OutputConfig::default().with_overrides(None, None);
        assert_eq!(cfg, OutputConfig::default());
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
