//! Mise en forme du résultat (texte, JSON, GeoJSON)

use anyhow::{Context, Result};
use geojson::{Feature, Geometry, JsonObject};
use rt90::{Geographic, GridCoord};
use serde::Serialize;

use crate::config::{OutputConfig, OutputFormat};

/// Résultat d'une conversion, sérialisé en JSON
#[derive(Debug, Serialize)]
pub struct Conversion {
    pub x: f64,
    pub y: f64,
    pub lat: f64,
    pub lon: f64,
}

impl Conversion {
    pub fn new(coord: GridCoord, geo: Geographic, precision: u8) -> Self {
        Self {
            x: coord.x,
            y: coord.y,
            lat: round(geo.lat, precision),
            lon: round(geo.lon, precision),
        }
    }
}

/// Arrondit à `precision` décimales (NaN reste NaN)
fn round(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Produit la sortie selon le format configuré
pub fn render(coord: GridCoord, geo: Geographic, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(format!("{:.*}", config.precision as usize, geo)),
        OutputFormat::Json => {
            let record = Conversion::new(coord, geo, config.precision);
            serde_json::to_string(&record).context("Failed to serialize conversion")
        }
        OutputFormat::Geojson => {
            let record = Conversion::new(coord, geo, config.precision);
            let point: geo::Point = Geographic::new(record.lat, record.lon).into();

            let mut properties = JsonObject::new();
            properties.insert("rt90_x".into(), coord.x.into());
            properties.insert("rt90_y".into(), coord.y.into());

            let feature = Feature {
                bbox: None,
                geometry: Some(Geometry::new(geojson::Value::from(&point))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            };
            serde_json::to_string(&feature).context("Failed to serialize GeoJSON feature")
        }
    }
}
