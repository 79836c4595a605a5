//! # rt90
//!
//! Conversion de coordonnées du quadrillage suédois RT90 2.5 gon V vers
//! WGS84 (degrés décimaux) par projection Gauss-Krüger inverse.
//!
//! ## Features
//!
//! - Formules de Krüger fermées, 4 harmoniques, sans itération
//! - Fonction pure, sans état : appelable depuis plusieurs threads
//! - Types `geo` pour l'interopérabilité avec l'écosystème Rust géospatial
//!
//! Aucun changement de datum n'est appliqué : le résultat est
//! « WGS84 approché », à quelques mètres près.
//!
//! ## Usage
//!
//! ```rust
//! let (lat, long) = rt90::wgs84_from_rt90(6791723.0, 1405053.0);
//! assert!((lat - 61.2295).abs() < 1e-3);
//! assert!((long - 14.0374).abs() < 1e-3);
//! ```

pub mod ellipsoid;
pub mod error;
pub mod projection;
pub mod types;

pub use error::Rt90Error;
pub use projection::GaussKruger;
pub use types::{Geographic, GridCoord};

/// Convertit une coordonnée RT90 (x = northing, y = easting, mètres) en
/// (latitude, longitude) WGS84 en degrés décimaux
///
/// Aucune validation : une entrée hors de la couverture du quadrillage
/// donne un résultat absurde ou `NaN`, jamais une erreur.
pub fn wgs84_from_rt90(x: f64, y: f64) -> (f64, f64) {
    let geo = gauss_kruger(GridCoord::new(x, y));
    (geo.lat, geo.lon)
}

/// Variante typée de [`wgs84_from_rt90`]
pub fn gauss_kruger(coord: GridCoord) -> Geographic {
    GaussKruger::rt90().to_geographic(coord)
}
