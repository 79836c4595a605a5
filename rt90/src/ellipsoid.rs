//! Paramètres de définition de la projection RT90 2.5 gon V

/// Constantes RT90 2.5 gon V (ellipsoïde GRS80 + origine du quadrillage)
///
/// Aucun changement de datum n'est appliqué en plus de la projection inverse :
/// l'entrée est supposée rapportée à cet ellipsoïde (écart de quelques mètres
/// avec le vrai WGS84).
pub struct Rt90;

impl Rt90 {
    /// Demi-grand axe en mètres
    pub const A: f64 = 6378137.0;

    /// Aplatissement
    pub const F: f64 = 1.0 / 298.257222101;

    /// Méridien central en degrés décimaux (15° 48' 22.624306")
    pub const CENTRAL_MERIDIAN_DEG: f64 = 15.0 + 48.0 / 60.0 + 22.624306 / 3600.0;

    /// Facteur d'échelle sur le méridien central
    pub const SCALE: f64 = 1.00000561024;

    /// False northing en mètres
    pub const FALSE_NORTHING: f64 = -667.711;

    /// False easting en mètres
    pub const FALSE_EASTING: f64 = 1500064.274;
}

/// Jeu de paramètres d'une projection Gauss-Krüger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Demi-grand axe (mètres)
    pub axis: f64,
    /// Aplatissement
    pub flattening: f64,
    /// Méridien central (degrés)
    pub central_meridian: f64,
    /// Facteur d'échelle
    pub scale: f64,
    /// False northing (mètres)
    pub false_northing: f64,
    /// False easting (mètres)
    pub false_easting: f64,
}

impl ProjectionParams {
    /// Paramètres fixes RT90 2.5 gon V
    pub const fn rt90() -> Self {
        Self {
            axis: Rt90::A,
            flattening: Rt90::F,
            central_meridian: Rt90::CENTRAL_MERIDIAN_DEG,
            scale: Rt90::SCALE,
            false_northing: Rt90::FALSE_NORTHING,
            false_easting: Rt90::FALSE_EASTING,
        }
    }

    /// Copie avec un autre facteur d'échelle
    #[cfg(test)]
    pub(crate) fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self::rt90()
    }
}
