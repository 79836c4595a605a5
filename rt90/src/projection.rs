//! Projection Gauss-Krüger inverse (Mercator transverse)
//!
//! Formules de Krüger en `n` (troisième aplatissement), 4 harmoniques.
//! Aucun contrôle de domaine : hors de la couverture suédoise, le résultat
//! peut être absurde ou `NaN`.

use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::ellipsoid::ProjectionParams;
use crate::types::{Geographic, GridCoord};

/// Constantes dérivées des paramètres de définition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedConstants {
    /// Première excentricité au carré
    pub e2: f64,
    /// Troisième aplatissement
    pub n: f64,
    /// Rayon de la sphère conforme
    pub a_roof: f64,
    pub delta1: f64,
    pub delta2: f64,
    pub delta3: f64,
    pub delta4: f64,
    pub a_star: f64,
    pub b_star: f64,
    pub c_star: f64,
    pub d_star: f64,
}

impl DerivedConstants {
    /// Calcule les constantes de la série inverse
    ///
    /// L'ordre des opérations est conservé tel quel pour des résultats
    /// reproductibles au bit près.
    pub fn derive(params: &ProjectionParams) -> Self {
        let f = params.flattening;

        let e2 = f * (2.0 - f);
        let n = f / (2.0 - f);
        let a_roof = params.axis / (1.0 + n) * (1.0 + n * n / 4.0 + n * n * n * n / 64.0);

        // Série latitude conforme → latitude géographique
        let delta1 = n / 2.0 - 2.0 * n * n / 3.0 + 37.0 * n * n * n / 96.0 - n * n * n * n / 360.0;
        let delta2 = n * n / 48.0 + n * n * n / 15.0 - 437.0 * n * n * n * n / 1440.0;
        let delta3 = 17.0 * n * n * n / 480.0 - 37.0 * n * n * n * n / 840.0;
        let delta4 = 4397.0 * n * n * n * n / 161280.0;

        // Correction de latitude en puissances de e2
        let a_star = e2 + e2 * e2 + e2 * e2 * e2 + e2 * e2 * e2 * e2;
        let b_star = -(7.0 * e2 * e2 + 17.0 * e2 * e2 * e2 + 30.0 * e2 * e2 * e2 * e2) / 6.0;
        let c_star = (224.0 * e2 * e2 * e2 + 889.0 * e2 * e2 * e2 * e2) / 120.0;
        let d_star = -(4279.0 * e2 * e2 * e2 * e2) / 1260.0;

        Self {
            e2,
            n,
            a_roof,
            delta1,
            delta2,
            delta3,
            delta4,
            a_star,
            b_star,
            c_star,
            d_star,
        }
    }

    fn deltas(&self) -> [f64; 4] {
        [self.delta1, self.delta2, self.delta3, self.delta4]
    }
}

/// Projection Gauss-Krüger avec ses constantes pré-calculées
///
/// Les constantes sont dérivées une seule fois à la construction ; l'instance
/// est immuable et peut être partagée entre threads.
#[derive(Debug, Clone, Copy)]
pub struct GaussKruger {
    params: ProjectionParams,
    constants: DerivedConstants,
}

impl GaussKruger {
    pub(crate) fn new(params: ProjectionParams) -> Self {
        Self {
            params,
            constants: DerivedConstants::derive(&params),
        }
    }

    /// Projection RT90 2.5 gon V
    pub fn rt90() -> Self {
        Self::new(ProjectionParams::rt90())
    }

    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    pub fn constants(&self) -> &DerivedConstants {
        &self.constants
    }

    /// Convertit (x = northing, y = easting) en coordonnées géographiques
    pub fn inverse(&self, x: f64, y: f64) -> Geographic {
        let p = &self.params;
        let c = &self.constants;

        let lambda_zero = p.central_meridian * (PI / 180.0);

        // Coordonnées réduites sur la sphère conforme
        let xi = (x - p.false_northing) / (p.scale * c.a_roof);
        let eta = (y - p.false_easting) / (p.scale * c.a_roof);

        let mut xi_prim = xi;
        let mut eta_prim = eta;
        for (k, delta) in c.deltas().iter().enumerate() {
            let m = 2.0 * (k + 1) as f64;
            xi_prim -= delta * (m * xi).sin() * (m * eta).cosh();
            eta_prim -= delta * (m * xi).cos() * (m * eta).sinh();
        }

        let phi_star = (xi_prim.sin() / eta_prim.cosh()).asin();
        let delta_lambda = (eta_prim.sinh() / xi_prim.cos()).atan();

        let lon_radian = lambda_zero + delta_lambda;

        let sin_phi = phi_star.sin();
        let lat_radian = phi_star
            + sin_phi
                * phi_star.cos()
                * (c.a_star
                    + c.b_star * sin_phi.powi(2)
                    + c.c_star * sin_phi.powi(4)
                    + c.d_star * sin_phi.powi(6));

        let geo = Geographic::new(lat_radian * 180.0 / PI, lon_radian * 180.0 / PI);

        trace!(x, y, lat = geo.lat, lon = geo.lon, "RT90 → WGS84");
        if !geo.is_finite() {
            debug!(x, y, "Coordonnée hors du domaine de la projection");
        }

        geo
    }

    /// Variante typée de [`GaussKruger::inverse`]
    pub fn to_geographic(&self, coord: GridCoord) -> Geographic {
        self.inverse(coord.x, coord.y)
    }
}

impl Default for GaussKruger {
    fn default() -> Self {
        Self::rt90()
    }
}
