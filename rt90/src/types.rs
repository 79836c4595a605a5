//! Types de coordonnées

use std::fmt;
use std::str::FromStr;

use geo::{Coord, Point};

use crate::error::Rt90Error;

/// Coordonnée du quadrillage RT90 (mètres)
///
/// Convention géodésique suédoise : `x` est le northing, `y` l'easting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCoord {
    /// Northing
    pub x: f64,
    /// Easting
    pub y: f64,
}

impl GridCoord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for GridCoord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// `geo` suit la convention SIG (x = easting, y = northing) : les axes sont permutés.
impl From<Coord> for GridCoord {
    fn from(c: Coord) -> Self {
        Self { x: c.y, y: c.x }
    }
}

impl From<GridCoord> for Coord {
    fn from(g: GridCoord) -> Self {
        Coord { x: g.y, y: g.x }
    }
}

impl FromStr for GridCoord {
    type Err = Rt90Error;

    /// Accepte `"x,y"`, `"x;y"` ou `"x y"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(Rt90Error::invalid_coordinate(
                s,
                format!("expected 2 values, found {}", parts.len()),
            ));
        }

        let parse = |p: &str| -> Result<f64, Rt90Error> {
            let v: f64 = p
                .parse()
                .map_err(|e| Rt90Error::invalid_coordinate(s, format!("{}: {}", p, e)))?;
            if !v.is_finite() {
                return Err(Rt90Error::NonFinite { input: s.to_string() });
            }
            Ok(v)
        };

        Ok(Self {
            x: parse(parts[0])?,
            y: parse(parts[1])?,
        })
    }
}

/// Point en coordonnées géographiques (degrés décimaux)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geographic {
    /// Latitude en degrés
    pub lat: f64,
    /// Longitude en degrés
    pub lon: f64,
}

impl Geographic {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convertit en radians (lat, lon)
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }

    /// Faux si la projection est sortie de son domaine
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<Geographic> for Point {
    fn from(g: Geographic) -> Self {
        Point::new(g.lon, g.lat)
    }
}

impl fmt::Display for Geographic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}, {:.*}", p, self.lat, p, self.lon),
            None => write!(f, "{}, {}", self.lat, self.lon),
        }
    }
}
