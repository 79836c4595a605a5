//! Arguments et exécution de la conversion

use anyhow::{bail, Context, Result};
use clap::Args;
use rt90::GridCoord;
use tracing::{debug, info, warn};

use crate::config::{OutputConfig, OutputFormat};
use crate::output;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Northing (x) in metres, RT90 2.5 gon V
    #[arg(required_unless_present = "coord", allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Easting (y) in metres, RT90 2.5 gon V
    #[arg(required_unless_present = "coord", allow_negative_numbers = true)]
    pub y: Option<f64>,

    /// Coordinate pair as "X,Y" (alternative to the positional arguments)
    #[arg(short, long, conflicts_with_all = ["x", "y"])]
    pub coord: Option<GridCoord>,

    /// Output format: text, json, geojson (défaut : env RT90_FORMAT / text)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Decimal places in the output (défaut : env RT90_PRECISION / 6)
    #[arg(short, long)]
    pub precision: Option<u8>,
}

impl ConvertArgs {
    /// Coordonnée d'entrée, depuis `--coord` ou les arguments positionnels
    pub fn grid_coord(&self) -> Result<GridCoord> {
        match (self.coord, self.x, self.y) {
            (Some(coord), _, _) => Ok(coord),
            (None, Some(x), Some(y)) => Ok(GridCoord::new(x, y)),
            _ => bail!("Expected X and Y, or --coord \"X,Y\""),
        }
    }
}

/// Exécute la conversion et renvoie la ligne à afficher
pub fn cmd_convert(args: &ConvertArgs) -> Result<String> {
    let coord = args.grid_coord()?;
    let config = OutputConfig::from_env().with_overrides(args.format, args.precision);
    debug!(?config, "Configuration de sortie");

    let geo = rt90::gauss_kruger(coord);
    if geo.is_finite() {
        info!(x = coord.x, y = coord.y, lat = geo.lat, lon = geo.lon, "Conversion RT90 → WGS84");
    } else {
        warn!(
            x = coord.x,
            y = coord.y,
            "Résultat non fini : coordonnée hors de la couverture RT90"
        );
    }

    output::render(coord, geo, &config)
        .with_context(|| format!("Failed to render ({}, {})", coord.x, coord.y))
}
