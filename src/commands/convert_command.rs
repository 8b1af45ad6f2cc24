//! Geometry conversion command
//!
//! This module implements the command for re-encoding a geometry as WKT
//! and hex WKB, optionally reprojected into another CRS.

use clap::ArgMatches;
use log::info;

use super::{epsg_arg, input_arg, kit_from_args};
use crate::api::{OutputFormat, VectorKit};
use crate::commands::command_traits::Command;
use crate::coordinate::crs::{self, WGS84_EPSG};
use crate::geometry::errors::GeometryResult;
use crate::utils::logger::Logger;

/// Command for converting a geometry between encodings and projections
pub struct ConvertCommand<'a> {
    /// Geometry text (WKT, coordinate pair or hex WKB)
    input: String,
    /// EPSG code the input coordinates are in
    source_epsg: u32,
    /// Target EPSG code, if reprojecting
    target_epsg: Option<u32>,
    /// Single output encoding, or both when unset
    format: Option<OutputFormat>,
    /// Toolkit doing the work
    kit: VectorKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeometryResult<Self> {
        let target_epsg = epsg_arg(args, "proj")?;

        // Validate the target before doing any work
        if let Some(code) = target_epsg {
            info!("Using target projection: {}", crs::crs_by_epsg(code)?.description());
        }

        let format = match args.get_one::<String>("format") {
            Some(name) => Some(name.parse::<OutputFormat>()?),
            None => None,
        };

        Ok(ConvertCommand {
            input: input_arg(args)?,
            source_epsg: epsg_arg(args, "crs")?.unwrap_or(WGS84_EPSG),
            target_epsg,
            format,
            kit: kit_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> GeometryResult<()> {
        info!("Converting geometry {} from EPSG:{}", self.input, self.source_epsg);

        let geometry = self.kit.read_in_crs(&self.input, self.source_epsg)?;

        let formats = match self.format {
            Some(format) => vec![format],
            None => vec![OutputFormat::Wkt, OutputFormat::WkbHex],
        };

        for format in formats {
            let output = self.kit.convert(&geometry, self.target_epsg, format)?;
            println!("{}", output);
        }

        info!("Geometry conversion successful");
        self.logger.log("Geometry conversion successful")?;

        Ok(())
    }
}
