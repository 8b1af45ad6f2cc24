//! Geometry analysis command
//!
//! This module implements the command for describing a geometry: its
//! type, CRS, extent, measures and best-suited UTM zone.

use clap::ArgMatches;
use log::{debug, info};

use super::{epsg_arg, input_arg, kit_from_args};
use crate::api::VectorKit;
use crate::commands::command_traits::Command;
use crate::coordinate::crs::WGS84_EPSG;
use crate::geometry::errors::GeometryResult;
use crate::utils::logger::Logger;

/// Command for analyzing a geometry
pub struct AnalyzeCommand<'a> {
    /// Geometry text (WKT, coordinate pair or hex WKB)
    input: String,
    /// EPSG code the input coordinates are in
    epsg: u32,
    /// Whether to enable verbose output
    verbose: bool,
    /// Toolkit doing the work
    kit: VectorKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeometryResult<Self> {
        Ok(AnalyzeCommand {
            input: input_arg(args)?,
            epsg: epsg_arg(args, "crs")?.unwrap_or(WGS84_EPSG),
            verbose: args.get_flag("verbose"),
            kit: kit_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> GeometryResult<()> {
        info!("Analyzing geometry: {}", self.input);

        let geometry = self.kit.read_in_crs(&self.input, self.epsg)?;
        let mut lines = self.kit.analyze(&geometry);

        if self.verbose {
            debug!("Verbose mode enabled");
            lines.push(format!("WKT: {}", geometry));
            lines.push(format!("WKB: {}", geometry.to_wkb_hex()));
        }

        println!("Geometry Analysis Results:");
        for line in &lines {
            println!("  {}", line);
        }

        self.logger.log_section("Geometry Analysis Results", &lines)?;
        debug!("Analysis completed successfully");

        Ok(())
    }
}
