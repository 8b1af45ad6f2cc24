//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod analyze_command;
pub mod convert_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use convert_command::ConvertCommand;
pub use batch_command::BatchCommand;

use clap::ArgMatches;
use crate::api::VectorKit;
use crate::coordinate::crs;
use crate::geometry::errors::{GeometryError, GeometryResult};
use crate::geometry::DistanceUnit;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
#[derive(Default)]
pub struct VectorkitCommandFactory;

impl VectorkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        VectorkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for VectorkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GeometryResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_one::<String>("batch").is_some() {
            Ok(Box::new(BatchCommand::new(args, logger)?))
        } else if args.get_flag("convert") {
            Ok(Box::new(ConvertCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}

/// Toolkit configured from the `--unit` argument
pub(crate) fn kit_from_args(args: &ArgMatches) -> GeometryResult<VectorKit> {
    let unit = match args.get_one::<String>("unit") {
        Some(unit) => unit.parse::<DistanceUnit>()?,
        None => DistanceUnit::default(),
    };
    Ok(VectorKit::new(unit))
}

/// Parse an EPSG code argument such as `3857` or `EPSG:3857`
pub(crate) fn epsg_arg(args: &ArgMatches, name: &str) -> GeometryResult<Option<u32>> {
    match args.get_one::<String>(name) {
        Some(value) => crs::parse_epsg_code(value)
            .map(Some)
            .map_err(|_| GeometryError::ParseError(format!("Invalid EPSG code for --{}: {}", name, value))),
        None => Ok(None),
    }
}

/// The positional geometry argument
pub(crate) fn input_arg(args: &ArgMatches) -> GeometryResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| GeometryError::GenericError("Missing input geometry".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cli::build_cli;

    #[test]
    fn test_epsg_arg() {
        let args = build_cli()
            .try_get_matches_from(["vectorkit", "POINT (1 2)", "--proj", "epsg:3857"])
            .unwrap();
        assert_eq!(epsg_arg(&args, "proj").unwrap(), Some(3857));
        assert_eq!(epsg_arg(&args, "crs").unwrap(), Some(4326));

        let args = build_cli().try_get_matches_from(["vectorkit", "POINT (1 2)"]).unwrap();
        assert_eq!(epsg_arg(&args, "proj").unwrap(), None);

        let args = build_cli()
            .try_get_matches_from(["vectorkit", "POINT (1 2)", "--proj", "mercator"])
            .unwrap();
        match epsg_arg(&args, "proj") {
            Err(GeometryError::ParseError(msg)) => assert!(msg.contains("--proj")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
