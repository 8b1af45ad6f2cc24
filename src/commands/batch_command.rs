//! Batch encoding command
//!
//! Reads one geometry per line and writes one encoded geometry per line.
//! Blank lines and lines starting with `#` are ignored; lines that fail to
//! parse are logged and skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use clap::ArgMatches;
use log::{info, warn};

use super::{epsg_arg, kit_from_args};
use crate::api::{OutputFormat, VectorKit};
use crate::commands::command_traits::Command;
use crate::coordinate::crs::WGS84_EPSG;
use crate::geometry::errors::{GeometryError, GeometryResult};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Outcome of a batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
}

/// Command for encoding a file of geometries
pub struct BatchCommand<'a> {
    /// File with one geometry per line
    input_file: String,
    /// Output file, stdout when unset
    output_file: Option<String>,
    /// EPSG code the input coordinates are in
    source_epsg: u32,
    /// Target EPSG code, if reprojecting
    target_epsg: Option<u32>,
    /// Output encoding
    format: OutputFormat,
    /// Toolkit doing the work
    kit: VectorKit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeometryResult<Self> {
        let input_file = args.get_one::<String>("batch")
            .ok_or_else(|| GeometryError::GenericError("Missing batch input file".to_string()))?
            .clone();

        let format = match args.get_one::<String>("format") {
            Some(name) => name.parse::<OutputFormat>()?,
            None => OutputFormat::WkbHex,
        };

        Ok(BatchCommand {
            input_file,
            output_file: args.get_one::<String>("output").cloned(),
            source_epsg: epsg_arg(args, "crs")?.unwrap_or(WGS84_EPSG),
            target_epsg: epsg_arg(args, "proj")?,
            format,
            kit: kit_from_args(args)?,
            logger,
        })
    }

    /// Encode every geometry line of `lines` into `out`
    pub fn process<W: Write>(&self, lines: &[String], out: &mut W, progress: &ProgressTracker) -> GeometryResult<BatchSummary> {
        let mut summary = BatchSummary::default();

        for (number, line) in lines.iter().enumerate() {
            progress.increment(1);
            let text = line.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let encoded = self.kit.read_in_crs(text, self.source_epsg)
                .and_then(|geometry| self.kit.convert(&geometry, self.target_epsg, self.format));

            match encoded {
                Ok(output) => {
                    writeln!(out, "{}", output)?;
                    summary.converted += 1;
                }
                Err(GeometryError::CrsNotFound(code)) => return Err(GeometryError::CrsNotFound(code)),
                Err(e) => {
                    warn!("Skipping line {}: {}", number + 1, e);
                    summary.skipped += 1;
                }
            }
        }

        out.flush()?;
        Ok(summary)
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> GeometryResult<()> {
        info!("Encoding geometries from {}", self.input_file);

        let reader = BufReader::new(File::open(&self.input_file)?);
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;

        let progress = ProgressTracker::new(lines.len() as u64, "Encoding geometries");
        let summary = match &self.output_file {
            Some(path) => self.process(&lines, &mut BufWriter::new(File::create(path)?), &progress)?,
            None => self.process(&lines, &mut io::stdout().lock(), &progress)?,
        };
        progress.finish();

        let message = format!("Batch complete: {} converted, {} skipped", summary.converted, summary.skipped);
        info!("{}", message);
        self.logger.log(&message)?;

        Ok(())
    }
}
