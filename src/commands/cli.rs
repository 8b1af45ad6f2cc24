//! Command line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the `vectorkit` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("VectorKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Parse, measure, reproject and encode vector geometries")
        .arg(
            Arg::new("input")
                .help("Geometry as WKT, a coordinate pair such as '13.4,52.5', or hex WKB")
                .required_unless_present("batch")
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("crs")
                .long("crs")
                .help("EPSG code of the input coordinates (e.g., 4326 for WGS84, 3857 for Web Mercator)")
                .value_name("CODE")
                .default_value("4326")
                .required(false),
        )
        .arg(
            Arg::new("unit")
                .long("unit")
                .help("Unit for lengths and areas (km, mi, nmi, m, ft)")
                .value_name("UNIT")
                .default_value("km")
                .required(false),
        )
        .arg(
            Arg::new("convert")
                .short('c')
                .long("convert")
                .help("Print the geometry as WKT and hex WKB")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("proj")
                .long("proj")
                .help("Target projection EPSG code for reprojection")
                .value_name("CODE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output encoding (wkt or wkb)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Encode every geometry line of this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for batch mode (default: stdout)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("File receiving command reports")
                .value_name("FILE")
                .default_value("vectorkit.log")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file instead of the console")
                .value_name("FILE")
                .required(false),
        )
}
