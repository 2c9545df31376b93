use clap::{Arg, ArgMatches, Command};

pub mod edges;
pub mod flow;
pub mod path;

use agroute_cli::extensions::config::{Config, RoutingContext, create_routing_context, read_config};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;

const NETWORK_ARG_NAME: &str = "NETWORK";
const CONFIG_ARG_NAME: &str = "config";
const TEMPERATURE_ARG_NAME: &str = "temperature";
const PRODUCT_ARG_NAME: &str = "product";
const OUT_RESULT_ARG_NAME: &str = "out-result";

/// Creates the command line application.
pub fn get_app() -> Command {
    Command::new("Perishable Supply Network Router")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to route perishable goods through a multi-echelon supply network")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(edges::get_edges_app())
        .subcommand(path::get_path_app())
        .subcommand(flow::get_paths_app())
        .subcommand(flow::get_flow_app())
}

/// Runs the subcommand selected by arguments.
pub fn run_subcommand(matches: ArgMatches) -> Result<(), String> {
    match matches.subcommand() {
        Some(("edges", edges_matches)) => edges::run_edges(edges_matches, create_write_buffer),
        Some(("path", path_matches)) => path::run_path(path_matches, create_write_buffer),
        Some(("paths", paths_matches)) => flow::run_paths(paths_matches, create_write_buffer),
        Some(("flow", flow_matches)) => flow::run_flow(flow_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    }
}

/// Adds arguments shared by all routing commands.
fn with_common_args(command: Command) -> Command {
    command
        .arg(Arg::new(NETWORK_ARG_NAME).help("Sets the network file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to routing configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TEMPERATURE_ARG_NAME)
                .help("Specifies ambient temperature in °C, overrides config value")
                .short('t')
                .long(TEMPERATURE_ARG_NAME)
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new(PRODUCT_ARG_NAME)
                .help("Specifies transported product kind, overrides config value")
                .short('p')
                .long(PRODUCT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn get_network_reader(matches: &ArgMatches) -> Result<BufReader<File>, String> {
    let path = matches.get_one::<String>(NETWORK_ARG_NAME).ok_or_else(|| "network file is not set".to_string())?;

    open_file(path, "network").map(BufReader::new)
}

fn get_out_writer(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_file = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    Ok(out_writer_func(out_file))
}

/// Reads config file and applies command line overrides.
fn get_routing_context(matches: &ArgMatches) -> Result<RoutingContext, String> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let temperature = parse_float_value::<f64>(matches, TEMPERATURE_ARG_NAME, "ambient temperature")?;
    let product = matches.get_one::<String>(PRODUCT_ARG_NAME).cloned();

    create_routing_context(&Config {
        ambient_temperature: temperature.or(config.ambient_temperature),
        product: product.or(config.product.clone()),
        ..config
    })
}
