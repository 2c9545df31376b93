#[cfg(test)]
#[path = "../../tests/unit/commands/flow_test.rs"]
mod flow_test;

use super::*;
use agroute_cli::extensions::route::{get_flow, get_paths};
use agroute_cli::format::results::{write_flow, write_paths};

pub fn get_paths_app() -> Command {
    with_common_args(Command::new("paths").about("Finds all paths between facilities to visualize connectivity"))
}

pub fn get_flow_app() -> Command {
    with_common_args(Command::new("flow").about("Aggregates flows between all producers and retailers"))
}

pub fn run_paths(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let ctx = get_routing_context(matches)?;
    let paths = get_paths(get_network_reader(matches)?, &ctx)?;

    write_paths(get_out_writer(matches, out_writer_func)?, &paths)
}

pub fn run_flow(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let ctx = get_routing_context(matches)?;
    let result = get_flow(get_network_reader(matches)?, &ctx)?;

    write_flow(get_out_writer(matches, out_writer_func)?, &result)
}
