#[cfg(test)]
#[path = "../../tests/unit/commands/edges_test.rs"]
mod edges_test;

use super::*;
use agroute_cli::extensions::route::get_links;
use agroute_cli::format::results::write_links;

pub fn get_edges_app() -> Command {
    with_common_args(Command::new("edges").about("Synthesizes candidate links between adjacent supply chain stages"))
}

pub fn run_edges(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let ctx = get_routing_context(matches)?;
    let links = get_links(get_network_reader(matches)?, &ctx)?;

    write_links(get_out_writer(matches, out_writer_func)?, &links)
}
