#[cfg(test)]
#[path = "../../tests/unit/commands/path_test.rs"]
mod path_test;

use super::*;
use agroute_cli::extensions::route::get_path;
use agroute_cli::format::results::write_path;

const FROM_ARG_NAME: &str = "from";
const TO_ARG_NAME: &str = "to";

pub fn get_path_app() -> Command {
    with_common_args(Command::new("path").about("Finds a path between two facilities"))
        .arg(Arg::new(FROM_ARG_NAME).help("Sets source facility id").short('f').long(FROM_ARG_NAME).required(true))
        .arg(Arg::new(TO_ARG_NAME).help("Sets target facility id").short('d').long(TO_ARG_NAME).required(true))
}

pub fn run_path(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let get_id = |arg_name: &str| {
        matches.get_one::<String>(arg_name).cloned().ok_or_else(|| format!("'{arg_name}' argument is not set"))
    };
    let (source, target) = (get_id(FROM_ARG_NAME)?, get_id(TO_ARG_NAME)?);

    let ctx = get_routing_context(matches)?;
    let path = get_path(get_network_reader(matches)?, &ctx, source.as_str(), target.as_str())?;

    write_path(get_out_writer(matches, out_writer_func)?, path.as_ref())
}
