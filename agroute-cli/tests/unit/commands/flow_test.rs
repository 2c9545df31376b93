use super::*;
use serde_json::Value;
use tempfile::NamedTempFile;

const NETWORK_PATH: &str = "data/dairy.network.json";
const CONFIG_PATH: &str = "data/config.json";

fn run_and_read<F>(app: Command, run_func: F, args: Vec<&str>) -> Value
where
    F: Fn(&ArgMatches, fn(Option<File>) -> BufWriter<Box<dyn Write>>) -> Result<(), String>,
{
    let out = NamedTempFile::new().unwrap();
    let out_path = out.path().to_string_lossy().to_string();
    let args = args.into_iter().chain(["--out-result", out_path.as_str()]).collect::<Vec<_>>();
    let matches = app.try_get_matches_from(args).unwrap();

    run_func(&matches, create_write_buffer).unwrap();

    serde_json::from_str(std::fs::read_to_string(out.path()).unwrap().as_str()).unwrap()
}

#[test]
fn can_aggregate_flow_for_visible_producers() {
    let value = run_and_read(get_flow_app(), run_flow, vec!["flow", NETWORK_PATH, "-c", CONFIG_PATH]);

    assert_eq!(value["totalPairs"], 6);
    let flows = value["flows"].as_array().expect("no flows");
    assert_eq!(value["successfulPairs"].as_u64(), Some(flows.len() as u64));
    assert!(flows.iter().all(|flow| flow["from"] != "farm_c"));
}

#[test]
fn can_find_all_paths() {
    let value = run_and_read(get_paths_app(), run_paths, vec!["paths", NETWORK_PATH, "--product", "yogurt"]);

    let paths = value.as_array().expect("paths are not an array");
    assert!(!paths.is_empty());
    assert!(paths.iter().all(|path| path["path"].as_array().is_some_and(|nodes| nodes.len() >= 2)));
}

#[test]
fn can_dispatch_subcommand_from_app() {
    let matches = get_app().try_get_matches_from(vec!["agroute", "flow", "data/unknown.network.json"]).unwrap();

    assert!(run_subcommand(matches).is_err());
}
