use super::*;
use serde_json::Value;
use tempfile::NamedTempFile;

const NETWORK_PATH: &str = "data/dairy.network.json";
const CONFIG_PATH: &str = "data/config.json";

fn run_with_output(args: Vec<&str>) -> Result<Value, String> {
    let out = NamedTempFile::new().map_err(|err| err.to_string())?;
    let out_path = out.path().to_string_lossy().to_string();
    let args = args.into_iter().chain(["-o", out_path.as_str()]).collect::<Vec<_>>();
    let matches = get_path_app().try_get_matches_from(args).map_err(|err| err.to_string())?;

    run_path(&matches, create_write_buffer)?;

    let content = std::fs::read_to_string(out.path()).map_err(|err| err.to_string())?;
    serde_json::from_str(content.as_str()).map_err(|err| err.to_string())
}

#[test]
fn can_find_path_between_producer_and_retailer() {
    let value = run_with_output(vec!["path", NETWORK_PATH, "-c", CONFIG_PATH, "-f", "farm_a", "--to", "shop_1"]).unwrap();

    let nodes = value["path"].as_array().expect("no path");
    assert_eq!(nodes.first().and_then(Value::as_str), Some("farm_a"));
    assert_eq!(nodes.last().and_then(Value::as_str), Some("shop_1"));
    assert_eq!(value["edges"].as_array().map(|edges| edges.len()), Some(nodes.len() - 1));
}

#[test]
fn can_write_null_when_no_path_exists() {
    let value = run_with_output(vec!["path", NETWORK_PATH, "--from", "shop_1", "--to", "farm_a"]).unwrap();

    assert!(value.is_null());
}

#[test]
fn can_return_error_for_unknown_facility() {
    let err = run_with_output(vec!["path", NETWORK_PATH, "--from", "farm_a", "--to", "shop_42"]).unwrap_err();

    assert!(err.contains("E1100"));
}

#[test]
fn can_use_short_flags_for_ids() {
    let value = run_with_output(vec!["path", NETWORK_PATH, "-f", "col_west", "-d", "plant"]).unwrap();

    assert_eq!(value["path"], serde_json::json!(["col_west", "plant"]));
}

#[test]
fn can_require_both_ids() {
    assert!(get_path_app().try_get_matches_from(vec!["path", NETWORK_PATH, "--from", "farm_a"]).is_err());
}
