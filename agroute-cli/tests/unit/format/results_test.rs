use super::*;
use agroute_core::models::VehicleKind;
use serde_json::Value;

fn create_link(from: &str, to: &str, distance_km: f64) -> Link {
    Link {
        from: from.to_string(),
        to: to.to_string(),
        distance_km,
        time_hours: distance_km / 40.,
        cost: distance_km * 15.,
        spoilage_risk: 0.4,
        vehicle: VehicleKind::MilkTanker,
        capacity: 700.,
    }
}

fn write_to_value<F>(write_func: F) -> Value
where
    F: FnOnce(BufWriter<&mut Vec<u8>>) -> Result<(), String>,
{
    let mut buffer = Vec::new();
    write_func(BufWriter::new(&mut buffer)).expect("cannot write result");

    serde_json::from_slice(buffer.as_slice()).expect("cannot parse result")
}

#[test]
fn can_write_links_in_camel_case() {
    let links = vec![create_link("farm", "collection", 20.)];

    let value = write_to_value(|writer| write_links(writer, &links));

    let link = &value[0];
    assert_eq!(link["from"], "farm");
    assert_eq!(link["distanceKm"], 20.);
    assert_eq!(link["timeHours"], 0.5);
    assert_eq!(link["costCurrency"], 300.);
    assert_eq!(link["spoilageRiskPercent"], 0.4);
    assert_eq!(link["vehicleType"], "milk_tanker");
    assert_eq!(link["capacity"], 700.);
}

#[test]
fn can_write_path() {
    let path = PathResult::new(
        "farm",
        "plant",
        vec!["farm".to_string(), "collection".to_string(), "plant".to_string()],
        vec![create_link("farm", "collection", 20.), create_link("collection", "plant", 60.)],
    );

    let value = write_to_value(|writer| write_path(writer, Some(&path)));

    assert_eq!(value["path"], serde_json::json!(["farm", "collection", "plant"]));
    assert_eq!(value["edges"].as_array().map(|edges| edges.len()), Some(2));
    assert_eq!(value["totalDistance"], 80.);
    assert_eq!(value["totalTime"], 2.);
    assert_eq!(value["totalCost"], 1200.);
    assert_eq!(value["totalSpoilageRisk"], 0.4);
    assert_eq!(value["isOptimal"], true);
}

#[test]
fn can_write_missing_path_as_null() {
    let value = write_to_value(|writer| write_path(writer, None));

    assert!(value.is_null());
}

#[test]
fn can_write_flow_result() {
    let path = PathResult::new("farm", "shop", vec!["farm".to_string(), "shop".to_string()], vec![]);
    let result = FlowResult {
        flows: vec![FlowEntry { producer: "farm".to_string(), retailer: "shop".to_string(), volume: 250., path }],
        total_cost: 1000.,
        total_time: 2.5,
        average_spoilage_risk: 1.2,
        network_efficiency: 90.4,
        successful_pairs: 1,
        total_pairs: 2,
        path_success_rate: 0.5,
        performance_score: 93.8,
    };

    let value = write_to_value(|writer| write_flow(writer, &result));

    assert_eq!(value["flows"][0]["from"], "farm");
    assert_eq!(value["flows"][0]["to"], "shop");
    assert_eq!(value["flows"][0]["volume"], 250.);
    assert_eq!(value["flows"][0]["path"]["path"], serde_json::json!(["farm", "shop"]));
    assert_eq!(value["averageSpoilageRisk"], 1.2);
    assert_eq!(value["networkEfficiency"], 90.4);
    assert_eq!(value["successfulPairs"], 1);
    assert_eq!(value["totalPairs"], 2);
    assert_eq!(value["pathSuccessRate"], 0.5);
    assert_eq!(value["performanceScore"], 93.8);
}
