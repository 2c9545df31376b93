use super::*;
use crate::helpers::*;

#[test]
fn can_deserialize_network() {
    let network = deserialize_network(BufReader::new(std::fs::File::open(NETWORK_PATH).expect("no file"))).unwrap();

    assert_eq!(network.facilities.len(), 11);
    let farm = network.facilities.first().unwrap();
    assert_eq!(farm.id, "farm_a");
    assert_eq!(farm.type_field, FacilityType::Producer);
    assert_eq!(farm.location, Location::new(43.10, -89.60));
    assert_eq!(farm.production, Some(1200.));
    assert_eq!(farm.visible, None);
    assert_eq!(network.facilities[2].visible, Some(false));
}

#[test]
fn can_convert_facility_to_core() {
    let model = create_facility_model("r1", FacilityType::Retail, 1., 2.);

    let facility = model.to_core();

    assert_eq!(facility.id, "r1");
    assert_eq!(facility.name, "r1");
    assert_eq!(facility.kind, FacilityKind::Retail);
    assert_eq!((facility.latitude, facility.longitude), (1., 2.));
    assert!(facility.visible);
}

#[test]
fn can_read_valid_network() {
    let json = to_json(&create_chain_network());

    let facilities = read_network(BufReader::new(json.as_bytes())).unwrap();

    assert_eq!(facilities.len(), 5);
    assert_eq!(facilities[0].production, Some(700.));
    assert_eq!(facilities[4].demand, Some(200.));
}

#[test]
fn can_return_error_for_malformed_json() {
    let errors = read_network(BufReader::new("{ \"facilities\": [ { \"id\": 1 } ] }".as_bytes())).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "E0000");
    assert_eq!(errors[0].cause, "cannot deserialize network");
    assert!(errors[0].details.as_ref().is_some_and(|details| details.contains("invalid type")));
    assert!(errors[0].to_string().contains("details: '"));
}

#[test]
fn can_return_error_for_unknown_facility_type() {
    let json = r#"{ "facilities": [ { "id": "x", "type": "warehouse", "location": { "lat": 0, "lng": 0 }, "capacity": 1 } ] }"#;

    let errors = deserialize_network(BufReader::new(json.as_bytes())).unwrap_err();

    assert_eq!(errors[0].code, "E0000");
}

#[test]
fn can_serialize_network_using_type_field() {
    let json = to_json(&create_chain_network());

    assert!(json.contains("\"type\":\"producer\""));
    assert!(!json.contains("type_field"));
    assert!(!json.contains("visible"));
}
