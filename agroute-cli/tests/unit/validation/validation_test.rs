use super::*;
use crate::helpers::*;

fn get_codes(network: &Network) -> Vec<String> {
    ValidationContext::new(network).validate().err().unwrap_or_default().into_iter().map(|err| err.code).collect()
}

#[test]
fn can_accept_valid_network() {
    assert!(ValidationContext::new(&create_chain_network()).validate().is_ok());
}

#[test]
fn can_detect_duplicated_ids() {
    let mut network = create_chain_network();
    network.facilities.push(create_facility_model("c", FacilityType::Collection, 0., 0.));
    network.facilities.push(create_facility_model("c", FacilityType::Collection, 0., 0.));

    let errors = ValidationContext::new(&network).validate().unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "E1000");
    assert_eq!(errors[0].cause, "duplicated facility ids: c");
}

#[test]
fn can_detect_invalid_coordinates() {
    let mut network = create_chain_network();
    network.facilities[0].location.lat = 91.;
    network.facilities[1].location.lng = f64::NAN;
    network.facilities[2].location.lng = -180.;

    let errors = ValidationContext::new(&network).validate().unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "E1001");
    assert_eq!(errors[0].cause, "invalid coordinates: c, p");
}

#[test]
fn can_detect_negative_amounts() {
    let mut network = create_chain_network();
    network.facilities[1].capacity = -1.;
    network.facilities[4].demand = Some(-10.);

    assert_eq!(get_codes(&network), vec!["E1002"]);
}

#[test]
fn can_detect_misplaced_production_and_demand() {
    let mut network = create_chain_network();
    network.facilities[1].production = Some(10.);
    network.facilities[0].demand = Some(10.);

    let errors = ValidationContext::new(&network).validate().unwrap_err();

    assert_eq!(errors[0].code, "E1003");
    assert_eq!(errors[0].cause, "misplaced production or demand: c, p");
}

#[test]
fn can_collect_multiple_errors() {
    let mut network = create_chain_network();
    network.facilities[1].id = "p".to_string();
    network.facilities[2].location.lat = -100.;
    network.facilities[3].demand = Some(1.);

    assert_eq!(get_codes(&network), vec!["E1000", "E1001", "E1003"]);
}
