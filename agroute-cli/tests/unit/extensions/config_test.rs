use super::*;
use crate::helpers::CONFIG_PATH;
use std::fs::File;

fn parse_config(json: &str) -> Config {
    read_config(BufReader::new(json.as_bytes())).expect("cannot read config")
}

#[test]
fn can_read_full_config() {
    let config = read_config(BufReader::new(File::open(CONFIG_PATH).expect("no config file"))).unwrap();

    assert_eq!(config.ambient_temperature, Some(18.5));
    assert_eq!(config.product.as_deref(), Some("milk"));
    let weights = config.weights.as_ref().unwrap();
    assert_eq!(weights.spoilage_risk, Some(0.3));
    assert_eq!(config.parallelism.as_ref().and_then(|p| p.threads), Some(2));
    assert_eq!(config.logging.as_ref().map(|l| l.enabled), Some(false));
}

#[test]
fn can_create_default_context() {
    let ctx = create_routing_context(&Config::default()).unwrap();

    assert_eq!(ctx.ambient_temp, 25.);
    assert_eq!(ctx.product, ProductKind::Milk);
    assert_eq!(ctx.weights, OptimizationWeights::default());
    assert!(ctx.environment.parallelism.is_enabled());
}

#[test]
fn can_merge_partial_weights_with_defaults() {
    let config = parse_config(r#"{ "weights": { "cost": 1.0 }, "parallelism": { "enabled": false } }"#);

    let ctx = create_routing_context(&config).unwrap();

    assert_eq!(ctx.weights, OptimizationWeights::new(0.3, 0.3, 1., 0.2));
    assert!(!ctx.environment.parallelism.is_enabled());
}

#[test]
fn can_create_dedicated_pool_when_threads_are_not_set() {
    let config = parse_config(r#"{ "parallelism": { "enabled": true } }"#);

    let ctx = create_routing_context(&config).unwrap();

    assert!(matches!(ctx.environment.parallelism, Parallelism::Pool(_)));
}

#[test]
fn can_fallback_to_milk_for_unknown_product() {
    let config = parse_config(r#"{ "product": "kefir", "ambientTemperature": 4 }"#);

    let ctx = create_routing_context(&config).unwrap();

    assert_eq!(ctx.product, ProductKind::Milk);
    assert_eq!(ctx.ambient_temp, 4.);
}

#[test]
fn can_reject_negative_weights() {
    let config = parse_config(r#"{ "weights": { "distance": -1.0, "time": 0.5, "spoilageRisk": -0.1 } }"#);

    let errors = validate_config(&config).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "E1200");
    assert_eq!(errors[0].cause, "invalid optimization weights: distance, spoilageRisk");
    assert!(create_routing_context(&config).is_err());
}

#[test]
fn can_reject_malformed_config() {
    assert!(read_config(BufReader::new("{ \"weights\": 1 }".as_bytes())).is_err());
}
