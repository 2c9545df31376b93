use super::*;
use proptest::prelude::*;

parameterized_test! {can_calculate_distance_between_two_locations, (from, to, expected), {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    assert_approx_eq!(distance_km(lat1, lng1, lat2, lng2), expected, 0.01);
}}

can_calculate_distance_between_two_locations! {
    case_01_same_point: ((52.52, 13.45), (52.52, 13.45), 0.),
    case_02_city: ((52.52599, 13.45413), (52.5165, 13.3808), 5.07),
    case_03_capitals: ((51.5074, -0.1278), (48.8566, 2.3522), 343.56),
    case_04_one_degree_on_equator: ((0., 0.), (0., 1.), 111.19),
    case_05_tenth_degree: ((0., 0.), (0.1, 0.), 11.12),
}

proptest! {
    #[test]
    fn can_get_symmetric_distance(lat1 in -90_f64..90., lng1 in -180_f64..180., lat2 in -90_f64..90., lng2 in -180_f64..180.) {
        let forward = distance_km(lat1, lng1, lat2, lng2);
        let backward = distance_km(lat2, lng2, lat1, lng1);

        prop_assert!((forward - backward).abs() < 1E-6);
        prop_assert!(forward >= 0.);
    }

    #[test]
    fn can_get_zero_distance_for_same_point(lat in -90_f64..90., lng in -180_f64..180.) {
        prop_assert_eq!(distance_km(lat, lng, lat, lng), 0.);
    }
}
