use super::*;

parameterized_test! {can_round_to_decimals, (value, decimals, expected), {
    assert_eq!(round_to(value, decimals), expected);
}}

can_round_to_decimals! {
    case_01_one_decimal: (22.238, 1, 22.2),
    case_02_one_decimal_up: (0.556, 1, 0.6),
    case_03_whole: (389.18, 0, 389.),
    case_04_whole_up: (9793.5, 0, 9794.),
    case_05_three_decimals: (0.66666, 3, 0.667),
}

#[test]
fn can_get_mean() {
    assert_eq!(get_mean(&[]), 0.);
    assert_eq!(get_mean(&[1., 2., 3.]), 2.);
}
