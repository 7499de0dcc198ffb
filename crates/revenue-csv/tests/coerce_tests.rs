use chrono::{NaiveTime, TimeZone, Utc};
use revenue_csv::{
    BoolWords, NumberFormat, coerce_bool, coerce_bool_with, coerce_date, coerce_float,
    coerce_float_with, coerce_int, coerce_long, coerce_time,
};
use rstest::rstest;

#[test]
fn test_absent_values_are_absent() {
    assert_eq!(coerce_int(None), None);
    assert_eq!(coerce_long(None), None);
    assert_eq!(coerce_float(None), None);
    assert_eq!(coerce_date(None), None);
    assert_eq!(coerce_time(None), None);
}

#[rstest]
#[case("42", Some(42))]
#[case("-7", Some(-7))]
#[case("+5", Some(5))]
#[case("2147483648", None)]
#[case("4.2", None)]
#[case("", None)]
#[case("forty", None)]
fn test_coerce_int(#[case] raw: &str, #[case] expected: Option<i32>) {
    assert_eq!(coerce_int(Some(raw)), expected);
}

#[test]
fn test_coerce_long_beyond_i32() {
    assert_eq!(coerce_long(Some("2147483648")), Some(2_147_483_648));
    assert_eq!(coerce_long(Some("12 km")), None);
}

#[rstest]
#[case("12.5", Some(12.5))]
#[case("1,234.5", Some(1234.5))]
#[case("-0.25", Some(-0.25))]
#[case("1e3", Some(1000.0))]
#[case("abc", None)]
#[case("NaN", None)]
#[case("inf", None)]
#[case("", None)]
fn test_coerce_float(#[case] raw: &str, #[case] expected: Option<f32>) {
    assert_eq!(coerce_float(Some(raw)), expected);
}

#[test]
fn test_coerce_float_with_comma_decimal() {
    let european = NumberFormat::new(',', '.');
    assert_eq!(coerce_float_with(Some("1.234,5"), &european), Some(1234.5));
    assert_eq!(coerce_float_with(Some("0,19"), &european), Some(0.19));
}

#[test]
fn test_coerce_date_delegates_to_inference() {
    assert_eq!(
        coerce_date(Some("2023-04-05")),
        Some(Utc.with_ymd_and_hms(2023, 4, 5, 0, 0, 0).unwrap())
    );
    assert_eq!(coerce_date(Some("someday")), None);
}

#[rstest]
#[case("9:30", Some((9, 30, 0)))]
#[case("09:30:15", Some((9, 30, 15)))]
#[case("0930", Some((9, 30, 0)))]
#[case("25:00", None)]
#[case("930", None)]
#[case("half past nine", None)]
fn test_coerce_time(#[case] raw: &str, #[case] expected: Option<(u32, u32, u32)>) {
    let expected = expected.map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap());
    assert_eq!(coerce_time(Some(raw)), expected);
}

#[rstest]
#[case(Some("Yes"), false, true)]
#[case(Some("0"), true, false)]
#[case(Some("maybe"), true, true)]
#[case(Some("maybe"), false, false)]
#[case(Some("TRUE"), false, true)]
#[case(Some("1"), false, true)]
#[case(Some("No"), true, false)]
#[case(Some("false"), true, false)]
#[case(Some("no"), false, false)]
#[case(Some("yes"), true, true)]
#[case(None, true, true)]
#[case(None, false, false)]
fn test_coerce_bool(#[case] raw: Option<&str>, #[case] default: bool, #[case] expected: bool) {
    assert_eq!(coerce_bool(raw, default), expected);
}

#[test]
fn test_coerce_bool_localized() {
    let german = BoolWords::new("Ja", "Nein");
    assert!(coerce_bool_with(Some("ja"), false, &german));
    assert!(!coerce_bool_with(Some("NEIN"), true, &german));
    assert!(!coerce_bool_with(Some("0"), true, &german));
    assert!(coerce_bool_with(Some("oui"), true, &german));
}
