use chrono::{NaiveDate, NaiveTime};
use cellfmt::{DateSystem, FormatOptions, NumberFormat, Value};

#[test]
fn test_value_from_f64() {
    let v: Value = 42.5.into();
    assert!(matches!(v, Value::Number(n) if (n - 42.5).abs() < f64::EPSILON));
}

#[test]
fn test_value_from_i64() {
    let v: Value = 42i64.into();
    assert_eq!(v.as_number(), Some(42.0));
}

#[test]
fn test_value_from_str() {
    let v: Value = "hello".into();
    assert_eq!(v.as_text(), Some("hello"));
    assert_eq!(v.type_name(), "text");
}

#[test]
fn test_value_from_bool_and_unit() {
    let v: Value = true.into();
    assert!(matches!(v, Value::Bool(true)));
    let v: Value = ().into();
    assert!(v.is_empty());
}

#[test]
fn test_chrono_values_to_serial() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
    assert_eq!(Value::from(date).to_serial(DateSystem::Date1900), Some(46031.0));
    assert_eq!(Value::from(date).to_serial(DateSystem::Date1904), Some(44569.0));

    let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
    assert_eq!(Value::from(time).to_serial(DateSystem::Date1900), Some(0.75));

    let datetime = date.and_time(time);
    assert_eq!(Value::from(datetime).to_serial(DateSystem::Date1900), Some(46031.75));
}

#[test]
fn test_format_chrono_value() {
    let fmt = NumberFormat::parse("yyyy-mm-dd hh:mm");
    let opts = FormatOptions::default();
    let datetime = NaiveDate::from_ymd_opt(2026, 1, 9)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap();
    assert_eq!(fmt.format_value(&Value::from(datetime), &opts), "2026-01-09 18:30");
}

#[test]
fn test_date_before_epoch_renders_empty() {
    let fmt = NumberFormat::parse("yyyy-mm-dd");
    let opts = FormatOptions::default();
    let date = NaiveDate::from_ymd_opt(1850, 1, 1).unwrap();
    assert_eq!(fmt.format_value(&Value::from(date), &opts), "");
}
