use chrono::NaiveTime;
use fireworks_timer::scheduler::alarm::{duration_until, is_due, DEFAULT_CAPTION};
use fireworks_timer::scheduler::{AlarmError, AlarmSettings};
use std::time::Duration;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_default_is_five_pm_home_time() {
    let settings = AlarmSettings::default();
    assert_eq!(settings.target(), hm(17, 0));
    assert_eq!(settings.caption(), DEFAULT_CAPTION);
    assert_eq!(settings.caption(), "Home Time");
}

#[test]
fn test_parse_accepts_trimmed_input() {
    let settings = AlarmSettings::parse(" 9 ", "05", "Standup").unwrap();
    assert_eq!((settings.hour(), settings.minute()), (9, 5));
    assert_eq!(settings.caption(), "Standup");
}

#[test]
fn test_parse_bounds() {
    assert!(AlarmSettings::parse("0", "0", "").is_ok());
    assert!(AlarmSettings::parse("23", "59", "").is_ok());

    assert_eq!(
        AlarmSettings::parse("24", "0", ""),
        Err(AlarmError::HourOutOfRange(24))
    );
    assert_eq!(
        AlarmSettings::parse("-1", "0", ""),
        Err(AlarmError::HourOutOfRange(-1))
    );
    assert_eq!(
        AlarmSettings::parse("12", "60", ""),
        Err(AlarmError::MinuteOutOfRange(60))
    );
}

#[test]
fn test_parse_rejects_non_numeric_input() {
    assert_eq!(
        AlarmSettings::parse("five", "0", ""),
        Err(AlarmError::InvalidHour("five".into()))
    );
    assert_eq!(
        AlarmSettings::parse("5", "", ""),
        Err(AlarmError::InvalidMinute("".into()))
    );
    assert_eq!(
        AlarmSettings::parse("5.5", "0", ""),
        Err(AlarmError::InvalidHour("5.5".into()))
    );
}

#[test]
fn test_error_messages_are_readable() {
    let err = AlarmSettings::new(25, 0, "x").unwrap_err();
    assert_eq!(err.to_string(), "hour 25 is out of range (0-23)");
}

#[test]
fn test_passed_target_is_due() {
    assert!(is_due(hm(17, 0), hm(17, 0)));
    assert!(is_due(hm(18, 30), hm(17, 0)));
    assert!(!is_due(hm(16, 59), hm(17, 0)));
}

#[test]
fn test_duration_until_target() {
    assert_eq!(duration_until(hm(16, 0), hm(17, 0)), Duration::from_secs(3600));
    assert_eq!(duration_until(hm(17, 1), hm(17, 0)), Duration::ZERO);
}
