use fireworks_timer::scheduler::{AlarmError, AlarmSettings};
use fireworks_timer::ui::SetupForm;

#[test]
fn test_form_prefilled_from_settings() {
    let form = SetupForm::new(&AlarmSettings::default());
    assert_eq!(form.hour, "17");
    assert_eq!(form.minute, "00");
    assert_eq!(form.caption, "Home Time");
    assert!(form.status().is_ok());
}

#[test]
fn test_steppers_wrap_around() {
    let mut form = SetupForm::new(&AlarmSettings::new(23, 59, "x").unwrap());
    form.step_hour(1);
    form.step_minute(1);
    assert_eq!((form.hour.as_str(), form.minute.as_str()), ("00", "00"));

    form.step_hour(-1);
    form.step_minute(-1);
    assert_eq!((form.hour.as_str(), form.minute.as_str()), ("23", "59"));
}

#[test]
fn test_submit_valid_input() {
    let mut form = SetupForm::new(&AlarmSettings::default());
    form.hour = "8".into();
    form.minute = "5".into();
    form.caption = "Coffee".into();

    let settings = form.submit().unwrap();
    assert_eq!((settings.hour(), settings.minute()), (8, 5));
    assert_eq!(settings.caption(), "Coffee");
    assert_eq!(form.hour, "08");
    assert_eq!(form.minute, "05");
    assert_eq!(
        form.status().as_ref().map(String::as_str),
        Ok("Alarm set for 08:05 (Coffee)")
    );
}

#[test]
fn test_submit_invalid_input_reports_error() {
    let mut form = SetupForm::new(&AlarmSettings::default());
    form.minute = "75".into();

    assert_eq!(form.submit(), Err(AlarmError::MinuteOutOfRange(75)));
    assert!(form.status().is_err());
    // la saisie reste telle quelle pour correction
    assert_eq!(form.minute, "75");
}
