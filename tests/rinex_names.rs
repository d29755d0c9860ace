extern crate gtimes;

use gtimes::{LocalDate, LocalTime, LocalDateTime, Month, RinexFormat};
use gtimes::cal::fmt::rinex::FormatError;


fn sample() -> LocalDateTime {
    LocalDateTime::new(
        LocalDate::ymd(2023, Month::August, 25).unwrap(),
        LocalTime::hms(13, 5, 0).unwrap())
}


#[test]
fn daily_observation_file() {
    let format = RinexFormat::parse("%s%j0.%yO").unwrap();
    assert_eq!(format.format(&sample(), "REYK"), "reyk2370.23O");
}

#[test]
fn daily_navigation_file() {
    let format = RinexFormat::parse("%s%j0.%yN").unwrap();
    assert_eq!(format.format(&sample(), "HOFN"), "hofn2370.23N");
}

#[test]
fn hourly_file_session_letters() {
    let format = RinexFormat::parse("%s%j%a.%yO").unwrap();

    let midnight = LocalDateTime::new(sample().date(), LocalTime::midnight());
    assert_eq!(format.format(&midnight, "VMEY"), "vmey237a.23O");
    assert_eq!(format.format(&sample(),  "VMEY"), "vmey237n.23O");

    let last_hour = LocalDateTime::new(sample().date(), LocalTime::hms(23, 0, 0).unwrap());
    assert_eq!(format.format(&last_hour, "VMEY"), "vmey237x.23O");
}

#[test]
fn long_form_names() {
    let format = RinexFormat::parse("%S_%Y-%m-%d_%H%M").unwrap();
    assert_eq!(format.format(&sample(), "reyk"), "REYK_2023-08-25_1305");
}

#[test]
fn station_code_normalisation() {
    let format = RinexFormat::parse("%s").unwrap();
    assert_eq!(format.format(&sample(), "AK"),     "ak__");
    assert_eq!(format.format(&sample(), "AKUREY"), "akur");
}

#[test]
fn percent_escapes() {
    let format = RinexFormat::parse("%j%%").unwrap();
    assert_eq!(format.format(&sample(), "REYK"), "237%");
}

#[test]
fn pattern_errors() {
    assert_eq!(RinexFormat::parse("%q"), Err(FormatError::InvalidChar { c: 'q', pos: 1 }));
    assert_eq!(RinexFormat::parse("%s%j0.%"), Err(FormatError::TrailingPercent { pos: 6 }));
}
