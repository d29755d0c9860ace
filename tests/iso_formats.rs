extern crate gtimes;

use gtimes::{LocalDate, LocalTime, LocalDateTime, Month, ISO};


#[test]
fn a_date() {
    let date = LocalDate::ymd(1600, Month::February, 28).unwrap();
    assert_eq!(format!("{}", date.iso()), "1600-02-28");
}

#[test]
fn a_negative_year() {
    let date = LocalDate::ymd(-753, Month::December, 1).unwrap();
    assert_eq!(format!("{}", date.iso()), "-0753-12-01");
}

#[test]
fn a_far_future_year() {
    let date = LocalDate::ymd(10601, Month::January, 31).unwrap();
    assert_eq!(format!("{}", date.iso()), "+10601-01-31");
}

#[test]
fn a_time() {
    let time = LocalTime::hms(12, 0, 0).unwrap();
    assert_eq!(format!("{}", time.iso()), "12:00:00.000000");
}

#[test]
fn a_time_with_microseconds() {
    let time = LocalTime::hms_us(14, 30, 45, 123456).unwrap();
    assert_eq!(format!("{}", time.iso()), "14:30:45.123456");
}

#[test]
fn a_datetime() {
    let when = LocalDateTime::new(
        LocalDate::ymd(2009, Month::February, 13).unwrap(),
        LocalTime::hms(23, 31, 30).unwrap());

    assert_eq!(format!("{}", when.iso()), "2009-02-13T23:31:30.000000");
}
