extern crate gtimes;
use gtimes::Year;


#[test]
fn year_1600() {
    assert!(Year(1600).is_leap_year());
}

#[test]
fn year_1900() {
    assert!(Year(1900).is_leap_year() == false);
}

#[test]
fn year_2000() {
    assert!(Year(2000).is_leap_year());
}

#[test]
fn year_2004() {
    assert!(Year(2004).is_leap_year());
}

#[test]
fn year_2038() {
    assert!(Year(2038).is_leap_year() == false);
}

#[test]
fn day_counts() {
    assert_eq!(Year(2000).days_in_year(), 366);
    assert_eq!(Year(2004).days_in_year(), 366);
    assert_eq!(Year(1900).days_in_year(), 365);
    assert_eq!(Year(2001).days_in_year(), 365);
}
