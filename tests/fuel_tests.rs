use drills::{
    Console, InputError, Record,
    fuel::{self, FuelRatio, Gauge},
};

fn gauge(line: &str) -> Gauge {
    FuelRatio::read(line).expect("valid fraction").gauge()
}

#[test]
fn reads_common_fractions() {
    assert_eq!(gauge("1/2").to_string(), "50%");
    assert_eq!(gauge("1/4").to_string(), "25%");
    assert_eq!(gauge("3/4").to_string(), "75%");
}

#[test]
fn near_empty_and_near_full() {
    assert_eq!(gauge("1/1000"), Gauge::Empty);
    assert_eq!(gauge("0/5"), Gauge::Empty);
    assert_eq!(gauge("999/1000"), Gauge::Full);
    assert_eq!(gauge("4/4"), Gauge::Full);
    assert_eq!(Gauge::Empty.to_string(), "E");
    assert_eq!(Gauge::Full.to_string(), "F");
}

#[test]
fn boundaries_are_inclusive() {
    assert_eq!(Gauge::from_percentage(1.0), Gauge::Empty);
    assert_eq!(Gauge::from_percentage(99.0), Gauge::Full);
    assert_eq!(Gauge::from_percentage(1.5), Gauge::Percent(2));
    assert_eq!(Gauge::from_percentage(98.9), Gauge::Percent(99));
}

#[test]
fn rounds_half_to_even() {
    assert_eq!(Gauge::from_percentage(2.5), Gauge::Percent(2));
    assert_eq!(Gauge::from_percentage(3.5), Gauge::Percent(4));
    assert_eq!(gauge("5/8").to_string(), "62%");
    assert_eq!(gauge("3/8").to_string(), "38%");
}

#[test]
fn rejects_bad_fractions() {
    assert!(FuelRatio::read("3/2").unwrap_err().is_range());
    assert!(!FuelRatio::read("1/0").unwrap_err().is_range());
    assert!(!FuelRatio::read("0/0").unwrap_err().is_range());
    assert!(!FuelRatio::read("cat").unwrap_err().is_range());
    assert!(!FuelRatio::read("").unwrap_err().is_range());
}

#[test]
fn run_retries_silently_until_valid() {
    let mut console = Console::new("3/2\n1/0\ncat\n\n1/4\n".as_bytes(), Vec::new());
    let gauge = fuel::run(&mut console).expect("eventually valid");
    assert_eq!(gauge, Gauge::Percent(25));
    assert_eq!(
        String::from_utf8(console.into_writer()).unwrap(),
        "Fraction: Fraction: Fraction: Fraction: Fraction: 25%\n"
    );
}

#[test]
fn run_stops_abruptly_at_end_of_input() {
    let mut console = Console::new("5/4\n".as_bytes(), Vec::new());
    let err = fuel::run(&mut console).expect_err("no valid fraction");
    assert!(matches!(err, InputError::EndOfInput));
}

#[test]
fn fractions_of_any_width() {
    assert_eq!(gauge("99999999999999999999/99999999999999999999"), Gauge::Full);
    assert_eq!(gauge("1/100000000000000000000"), Gauge::Empty);
    assert_eq!(
        gauge("50000000000000000000/100000000000000000000").to_string(),
        "50%"
    );

    let huge = format!("{0}/{0}0", "1".repeat(400));
    assert_eq!(gauge(&huge).to_string(), "10%");

    assert!(
        FuelRatio::read("100000000000000000001/100000000000000000000")
            .unwrap_err()
            .is_range()
    );
}

#[test]
fn run_accepts_wide_fraction_without_reprompting() {
    let mut console = Console::new(
        "99999999999999999999/99999999999999999999\n".as_bytes(),
        Vec::new(),
    );
    assert_eq!(fuel::run(&mut console).expect("valid"), Gauge::Full);
    assert_eq!(String::from_utf8(console.into_writer()).unwrap(), "Fraction: F\n");
}
