use approx::assert_relative_eq;
use geodistance::{parse_records, DistanceFilter, GeoError};

fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_sample_has_44_records() {
    let records = parse_records(&load_fixture("cities-sample.json")).unwrap();
    assert_eq!(records.len(), 44);
}

#[test]
fn test_three_sample_cities_within_500km_of_dublin() {
    let records = parse_records(&load_fixture("cities-sample.json")).unwrap();
    let filter = DistanceFilter::default();

    let names = filter.filter_within_radius(&records, 500.0);
    assert_eq!(names, vec!["Aberdeen", "Birmingham", "Leeds"]);
}

#[test]
fn test_sample_result_is_sorted() {
    let records = parse_records(&load_fixture("cities-sample.json")).unwrap();
    let filter = DistanceFilter::default();

    // wide enough to take every European city in the sample
    let names = filter.filter_within_radius(&records, 3000.0);
    assert!(names.len() > 3);
    assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_sample_distances() {
    let records = parse_records(&load_fixture("cities-sample.json")).unwrap();
    let filter = DistanceFilter::default();

    let aberdeen = records.iter().find(|r| r.name == "Aberdeen").unwrap();
    assert_relative_eq!(
        filter.calculate_distance(aberdeen.latitude, aberdeen.longitude),
        499.716888643048,
        max_relative = 1e-12
    );

    let minneapolis = records.iter().find(|r| r.name == "Minneapolis").unwrap();
    let distance = filter.calculate_distance(minneapolis.latitude, minneapolis.longitude);
    assert!((5994.0..5995.0).contains(&distance));
}

#[test]
fn test_invalid_fixture_is_parse_error() {
    let result = parse_records(&load_fixture("cities-invalid.json"));
    assert!(matches!(result, Err(GeoError::ParseError { .. })));
}
