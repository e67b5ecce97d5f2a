use super::*;

use tourdb_search::SearchResult;

#[test]
fn parses_nearby_command_with_negative_longitude() {
    let cli = Cli::try_parse_from([
        "tourdb-cli",
        "nearby",
        "--lat",
        "40.7128",
        "--lng",
        "-74.006",
        "--radius-km",
        "2.5",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Nearby {
            lat,
            lng,
            radius_km,
            page,
            caller,
            json,
        }) => {
            assert!((lat - 40.7128).abs() < f64::EPSILON);
            assert!((lng + 74.006).abs() < f64::EPSILON);
            assert_eq!(radius_km, Some(2.5));
            assert_eq!(page, 1);
            assert_eq!(caller, None);
            assert!(!json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_search_command_without_origin() {
    let cli = Cli::try_parse_from([
        "tourdb-cli",
        "search",
        "--keyword",
        "Gangnam",
        "--page",
        "2",
        "--caller",
        "42",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            ref keyword,
            lat: None,
            lng: None,
            page: 2,
            caller: Some(42),
            json: false,
        }) if keyword == "Gangnam"
    ));
}

#[test]
fn search_requires_both_coordinates() {
    let result = Cli::try_parse_from([
        "tourdb-cli",
        "search",
        "--keyword",
        "Seoul",
        "--lat",
        "37.5",
    ]);
    assert!(result.is_err());
}

#[test]
fn nearby_requires_coordinates() {
    assert!(Cli::try_parse_from(["tourdb-cli", "nearby", "--lat", "37.5"]).is_err());
}

#[test]
fn parses_migrate_and_seed_commands() {
    let cli = Cli::try_parse_from(["tourdb-cli", "migrate"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Migrate)));

    let cli = Cli::try_parse_from(["tourdb-cli", "seed", "--file", "places.json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Seed { ref file }) if file.as_os_str() == "places.json"
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["tourdb-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

fn result(distance_km: Option<f64>, bookmark_status: bool) -> SearchResult {
    SearchResult {
        place_id: 7,
        name: "Gyeongbokgung".to_string(),
        country_name: "Korea".to_string(),
        city_name: "Seoul".to_string(),
        district_name: "Jongno".to_string(),
        address: "161 Sajik-ro".to_string(),
        detail_address: None,
        latitude: 37.5796,
        longitude: 126.977,
        bookmark_count: 0,
        distance_km,
        thumbnail_url: None,
        bookmark_status,
    }
}

#[test]
fn table_row_aligns_with_header() {
    let header = search::table_header();
    let row = search::table_row(&result(Some(1.4), true));

    assert_eq!(header.find("NAME"), row.find("Gyeongbokgung"));
    assert!(row.contains("1.4"));
    assert!(row.contains("yes"));
}

#[test]
fn table_row_marks_missing_distance() {
    let row = search::table_row(&result(None, false));
    assert!(row.starts_with("7       -         "), "{row}");
    assert!(row.contains("no"));
}

#[test]
fn read_seed_file_reports_missing_file() {
    let err = db::read_seed_file(std::path::Path::new("/nonexistent/places.json"))
        .expect_err("missing file");
    assert!(err.to_string().contains("failed to read seed file"));
}

#[test]
fn read_seed_file_parses_bundled_fixture() {
    let path =
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/seoul_places.json");
    let places = db::read_seed_file(&path).expect("bundled fixture parses");

    assert_eq!(places.len(), 6);
    assert_eq!(places[1].bookmarked_by, vec![42]);
    assert_eq!(places[3].detail_address.as_deref(), Some("Hall A"));
}
