use airglobe::{AirportIndex, AirportReader, Error, ReaderOptions, Warning};
use claims::{assert_matches, assert_some};
use insta::assert_snapshot;

const FIXTURE: &str = "tests/fixtures/airports.csv";

#[test]
fn parse_airports_fixture() {
    let mut reader = AirportReader::from_path(FIXTURE).expect("Failed to open fixture file");
    let mut warnings = Vec::new();

    let airports: Vec<_> = reader
        .read_airports(&mut warnings)
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to parse airports");

    assert_eq!(airports.len(), 11);

    let summary: Vec<_> = airports.iter().map(ToString::to_string).collect();
    assert_snapshot!(summary.join("\n"), @r"
    Charles de Gaulle International Airport (CDG) at 49.0128, 2.5500
    John F Kennedy International Airport (JFK) at 40.6398, -73.7789
    Zürich Airport (ZRH) at 47.4647, 8.5492
    Auckland International Airport (AKL) at -37.0081, 174.7917
    Licenciado Benito Juarez International Airport (MEX) at 19.4363, -99.0721
    London Heathrow Airport (LHR) at 51.4706, -0.4619
    Tokyo Haneda International Airport (HND) at 35.5523, 139.7800
    Daniel K Inouye International Airport (HNL) at 21.3206, -157.9242
    Sydney Kingsford Smith International Airport (SYD) at -33.9461, 151.1770
    Guarulhos - Governador Andre Franco Montoro International Airport (GRU) at -23.4356, -46.4731
    Washington Dulles, International Airport (IAD) at 38.9445, -77.4558
    ");

    assert_eq!(
        warnings,
        vec![
            Warning::MissingIataCode { line: 6 },
            Warning::MissingCoordinates { line: 9 },
        ]
    );
}

#[test]
fn index_from_fixture() {
    let mut warnings = Vec::new();
    let index = AirportIndex::from_path(FIXTURE, ReaderOptions::default(), &mut warnings)
        .expect("Failed to build index");

    assert_eq!(index.len(), 11);
    assert_eq!(warnings.len(), 2);

    let zrh = assert_some!(index.by_code("ZRH"));
    assert_eq!(zrh.name, "Zürich Airport");

    // A quoted comma does not shift the later columns
    let iad = assert_some!(index.by_code("IAD"));
    assert_eq!(iad.name, "Washington Dulles, International Airport");
    assert_eq!(index.by_code("KIAD"), None);

    // Rows of other categories are not indexed
    assert_eq!(index.by_code("VIY"), None);
    // Neither are rows without usable coordinates
    assert_eq!(index.by_code("NUL"), None);
}

#[test]
fn select_other_airport_kind() {
    let options = ReaderOptions {
        airport_kind: "medium_airport".to_string(),
    };

    let mut warnings = Vec::new();
    let index =
        AirportIndex::from_path(FIXTURE, options, &mut warnings).expect("Failed to build index");

    let codes: Vec<_> = index.iter().map(|airport| airport.iata_code.as_str()).collect();
    assert_eq!(codes, ["VIY"]);
    assert_eq!(warnings, vec![]);
}

#[test]
fn missing_file() {
    assert_matches!(
        AirportReader::from_path("tests/fixtures/does-not-exist.csv"),
        Err(Error::IoError(_))
    );
}
