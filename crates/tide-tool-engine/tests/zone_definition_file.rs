use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tide_tool_engine::{
    DocumentState, FeatureKind, GeometryError, Zdf, ZdfError, ZdfOptions, io,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR")))
}

fn derived_fixture_document() -> Zdf {
    let zones = io::read_feature_collection(&fixture("zones.geojson")).unwrap();
    let stations = io::read_feature_collection(&fixture("stations.geojson")).unwrap();

    let mut zdf = Zdf::new();
    zdf.populate_zones(&zones).unwrap();
    zdf.populate_stations(&stations).unwrap();
    zdf.derive_tide_zones().unwrap();
    zdf
}

#[test]
fn fixture_renders_expected_file() {
    let zdf = derived_fixture_document();
    let expected = std::fs::read_to_string(fixture("expected.zdf")).unwrap();

    assert_eq!(zdf.state(), DocumentState::Derived);
    assert_eq!(zdf.to_text(), expected);
}

#[test]
fn fixture_tide_zone_section() {
    let zdf = derived_fixture_document();

    let section: Vec<_> = zdf
        .render()
        .into_iter()
        .skip_while(|line| line != "[TIDE_ZONE]")
        .take_while(|line| !line.is_empty())
        .collect();

    insta::assert_snapshot!(section.join("\n"), @r"
[TIDE_ZONE]
zone001,tidestation001,PRIM,600,1.0,1.08,0.01
zone002,tidestation002,PRIM,600,1.0,1.08,0.01
zone002,tidestation004,PRIM,600,1.0,1.08,0.01
");
}

#[test]
fn fixture_written_to_disk_round_trips() {
    let zdf = derived_fixture_document();
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("tide_zones.zdf");

    io::write_zdf(&path, &zdf).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, zdf.to_text());
}

#[test]
fn render_is_idempotent() {
    let zdf = derived_fixture_document();

    assert_eq!(zdf.render(), zdf.render());
}

#[test]
fn rederiving_keeps_output_stable() {
    let mut zdf = derived_fixture_document();
    let before = zdf.to_text();

    zdf.derive_tide_zones().unwrap();
    zdf.derive_tide_zones().unwrap();

    assert_eq!(zdf.to_text(), before);
}

#[test]
fn invalid_zone_collection_reports_feature_index() {
    let zones = io::read_feature_collection(&fixture("invalid_zones.geojson")).unwrap();
    let mut zdf = Zdf::new();

    let error = zdf.populate_zones(&zones).unwrap_err();

    assert_eq!(
        error,
        ZdfError::InvalidFeature {
            kind: FeatureKind::Zone,
            index: 1,
            source: GeometryError::WrongType {
                expected: "Polygon",
                found: "MultiPolygon".to_string(),
            },
        }
    );
    assert_eq!(zdf.to_text(), Zdf::new().to_text());
}

#[test]
fn zones_used_as_stations_are_rejected() {
    let zones = io::read_feature_collection(&fixture("zones.geojson")).unwrap();
    let mut zdf = Zdf::new();

    let error = zdf.populate_stations(&zones).unwrap_err();

    assert!(matches!(
        error,
        ZdfError::InvalidFeature {
            kind: FeatureKind::Station,
            index: 0,
            ..
        }
    ));
}

#[test]
fn options_override_only_changes_options_section() {
    let zones = io::read_feature_collection(&fixture("zones.geojson")).unwrap();
    let mut zdf = Zdf::with_options(ZdfOptions::new(1200, 15));
    zdf.populate_zones(&zones).unwrap();

    let text = zdf.to_text();

    assert!(text.ends_with("[OPTIONS]\nOutage, 1200\nInterval, 15\n"));
    assert!(text.starts_with("[ZONE_DEF_VERSION_3]\n\n[ZONE]\nzone001,5\n"));
}
