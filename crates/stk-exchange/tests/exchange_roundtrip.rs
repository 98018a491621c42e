use pretty_assertions::assert_eq;
use proptest::prelude::*;
use stk_exchange::{
    from_csv, from_json, from_xml, to_csv, to_json, to_xml, ExchangeError, ExchangeLayer,
    ExportFormat, ImportError, SerializeError,
};
use stk_model::{Attribute, Fingerprint, TemplateDraft};
use stk_test_utils::{arb_draft, clean_pump, pump_a};
use tempfile::TempDir;

#[test]
fn pump_a_exports_in_every_format() {
    let draft = pump_a();

    let csv = to_csv(&draft).unwrap();
    assert_eq!(csv, "Name,Type,Description\n\"Flow\",\"AI_REAL\",\"\"");

    let json = to_json(&draft).unwrap();
    assert_eq!(from_json(&json).unwrap(), draft);

    let xml = to_xml(&draft).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert_eq!(from_xml(&xml).unwrap(), draft);
}

#[test]
fn csv_import_carries_attributes_only() {
    let draft = clean_pump();
    let back = from_csv(&to_csv(&draft).unwrap()).unwrap();
    assert_eq!(back.attributes, draft.attributes);
    assert!(back.name.is_empty());
    assert!(back.description.is_empty());
}

#[test]
fn legacy_json_payload_is_not_xml() {
    let json = to_json(&pump_a()).unwrap();
    assert!(from_xml(&json).is_err());
}

#[tokio::test]
async fn export_then_import_through_files() {
    let dir = TempDir::new().unwrap();
    let layer = ExchangeLayer::new();
    let draft = clean_pump();

    for format in ExportFormat::ALL {
        let path = dir.path().join(format.file_name_for(&draft.name));
        let receipt = layer.export_file(&draft, &path).await.unwrap();
        assert_eq!(receipt.format, format);

        let imported = layer.import_file(&path).await.unwrap();
        assert_eq!(imported.source.format, format);
        assert_eq!(imported.source.checksum, receipt.checksum);
        assert_eq!(imported.draft.name, draft.name);
        assert_eq!(imported.draft.attributes, draft.attributes);
        if format.carries_header() {
            assert_eq!(imported.draft, draft);
        }
    }
}

#[tokio::test]
async fn csv_import_names_draft_after_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("BoosterPump.csv");
    tokio::fs::write(&path, "Name,Type,Description\nFlow,AI_REAL,Flow rate\n")
        .await
        .unwrap();

    let imported = ExchangeLayer::new().import_file(&path).await.unwrap();
    assert_eq!(imported.draft.name, "BoosterPump");
    assert_eq!(
        imported.source.checksum,
        Fingerprint::compute(b"Name,Type,Description\nFlow,AI_REAL,Flow rate\n")
    );
}

#[tokio::test]
async fn oversized_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Big.json");
    tokio::fs::write(&path, to_json(&clean_pump()).unwrap()).await.unwrap();

    let layer = ExchangeLayer::new().with_max_file_size(16);
    let err = layer.import_file(&path).await.unwrap_err();
    assert!(matches!(err, ImportError::TooLarge { max: 16, .. }), "{err}");
}

#[tokio::test]
async fn malformed_file_imports_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Broken.xml");
    tokio::fs::write(&path, "<Template name=\"Broken\"><Attributes><Attribute name=\"Flow\"/>")
        .await
        .unwrap();

    assert!(ExchangeLayer::new().import_file(&path).await.is_err());
}

#[tokio::test]
async fn export_needs_known_extension() {
    let dir = TempDir::new().unwrap();
    let err = ExchangeLayer::new()
        .export_file(&pump_a(), dir.path().join("PumpA.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, SerializeError::UnsupportedPath(_)));
}

#[tokio::test]
async fn malformed_draft_writes_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Bad.csv");
    let draft = TemplateDraft::new("Bad").with_attribute(Attribute::new("", "AI_REAL"));

    assert!(ExchangeLayer::new().export_file(&draft, &path).await.is_err());
    assert!(!path.exists());
}

#[tokio::test]
async fn convert_csv_file_to_xml() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("Booster.csv");
    let target = dir.path().join("booster.out");
    tokio::fs::write(&source, "Name,Type,Description\nFlow,AI_REAL,Flow rate\n")
        .await
        .unwrap();

    let receipt = ExchangeLayer::new()
        .convert_file(&source, &target, ExportFormat::Xml)
        .await
        .unwrap();
    assert_eq!(receipt.format, ExportFormat::Xml);

    let written = from_xml(&tokio::fs::read_to_string(&target).await.unwrap()).unwrap();
    assert_eq!(written.name, "Booster");
    assert_eq!(written.attributes.len(), 1);
}

#[tokio::test]
async fn failed_conversion_reports_its_side() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("out.json");

    let err = ExchangeLayer::new()
        .convert_file(dir.path().join("Missing.csv"), &target, ExportFormat::Json)
        .await
        .unwrap_err();
    assert!(matches!(err, ExchangeError::Import(ImportError::Io { .. })));
    assert!(!target.exists());

    let source = dir.path().join("Ok.json");
    tokio::fs::write(&source, to_json(&pump_a()).unwrap()).await.unwrap();
    let err = ExchangeLayer::new()
        .convert_file(&source, dir.path().join("no-such-dir").join("out.xml"), ExportFormat::Xml)
        .await
        .unwrap_err();
    assert!(matches!(err, ExchangeError::Serialize(SerializeError::Io { .. })));
}

proptest! {
    #[test]
    fn prop_json_round_trip(draft in arb_draft()) {
        let back = from_json(&to_json(&draft).unwrap()).unwrap();
        prop_assert_eq!(back, draft);
    }

    #[test]
    fn prop_xml_round_trip(draft in arb_draft()) {
        let back = from_xml(&to_xml(&draft).unwrap()).unwrap();
        prop_assert_eq!(back, draft);
    }

    #[test]
    fn prop_csv_has_one_line_per_attribute(draft in arb_draft()) {
        let csv = to_csv(&draft).unwrap();
        prop_assert_eq!(csv.lines().count(), draft.attributes.len() + 1);

        let back = from_csv(&csv).unwrap();
        prop_assert_eq!(back.attributes, draft.attributes);
    }
}
