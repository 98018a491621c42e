use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;
use stk_core::prelude::*;
use stk_core::{MemoryKeyValueStore, RecordingNotifier, StorageError, WorkbenchError};
use stk_exchange::ExportFormat;
use stk_test_utils::{arb_draft, clean_pump, pump_a};
use tempfile::TempDir;

fn bench_with_log() -> (Workbench, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    (Workbench::default().with_notifier(notifier.clone()), notifier)
}

#[test]
fn save_pump_a_then_find_it() {
    let (bench, _) = bench_with_log();
    let id = bench.save(pump_a()).unwrap();

    let found = bench.search("PumpA");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, id);
    assert_eq!(found[0].template, pump_a());
}

#[test]
fn failed_save_leaves_store_unchanged() {
    let (bench, _) = bench_with_log();
    bench.save(clean_pump()).unwrap();
    let before = bench.store().list();

    let err = bench.save(TemplateDraft::new("   ")).unwrap_err();
    assert!(matches!(err, WorkbenchError::Storage(StorageError::Rejected(_))));
    assert_eq!(bench.store().list(), before);
}

#[test]
fn wizard_form_to_saved_export() {
    let (bench, notifier) = bench_with_log();
    let mut form = TemplateForm::new();
    let mut wizard = Wizard::new();

    form.load_draft(&bench.prebuilt("motor").unwrap());
    form.name = " feed motor ".into();
    wizard.next(&form).unwrap();
    wizard.next(&form).unwrap();
    assert_eq!(wizard.step(), WizardStep::Review);

    let mut draft = form.collect();
    assert_eq!(draft.name, "feed motor");

    let outcome = bench.auto_fix(&mut draft);
    assert_eq!(draft.name, "FeedMotor");
    assert!(!outcome.applied.is_empty());

    wizard.next(&form).unwrap();
    assert_eq!(wizard.step(), WizardStep::Export);

    bench.save(draft.clone()).unwrap();
    let xml = bench.export(&draft, ExportFormat::Xml).unwrap();
    assert!(xml.contains("<Template name=\"FeedMotor\""));

    let severities: Vec<_> = notifier.notifications().iter().map(|n| n.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Info, Severity::Success, Severity::Success]
    );
}

#[test]
fn replace_and_remove_through_workbench() {
    let (bench, _) = bench_with_log();
    let id = bench.save(pump_a()).unwrap();

    bench.replace(id, clean_pump()).unwrap();
    assert_eq!(bench.store().get(id).unwrap().name(), "FeedPump");

    assert!(bench.remove(id).unwrap());
    assert!(!bench.remove(id).unwrap());
    assert!(bench.store().is_empty());
}

#[test]
fn persistent_store_survives_restart() {
    let backend = Arc::new(MemoryKeyValueStore::new());

    let first = Workbench::default()
        .with_store(Arc::new(TemplateStore::with_backend(backend.clone())));
    first.save(pump_a()).unwrap();
    first.save(clean_pump()).unwrap();

    let store = Arc::new(TemplateStore::with_backend(backend));
    assert_eq!(store.restore().unwrap(), 2);
    let second = Workbench::default().with_store(store);
    assert_eq!(second.search("").len(), 2);
    assert_eq!(second.search("")[0].name(), "FeedPump");
}

#[test]
fn concurrent_saves_are_all_kept() {
    let store = Arc::new(TemplateStore::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .save(TemplateDraft::new(format!("Pump{i}")).with_attribute(Attribute::new("Flow", "AI_REAL")))
                    .unwrap()
            })
        })
        .collect();

    let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);
    assert_eq!(store.len(), 8);
}

#[tokio::test]
async fn file_round_trip_through_workbench() {
    let dir = TempDir::new().unwrap();
    let (bench, notifier) = bench_with_log();
    let path = dir.path().join("FeedPump.csv");

    bench.export_file(&clean_pump(), &path).await.unwrap();
    let imported = bench.import_file(&path).await.unwrap();

    assert_eq!(imported.draft.name, "FeedPump");
    assert_eq!(imported.draft.attributes, clean_pump().attributes);
    assert_eq!(notifier.last().unwrap().severity, Severity::Success);

    let id = bench.save(imported.draft).unwrap();
    assert_eq!(bench.search("feedpump")[0].id, id);
}

#[tokio::test]
async fn failed_import_notifies_error() {
    let dir = TempDir::new().unwrap();
    let (bench, notifier) = bench_with_log();
    let path = dir.path().join("Broken.json");
    tokio::fs::write(&path, "{\"name\":").await.unwrap();

    assert!(bench.import_file(&path).await.is_err());
    assert_eq!(notifier.last().unwrap().severity, Severity::Error);
    assert!(bench.store().is_empty());
}

proptest! {
    #[test]
    fn prop_save_succeeds_iff_savable(draft in arb_draft()) {
        let store = TemplateStore::new();
        let savable = !draft.name.trim().is_empty() && !draft.attributes.is_empty();
        prop_assert_eq!(store.save(draft).is_ok(), savable);
        prop_assert_eq!(store.len(), usize::from(savable));
    }
}
