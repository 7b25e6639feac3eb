use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use finance_core::{
    config::Config,
    domain::{Category, NewTransaction, Transaction},
    storage::{Collection, JsonFileStorage, StorageBackend, Store},
    FinanceError, FinanceTracker,
};
use tempfile::tempdir;

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

fn tracker_in(dir: &Path) -> FinanceTracker {
    let config = Config {
        data_dir: Some(dir.to_path_buf()),
        ..Config::default()
    };
    FinanceTracker::open(&config).expect("open tracker")
}

#[test]
fn data_survives_reopening_the_store() {
    let temp = tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();

    let created = {
        let tracker = tracker_in(temp.path());
        tracker.categories().create("Gifts", "#E91E63").unwrap();
        tracker
            .transactions()
            .create(NewTransaction::expense(150_000, "Flowers", date).with_category("cat5"))
            .unwrap()
    };

    let reopened = tracker_in(temp.path());
    let categories = reopened.categories().list().unwrap();
    assert_eq!(categories.len(), 9);
    assert_eq!(categories.last().map(|c| c.name.as_str()), Some("Gifts"));
    assert_eq!(reopened.transactions().list().unwrap(), vec![created]);
    assert!(temp.path().join("categories.json").exists());
    assert!(temp.path().join("transactions.json").exists());
}

#[test]
fn stored_layout_uses_plain_field_names() {
    let temp = tempdir().unwrap();
    let tracker = tracker_in(temp.path());
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    tracker
        .transactions()
        .create(NewTransaction::expense(9_000, "Parking", date).with_category("cat2"))
        .unwrap();

    let raw = fs::read_to_string(temp.path().join("transactions.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value[0];
    assert_eq!(entry["amount"], 9_000);
    assert_eq!(entry["type"], "expense");
    assert_eq!(entry["categoryId"], "cat2");
    assert_eq!(entry["date"], "2025-03-01");
}

#[test]
fn collections_roundtrip_through_files() {
    let temp = tempdir().unwrap();
    let store = Store::json(temp.path()).unwrap();
    let categories = vec![
        Category::with_id("x1", "Books", "#111111"),
        Category::with_id("x2", "Music", "#222222"),
    ];
    let transactions = vec![Transaction {
        id: "t1".into(),
        amount: 42,
        description: "Ünïcödé \"quoted\"".into(),
        date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        kind: finance_core::domain::TransactionKind::Expense,
        category_id: Some("x2".into()),
    }];

    store.write(Collection::Categories, &categories).unwrap();
    store.write(Collection::Transactions, &transactions).unwrap();

    let loaded_categories: Option<Vec<Category>> = store.read(Collection::Categories).unwrap();
    let loaded_transactions: Option<Vec<Transaction>> =
        store.read(Collection::Transactions).unwrap();
    assert_eq!(loaded_categories, Some(categories));
    assert_eq!(loaded_transactions, Some(transactions));
}

#[test]
fn corrupt_file_fails_loudly_instead_of_resetting() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("categories.json"), "[{\"id\": 7}]").unwrap();
    let tracker = tracker_in(temp.path());

    let err = tracker.categories().list().expect_err("corrupt data must fail");
    assert!(matches!(
        err,
        FinanceError::CorruptState {
            collection: "categories",
            ..
        }
    ));
    let untouched = fs::read_to_string(temp.path().join("categories.json")).unwrap();
    assert_eq!(untouched, "[{\"id\": 7}]");
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let storage = JsonFileStorage::new(temp.path().to_path_buf()).unwrap();
    storage.write_raw("transactions", "[]").unwrap();
    let path = storage.key_path("transactions");

    // A directory at the temp path forces File::create to fail.
    let tmp_path = tmp_path_for(&path);
    fs::create_dir_all(&tmp_path).unwrap();

    let result = storage.write_raw("transactions", "[1,2,3]");
    assert!(
        result.is_err(),
        "expected write to fail when temp path is a directory"
    );
    assert!(matches!(result, Err(FinanceError::Storage(_))));

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(current, "[]", "failed write must not corrupt the original file");

    let _ = fs::remove_dir_all(&tmp_path);
}

#[test]
fn reset_removes_files_and_reseeds() {
    let temp = tempdir().unwrap();
    let tracker = tracker_in(temp.path());
    tracker.categories().delete("cat8").unwrap();
    tracker.reset().unwrap();
    assert!(!temp.path().join("categories.json").exists());
    assert_eq!(tracker.categories().list().unwrap().len(), 8);
}
