#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// The worked example: one $30 platter between Alice and Bob.
pub const SHARED_PLATTER_YAML: &str = r#"
restaurant: Luigi's
tax: 3
surcharge: 1
tip:
  percent: 10
items:
  - name: Platter
    price: 30
    quantity: 1
    attendees: [Alice, Bob]
"#;

pub const TEAM_LUNCH_JSON: &str = r#"{
  "restaurant": "Noodle Bar",
  "tax": 4.25,
  "surcharge": 2,
  "tip": { "amount": 9, "percent": 25 },
  "items": [
    { "name": "Ramen", "price": 14.5, "attendees": ["Cy", "Dee"] },
    { "name": "Gyoza", "price": 6, "quantity": 3, "attendees": ["Cy", "Dee", "Eli"] },
    { "name": "Tea", "price": 2.75, "quantity": 0, "attendees": ["Eli"] }
  ]
}"#;

/// Writes `contents` to `name` inside a fresh temp directory kept alive for the test run.
pub fn write_receipt(name: &str, contents: &str) -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join(name);
    std::fs::write(&path, contents).expect("write receipt");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
