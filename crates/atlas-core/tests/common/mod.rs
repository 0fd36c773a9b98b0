use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// A complete location-info document with a known rendering.
pub const SPAIN: &str = r#"{
    "location": {
        "name": "Spain",
        "capital": "Madrid",
        "subregion": "Southern Europe",
        "population": 47351567,
        "area": 505992.0,
        "latitude": 40.0,
        "longitude": -4.0,
        "timezones": ["UTC+01:00", "UTC"],
        "languages": [
            {"name": "Spanish", "native_name": "Español"},
            {"name": "Catalan", "native_name": "Català"}
        ]
    },
    "weather": {
        "temp": 21.5,
        "description": "clear sky",
        "wind_speed": "3.1 m/s",
        "visibility": "10000 m"
    },
    "currency_rates": {"USD": "92.5123", "EUR": "2.005"},
    "news": [
        {"title": "A", "description": "B"},
        {"title": "C", "description": null}
    ],
    "timestamp": "2023-01-01T10:00:00Z"
}"#;

/// Helper function to write a document into a fresh temporary directory
pub fn write_document(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("location.json");
    fs::write(&path, json).expect("Failed to write document");
    (temp_dir, path)
}
