//! Integration tests for seeding the store from a JSON file.

use std::io::Write;

use storage::{AllowList, MessageAnalytics, MessageRepository};
use wdl_web::{read_seed_file, seed_from_file, DashboardConfig};

fn config_for(dir: &tempfile::TempDir) -> DashboardConfig {
    DashboardConfig {
        database_url: format!("sqlite://{}", dir.path().join("seed.db").display()),
        db_max_connections: 1,
        bind_addr: "127.0.0.1:0".to_string(),
        log_file: dir.path().join("seed.log").display().to_string(),
        allowed_names: AllowList::parse("alice"),
        store_utc_offset: "+00:00".to_string(),
    }
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

const SEED_JSON: &str = r#"[
    {
        "messageId": 10,
        "channelId": 900,
        "userId": 7,
        "name": "alice",
        "content": "first",
        "timestamp": "2023-11-02T08:00:00Z",
        "premiumType": "Some(Nitro)"
    },
    {
        "messageId": 11,
        "channelId": 900,
        "userId": 7,
        "name": "alice",
        "content": "second",
        "timestamp": "2023-12-24T20:15:00Z"
    }
]"#;

#[tokio::test]
async fn test_seed_from_file_inserts_all_messages() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "messages.json", SEED_JSON);
    let config = config_for(&dir);

    let inserted = seed_from_file(&config, &path).await.unwrap();
    assert_eq!(inserted, 2);

    let repo = MessageRepository::new(&config.database_url).await.unwrap();
    let all = repo.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].premium_type, "Some(Nitro)");
    assert_eq!(all[1].premium_type, "None");

    let monthly = repo.monthly_by_user(&config.allowed_names).await.unwrap();
    let months: Vec<&str> = monthly.iter().map(|row| row.month.as_str()).collect();
    assert_eq!(months, vec!["2023-11", "2023-12"]);
}

#[test]
fn test_read_seed_file_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "broken.json", r#"{ "not": "an array" }"#);

    assert!(read_seed_file(&path).is_err());
}

#[test]
fn test_read_seed_file_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    assert!(read_seed_file(&dir.path().join("missing.json")).is_err());
}
