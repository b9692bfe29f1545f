use habitline_domain::reminder::{Reminder, ReminderRepository, ReminderTime};
use habitline_domain::shared::DomainError;
use habitline_infrastructure::persistence::{JsonReminderRepository, REMINDERS_FILE};

fn time(text: &str) -> ReminderTime {
    ReminderTime::parse(text).expect("valid reminder time")
}

#[tokio::test]
async fn reminder_repo_save_and_load_round_trip() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let repo = JsonReminderRepository::new(dir.path().join(REMINDERS_FILE));

    let reminders = vec![
        Reminder::new("Read", time("07:30")),
        Reminder::new("Stretch", time("21:00")),
    ];

    repo.save(&reminders).await.expect("Save document");
    let loaded = repo.load().await.expect("Load document");

    assert_eq!(loaded, reminders);
}

#[tokio::test]
async fn reminder_repo_missing_file_loads_empty() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let repo = JsonReminderRepository::new(dir.path().join(REMINDERS_FILE));

    let loaded = repo.load().await.expect("Load without document");

    assert!(loaded.is_empty());
}

#[tokio::test]
async fn reminder_repo_keeps_duplicates_and_order() {
    // The same habit may carry several reminders, even at the same time
    let dir = tempfile::tempdir().expect("Create temp dir");
    let repo = JsonReminderRepository::new(dir.path().join(REMINDERS_FILE));

    let reminders = vec![
        Reminder::new("Read", time("07:30")),
        Reminder::new("Read", time("07:30")),
        Reminder::new("Read", time("06:00")),
    ];

    repo.save(&reminders).await.expect("Save document");
    let loaded = repo.load().await.expect("Load document");

    assert_eq!(loaded, reminders);
}

#[tokio::test]
async fn reminder_repo_writes_canonical_time_strings() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let path = dir.path().join(REMINDERS_FILE);
    let repo = JsonReminderRepository::new(&path);

    let reminders = vec![Reminder::new("Walk", time("06:05"))];
    repo.save(&reminders).await.expect("Save document");

    let raw = tokio::fs::read_to_string(&path).await.expect("Read raw document");
    assert!(raw.contains(r#""time": "06:05""#));
}

#[tokio::test]
async fn reminder_repo_malformed_document_is_rejected() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let path = dir.path().join(REMINDERS_FILE);
    tokio::fs::write(&path, "[ { broken").await.expect("Write junk");

    let repo = JsonReminderRepository::new(path);
    let result = repo.load().await;

    assert!(matches!(result, Err(DomainError::Deserialization(_))));
}

#[tokio::test]
async fn reminder_repo_rejects_out_of_range_time() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let path = dir.path().join(REMINDERS_FILE);
    let doc = r#"[ { "habit": "Read", "time": "25:00" } ]"#;
    tokio::fs::write(&path, doc).await.expect("Write document");

    let repo = JsonReminderRepository::new(path);
    let result = repo.load().await;

    assert!(matches!(result, Err(DomainError::Deserialization(_))));
}

#[tokio::test]
async fn reminder_repo_rejects_unpadded_time() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let path = dir.path().join(REMINDERS_FILE);
    let doc = r#"[ { "habit": "Read", "time": "9:30" } ]"#;
    tokio::fs::write(&path, doc).await.expect("Write document");

    let repo = JsonReminderRepository::new(path);
    let result = repo.load().await;

    assert!(matches!(result, Err(DomainError::Deserialization(_))));
}
