use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use habitline_domain::habit::{Difficulty, Habit, HabitRepository};
use habitline_domain::shared::DomainError;

/// Wire form of one entry in the habit document.
///
/// The habit name is the document key, not a record field. `last_completed`
/// and `difficulty` may be absent in hand-written files; everything else is
/// required, and a document that does not fit this shape is rejected on
/// load rather than coerced.
#[derive(Debug, Serialize, Deserialize)]
struct HabitRecord {
    streak: u32,
    #[serde(default)]
    last_completed: Option<NaiveDate>,
    history: BTreeMap<NaiveDate, bool>,
    #[serde(default)]
    difficulty: Difficulty,
}

impl HabitRecord {
    fn from_habit(habit: &Habit) -> Self {
        Self {
            streak: habit.streak(),
            last_completed: habit.last_completed(),
            history: habit.history().clone(),
            difficulty: habit.difficulty(),
        }
    }

    fn into_habit(self, name: String) -> Habit {
        Habit::restore(
            name,
            self.streak,
            self.last_completed,
            self.history,
            self.difficulty,
        )
    }
}

/// Habit repository backed by a single JSON document.
pub struct JsonHabitRepository {
    path: PathBuf,
}

impl JsonHabitRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl HabitRepository for JsonHabitRepository {
    async fn load(&self) -> Result<HashMap<String, Habit>, DomainError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "[habits] no document at {}, starting empty",
                    self.path.display()
                );
                return Ok(HashMap::new());
            }
            Err(e) => {
                return Err(DomainError::Repository(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let records: HashMap<String, HabitRecord> =
            serde_json::from_str(&content).map_err(|e| {
                DomainError::Deserialization(format!(
                    "Malformed habit document {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        debug!(
            "[habits] loaded {} records from {}",
            records.len(),
            self.path.display()
        );

        Ok(records
            .into_iter()
            .map(|(name, record)| {
                let habit = record.into_habit(name.clone());
                (name, habit)
            })
            .collect())
    }

    async fn save(&self, habits: &HashMap<String, Habit>) -> Result<(), DomainError> {
        // BTreeMap keeps the document keys in name order across rewrites
        let records: BTreeMap<&str, HabitRecord> = habits
            .iter()
            .map(|(name, habit)| (name.as_str(), HabitRecord::from_habit(habit)))
            .collect();

        let content = serde_json::to_string_pretty(&records).map_err(|e| {
            DomainError::Serialization(format!("Failed to encode habit document: {}", e))
        })?;

        tokio::fs::write(&self.path, content).await.map_err(|e| {
            DomainError::Repository(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(
            "[habits] saved {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
