use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed set of task categories shown on the board.
///
/// Serialized as a lowercase string. Anything else found in a snapshot
/// (or submitted in a form) collapses to the default category instead of
/// failing the decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    Work,
    #[default]
    Personal,
    Health,
    Study,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Health,
        Category::Study,
    ];

    pub fn parse(id: &str) -> Self {
        match id {
            "work" => Category::Work,
            "personal" => Category::Personal,
            "health" => Category::Health,
            "study" => Category::Study,
            _ => Category::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Health => "health",
            Category::Study => "study",
        }
    }

    /// Display glyph used on task rows and in the category selector.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Work => "\u{1F4BC}",
            Category::Personal => "\u{1F3E0}",
            Category::Health => "\u{1F4AA}",
            Category::Study => "\u{1F4DA}",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "Trabajo",
            Category::Personal => "Personal",
            Category::Health => "Salud",
            Category::Study => "Estudio",
        }
    }
}

impl From<String> for Category {
    fn from(id: String) -> Self {
        Category::parse(&id)
    }
}

/// A single agenda task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Opaque unique ID assigned at creation
    pub id: String,

    /// User-entered label; never blank
    pub text: String,

    /// Completion flag, toggled from the board
    pub completed: bool,

    /// Scheduled instant, stored as an RFC 3339 string.
    /// Only the calendar day is meaningful for grouping.
    pub date: DateTime<Utc>,

    /// Board category; snapshots written before categories existed
    /// simply omit the field
    #[serde(default)]
    pub category: Category,
}

impl Task {
    pub fn new(text: impl Into<String>, date: DateTime<Utc>, category: Category) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
            date,
            category,
        }
    }

    /// Calendar day the task is scheduled on, in local time
    pub fn day(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_task_new_defaults() {
        let date = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let task = Task::new("Comprar leche", date, Category::Personal);

        assert_eq!(task.text, "Comprar leche");
        assert!(!task.completed);
        assert_eq!(task.date, date);
        assert_eq!(task.category, Category::Personal);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_task_ids_are_unique() {
        let date = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let a = Task::new("a", date, Category::Work);
        let b = Task::new("b", date, Category::Work);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_category_parse_known_ids() {
        assert_eq!(Category::parse("work"), Category::Work);
        assert_eq!(Category::parse("personal"), Category::Personal);
        assert_eq!(Category::parse("health"), Category::Health);
        assert_eq!(Category::parse("study"), Category::Study);
    }

    #[test]
    fn test_category_parse_unknown_falls_back_to_default() {
        assert_eq!(Category::parse("errands"), Category::Personal);
        assert_eq!(Category::parse(""), Category::Personal);
        assert_eq!(Category::parse("WORK"), Category::Personal);
    }

    #[test]
    fn test_category_every_variant_has_icon_and_label() {
        for cat in Category::ALL {
            assert!(!cat.icon().is_empty());
            assert!(!cat.label().is_empty());
            assert_eq!(Category::parse(cat.as_str()), cat);
        }
    }

    #[test]
    fn test_task_serialization_layout() {
        let date = Utc.with_ymd_and_hms(2024, 6, 10, 9, 30, 0).unwrap();
        let mut task = Task::new("Comprar leche", date, Category::Health);
        task.id = "t1".to_string();

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"id\":\"t1\""));
        assert!(json.contains("\"text\":\"Comprar leche\""));
        assert!(json.contains("\"completed\":false"));
        // The date must be written as an ISO-8601 instant
        assert!(json.contains("\"date\":\"2024-06-10T09:30:00Z\""));
        assert!(json.contains("\"category\":\"health\""));
    }

    #[test]
    fn test_task_deserialization_revives_date() {
        let json = r#"{
            "id": "t1",
            "text": "Estudiar",
            "completed": true,
            "date": "2024-06-10T21:15:00Z",
            "category": "study"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "t1");
        assert!(task.completed);
        assert_eq!(task.date, Utc.with_ymd_and_hms(2024, 6, 10, 21, 15, 0).unwrap());
        assert_eq!(task.category, Category::Study);
    }

    #[test]
    fn test_task_missing_category_defaults() {
        let json = r#"{
            "id": "t1",
            "text": "Sin categoría",
            "completed": false,
            "date": "2024-06-10T09:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.category, Category::Personal);
    }

    #[test]
    fn test_task_unknown_category_defaults() {
        let json = r#"{
            "id": "t1",
            "text": "Categoría rara",
            "completed": false,
            "date": "2024-06-10T09:00:00Z",
            "category": "gardening"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.category, Category::Personal);
    }

    #[test]
    fn test_task_roundtrip_serialization() {
        let date = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let original = Task::new("Año nuevo: preparar uvas & cena", date, Category::Personal);

        let json = serde_json::to_string(&original).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(original, back);
    }

    #[test]
    fn test_day_ignores_time_of_day() {
        // Build both instants from the same local day so the assertion holds
        // in any host timezone.
        let morning = Local
            .with_ymd_and_hms(2024, 6, 10, 8, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let night = Local
            .with_ymd_and_hms(2024, 6, 10, 22, 0, 0)
            .unwrap()
            .with_timezone(&Utc);

        let a = Task::new("a", morning, Category::Work);
        let b = Task::new("b", night, Category::Work);

        assert_eq!(a.day(), b.day());
        assert_eq!(a.day(), NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    }
}
