use serde::{Deserialize, Deserializer, Serialize};

/// Active/inactive flag shared by companies, client employees and staff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

/// A backend record carrying a server-assigned identifier.
pub trait Record {
    fn id(&self) -> &str;

    /// A created record must come back with a usable id.
    fn has_id(&self) -> bool {
        !self.id().trim().is_empty()
    }
}

/// Accept ids sent either as JSON strings or integers.
pub fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Count the records of a slice that are active.
pub fn count_active<T, F>(items: &[T], status: F) -> usize
where
    F: Fn(&T) -> RecordStatus,
{
    items.iter().filter(|item| status(item).is_active()).count()
}
