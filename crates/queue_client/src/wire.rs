use chrono::{DateTime, NaiveDateTime, Utc};
use queue_core::{EntryUpdate, NewEntry, QueueEntry};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes a field, falling back to its default on a type mismatch.
/// One bad field must not reject the record, and one bad record must not
/// reject the refresh.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserializes the queue array record by record: an unreadable element
/// degrades to a default record instead of rejecting its siblings.
fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<EntryRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<serde_json::Value> = lenient(deserializer)?;
    Ok(values
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or_default())
        .collect())
}

/// `GET queue` / mutation response envelope.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueueEnvelope {
    #[serde(default, deserialize_with = "lenient_records")]
    pub queue: Vec<EntryRecord>,
}

/// One queue row as the remote store transports it: booleans as 0/1
/// integers, the timestamp as a `YYYY-MM-DD HH:MM:SS` UTC string.
#[derive(Debug, Default, Deserialize)]
pub struct EntryRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub submissiontimestamp: String,
    #[serde(default, deserialize_with = "lenient")]
    pub staff: String,
    #[serde(default, deserialize_with = "lenient")]
    pub customer: String,
    #[serde(default, deserialize_with = "lenient")]
    pub contact: String,
    #[serde(default, deserialize_with = "lenient")]
    pub filename: String,
    #[serde(default, deserialize_with = "lenient")]
    pub note: String,
    #[serde(default, deserialize_with = "lenient")]
    pub printtype: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub cost: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub prepaid: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub archived: i64,
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    let raw = raw.trim();
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.and_utc();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc);
    }
    DateTime::UNIX_EPOCH
}

impl From<EntryRecord> for QueueEntry {
    fn from(record: EntryRecord) -> Self {
        QueueEntry {
            id: record.id,
            staff: record.staff,
            customer: record.customer,
            contact: record.contact,
            file_ref: record.filename,
            cost: record.cost,
            note: record.note,
            archived: record.archived != 0,
            prepaid: record.prepaid != 0,
            print_type: record.printtype as usize,
            submitted_at: parse_timestamp(&record.submissiontimestamp),
        }
    }
}

impl QueueEnvelope {
    pub(crate) fn into_entries(self) -> Vec<QueueEntry> {
        self.queue.into_iter().map(QueueEntry::from).collect()
    }
}

/// `PUT archive` body.
#[derive(Debug, Serialize)]
pub(crate) struct ArchiveBody {
    pub id: u64,
    pub archived: u8,
}

/// `PUT addtoqueue` body. `archived` is pinned to 0: a new entry is
/// never born archived.
#[derive(Debug, Serialize)]
pub(crate) struct CreateBody {
    pub staff: String,
    pub customer: String,
    pub contact: String,
    pub filename: String,
    pub note: String,
    pub cost: f64,
    pub prepaid: u8,
    pub printtype: usize,
    pub archived: u8,
}

impl From<&NewEntry> for CreateBody {
    fn from(entry: &NewEntry) -> Self {
        Self {
            staff: entry.staff.clone(),
            customer: entry.customer.clone(),
            contact: entry.contact.clone(),
            filename: entry.file_ref.clone(),
            note: entry.note.clone(),
            cost: entry.cost,
            prepaid: entry.prepaid.into(),
            printtype: entry.print_type,
            archived: 0,
        }
    }
}

/// `PUT modifyitem` body: the full record, including the identifier.
#[derive(Debug, Serialize)]
pub(crate) struct ModifyBody {
    pub id: u64,
    pub staff: String,
    pub customer: String,
    pub contact: String,
    pub filename: String,
    pub note: String,
    pub cost: f64,
    pub prepaid: u8,
    pub archived: u8,
    pub printtype: usize,
}

impl From<&EntryUpdate> for ModifyBody {
    fn from(update: &EntryUpdate) -> Self {
        Self {
            id: update.id,
            staff: update.staff.clone(),
            customer: update.customer.clone(),
            contact: update.contact.clone(),
            filename: update.file_ref.clone(),
            note: update.note.clone(),
            cost: update.cost,
            prepaid: update.prepaid.into(),
            archived: update.archived.into(),
            printtype: update.print_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_with_wrong_field_types_defaults_per_field() {
        let record: EntryRecord = serde_json::from_str(
            r#"{"id": "oops", "staff": 3, "cost": "free", "archived": 1,
                "submissiontimestamp": "2024-03-01 12:00:00"}"#,
        )
        .expect("record parses");

        assert_eq!(record.id, 0);
        assert_eq!(record.staff, "");
        assert_eq!(record.cost, 0.0);
        assert_eq!(record.archived, 1);
    }

    #[test]
    fn timestamp_parsing_accepts_sqlite_and_rfc3339() {
        let sqlite = parse_timestamp("2024-03-01 12:00:00");
        let rfc = parse_timestamp("2024-03-01T12:00:00Z");
        assert_eq!(sqlite, rfc);

        assert_eq!(parse_timestamp("not a date"), DateTime::UNIX_EPOCH);
        assert_eq!(parse_timestamp(""), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn create_body_pins_archived_to_zero() {
        let body = CreateBody::from(&NewEntry {
            staff: "A".to_string(),
            customer: "B".to_string(),
            contact: "c@x".to_string(),
            file_ref: "local:foo.gcode".to_string(),
            note: "n".to_string(),
            cost: 1.5,
            prepaid: true,
            print_type: 0,
        });

        let json = serde_json::to_value(&body).expect("serializes");
        assert_eq!(json["archived"], 0);
        assert_eq!(json["prepaid"], 1);
        assert_eq!(json["filename"], "local:foo.gcode");
    }
}
