//! Bulk entry import from CSV and XML files.
//!
//! Records are appended to the target profile as they are read. A record
//! that fails to convert aborts the import; records appended before it stay.

use crate::{Entry, EntryKind, Error, ProfileStore, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;

/// Raw record shared by both formats before conversion
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    kind: Option<String>,
    category: Option<String>,
    duration_quantity: Option<String>,
    calories: Option<String>,
    date: Option<String>,
}

fn required(value: Option<String>, field: &str, row: usize) -> Result<String> {
    value.ok_or_else(|| Error::RowParse {
        row,
        reason: format!("missing field '{}'", field),
    })
}

impl RawRecord {
    fn into_entry(self, row: usize) -> Result<Entry> {
        let raw_kind = required(self.kind, "type", row)?;
        let kind = EntryKind::from_input(&raw_kind).ok_or_else(|| Error::RowParse {
            row,
            reason: format!("unknown entry type '{}'", raw_kind),
        })?;

        let raw_calories = required(self.calories, "calories", row)?;
        let calories = raw_calories
            .trim()
            .parse::<i64>()
            .map_err(|e| Error::RowParse {
                row,
                reason: format!("invalid calories '{}': {}", raw_calories, e),
            })?;

        Ok(Entry {
            kind,
            category: required(self.category, "category", row)?,
            duration_quantity: required(self.duration_quantity, "duration_quantity", row)?,
            calories,
            date: required(self.date, "date", row)?,
        })
    }
}

/// CSV row; every column is required by the header
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    category: String,
    duration_quantity: String,
    calories: String,
    date: String,
}

impl From<CsvRow> for RawRecord {
    fn from(row: CsvRow) -> Self {
        RawRecord {
            kind: Some(row.kind),
            category: Some(row.category),
            duration_quantity: Some(row.duration_quantity),
            calories: Some(row.calories),
            date: Some(row.date),
        }
    }
}

fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })
}

fn ensure_profile(store: &ProfileStore, username: &str) -> Result<()> {
    if store.profile(username).is_none() {
        return Err(Error::UnknownProfile(username.to_string()));
    }
    Ok(())
}

/// Import entries from a CSV file with a
/// `type,category,duration_quantity,calories,date` header
///
/// Returns the number of entries appended.
pub fn import_csv(path: &Path, store: &mut ProfileStore, username: &str) -> Result<usize> {
    ensure_profile(store, username)?;
    let file = open_source(path)?;

    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(file);

    let mut count = 0;
    for (i, result) in reader.deserialize::<CsvRow>().enumerate() {
        let entry = RawRecord::from(result?).into_entry(i + 1)?;
        store.append_entry(username, entry)?;
        count += 1;
    }

    tracing::info!("Imported {} entries for '{}' from {:?}", count, username, path);
    Ok(count)
}

/// Root element of an XML import; its name is not checked
#[derive(Debug, Deserialize)]
struct XmlDocument {
    #[serde(rename = "entry", default)]
    entries: Vec<RawRecord>,
}

/// Check that the document is a single, fully closed root element
///
/// Only whitespace, comments, processing instructions and declarations may
/// surround the root.
fn check_well_formed(contents: &str) -> std::result::Result<(), String> {
    let mut reader = Reader::from_str(contents);
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        match event {
            Event::Start(_) => {
                if depth == 0 && seen_root {
                    return Err("junk after document element".into());
                }
                seen_root = true;
                depth += 1;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Empty(_) => {
                if depth == 0 {
                    if seen_root {
                        return Err("junk after document element".into());
                    }
                    seen_root = true;
                }
            }
            Event::Text(text) => {
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    return Err("text outside the document element".into());
                }
            }
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
            _ => {
                if depth == 0 {
                    return Err("content outside the document element".into());
                }
            }
        }
    }

    if !seen_root {
        return Err("no element found".into());
    }
    if depth != 0 {
        return Err("unclosed element at end of document".into());
    }
    Ok(())
}

/// Import entries from an XML document whose root holds `<entry>` elements
///
/// Returns the number of entries appended.
pub fn import_xml(path: &Path, store: &mut ProfileStore, username: &str) -> Result<usize> {
    ensure_profile(store, username)?;
    let file = open_source(path)?;
    let contents = io::read_to_string(file)?;

    check_well_formed(&contents).map_err(|reason| Error::MalformedDocument {
        path: path.to_path_buf(),
        reason,
    })?;
    let document: XmlDocument =
        quick_xml::de::from_str(&contents).map_err(|e| Error::MalformedDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut count = 0;
    for (i, record) in document.entries.into_iter().enumerate() {
        store.append_entry(username, record.into_entry(i + 1)?)?;
        count += 1;
    }

    tracing::info!("Imported {} entries for '{}' from {:?}", count, username, path);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn store_with(username: &str) -> ProfileStore {
        let mut store = ProfileStore::new();
        store.get_or_create(username);
        store
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn entries(store: &ProfileStore, username: &str) -> Vec<Entry> {
        store.profile(username).unwrap().entries.clone()
    }

    #[test]
    fn test_csv_import_three_rows_in_order() {
        crate::logging::init_for_tests();
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.csv",
            "type,category,duration_quantity,calories,date\n\
             Workout,Cardio,30 minutes,300,2024-01-01\n\
             Meal,Breakfast,1 bowl,450,2024-01-01\n\
             Meal,Dinner,2 plates,900,2024-01-01\n",
        );
        let mut store = store_with("alice");

        let count = import_csv(&path, &mut store, "alice").unwrap();
        assert_eq!(count, 3);

        let imported = entries(&store, "alice");
        let calories: Vec<i64> = imported.iter().map(|e| e.calories).collect();
        assert_eq!(calories, vec![300, 450, 900]);
        assert_eq!(imported[0].kind, EntryKind::Workout);
        assert_eq!(imported[1].category, "Breakfast");
        assert_eq!(imported[2].duration_quantity, "2 plates");
    }

    #[test]
    fn test_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with("alice");

        let err = import_csv(&dir.path().join("nope.csv"), &mut store, "alice").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
        assert!(entries(&store, "alice").is_empty());
    }

    #[test]
    fn test_csv_bad_calories_keeps_earlier_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.csv",
            "type,category,duration_quantity,calories,date\n\
             Workout,Yoga,1 hour,200,2024-02-01\n\
             Meal,Lunch,1 plate,many,2024-02-01\n\
             Meal,Dinner,1 plate,800,2024-02-01\n",
        );
        let mut store = store_with("bob");

        let err = import_csv(&path, &mut store, "bob").unwrap_err();
        assert!(matches!(err, Error::RowParse { row: 2, .. }));
        assert_eq!(entries(&store, "bob").len(), 1);
    }

    #[test]
    fn test_csv_missing_column_appends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.csv",
            "type,category,calories,date\nWorkout,Cardio,300,2024-01-01\n",
        );
        let mut store = store_with("carol");

        assert!(import_csv(&path, &mut store, "carol").is_err());
        assert!(entries(&store, "carol").is_empty());
    }

    #[test]
    fn test_csv_empty_fields_kept_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.csv",
            "type,category,duration_quantity,calories,date\nmeal,,,0,\n",
        );
        let mut store = store_with("frank");

        assert_eq!(import_csv(&path, &mut store, "frank").unwrap(), 1);
        let imported = entries(&store, "frank");
        assert_eq!(imported[0].kind, EntryKind::Meal);
        assert_eq!(imported[0].category, "");
        assert_eq!(imported[0].date, "");
    }

    #[test]
    fn test_csv_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "log.csv", "type,category,duration_quantity,calories,date\n");
        let mut store = store_with("dave");

        assert_eq!(import_csv(&path, &mut store, "dave").unwrap(), 0);
    }

    #[test]
    fn test_csv_unknown_type_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.csv",
            "type,category,duration_quantity,calories,date\nNap,Rest,1 hour,0,2024-01-01\n",
        );
        let mut store = store_with("erin");

        let err = import_csv(&path, &mut store, "erin").unwrap_err();
        assert!(matches!(err, Error::RowParse { row: 1, .. }));
    }

    #[test]
    fn test_xml_import_two_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.xml",
            r#"<?xml version="1.0"?>
<root>
  <entry>
    <type>Workout</type>
    <category>Pilates</category>
    <duration_quantity>50 minutes</duration_quantity>
    <calories>250</calories>
    <date>2024-03-10</date>
  </entry>
  <entry>
    <type>Meal</type>
    <category>Brunch</category>
    <duration_quantity>1 plate</duration_quantity>
    <calories>820</calories>
    <date>2024-03-10</date>
  </entry>
</root>
"#,
        );
        let mut store = store_with("alice");

        assert_eq!(import_xml(&path, &mut store, "alice").unwrap(), 2);
        assert_eq!(
            entries(&store, "alice"),
            vec![
                Entry {
                    kind: EntryKind::Workout,
                    category: "Pilates".into(),
                    duration_quantity: "50 minutes".into(),
                    calories: 250,
                    date: "2024-03-10".into(),
                },
                Entry {
                    kind: EntryKind::Meal,
                    category: "Brunch".into(),
                    duration_quantity: "1 plate".into(),
                    calories: 820,
                    date: "2024-03-10".into(),
                },
            ]
        );
    }

    #[test]
    fn test_xml_entries_interleaved_with_other_elements() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.xml",
            "<root>\
             <entry><type>Meal</type><category>Lunch</category>\
             <duration_quantity>1 plate</duration_quantity><calories>600</calories>\
             <date>2024-03-11</date></entry>\
             <note>rest day tomorrow</note>\
             <entry><type>Workout</type><category>Cardio</category>\
             <duration_quantity>20 minutes</duration_quantity><calories>180</calories>\
             <date>2024-03-12</date></entry>\
             </root>",
        );
        let mut store = store_with("alice");

        assert_eq!(import_xml(&path, &mut store, "alice").unwrap(), 2);
        let imported = entries(&store, "alice");
        assert_eq!(imported[0].category, "Lunch");
        assert_eq!(imported[1].category, "Cardio");
    }

    #[test]
    fn test_xml_trailing_element_after_root_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.xml",
            "<root><entry><type>Meal</type><category>Snack</category>\
             <duration_quantity>1 apple</duration_quantity><calories>95</calories>\
             <date>2024-04-01</date></entry></root><junk>",
        );
        let mut store = store_with("alice");

        let err = import_xml(&path, &mut store, "alice").unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
        assert!(entries(&store, "alice").is_empty());
    }

    #[test]
    fn test_xml_comments_around_root_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.xml",
            "<?xml version=\"1.0\"?>\n<!-- exported -->\n<root></root>\n<!-- end -->\n",
        );
        let mut store = store_with("alice");

        assert_eq!(import_xml(&path, &mut store, "alice").unwrap(), 0);
    }

    #[test]
    fn test_xml_empty_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "log.xml", "");
        let mut store = store_with("alice");

        assert!(matches!(
            import_xml(&path, &mut store, "alice"),
            Err(Error::MalformedDocument { .. })
        ));
    }

    #[test]
    fn test_xml_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "log.xml", "<root></root>");
        let mut store = store_with("alice");

        assert_eq!(import_xml(&path, &mut store, "alice").unwrap(), 0);
    }

    #[test]
    fn test_xml_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.xml",
            "<root><entry><type>Meal</type><category>Lunch",
        );
        let mut store = store_with("alice");

        let err = import_xml(&path, &mut store, "alice").unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
        assert!(entries(&store, "alice").is_empty());
    }

    #[test]
    fn test_xml_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_with("alice");

        let err = import_xml(&dir.path().join("missing.xml"), &mut store, "alice").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_xml_bad_calories_keeps_earlier_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.xml",
            "<root>\
             <entry><type>Meal</type><category>Snack</category>\
             <duration_quantity>1 apple</duration_quantity><calories>95</calories>\
             <date>2024-04-01</date></entry>\
             <entry><type>Meal</type><category>Snack</category>\
             <duration_quantity>1 pear</duration_quantity><calories>ninety</calories>\
             <date>2024-04-01</date></entry>\
             </root>",
        );
        let mut store = store_with("alice");

        let err = import_xml(&path, &mut store, "alice").unwrap_err();
        assert!(matches!(err, Error::RowParse { row: 2, .. }));
        assert_eq!(entries(&store, "alice").len(), 1);
    }

    #[test]
    fn test_xml_missing_child_element() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "log.xml",
            "<root><entry><type>Workout</type><category>Cardio</category>\
             <calories>100</calories><date>2024-04-01</date></entry></root>",
        );
        let mut store = store_with("alice");

        let err = import_xml(&path, &mut store, "alice").unwrap_err();
        assert!(matches!(err, Error::RowParse { row: 1, .. }));
    }

    #[test]
    fn test_import_requires_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "log.xml", "<root></root>");
        let mut store = ProfileStore::new();

        assert!(matches!(
            import_xml(&path, &mut store, "nobody"),
            Err(Error::UnknownProfile(_))
        ));
    }
}
