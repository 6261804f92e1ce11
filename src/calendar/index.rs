use std::fs;
use std::io;
use std::path::Path;

use itertools::Itertools;
use tracing::debug;

const CALENDAR_EXTENSION: &str = "ics";
const INDEX_FILE_NAME: &str = "index.html";
const INDEX_TITLE: &str = "Valorant Esports Calendars";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub rel_path: String,
    pub display_name: String,
}

/// Lists the calendar files in `output_dir`, sorted by file name, with a
/// display name derived from the file name (`valorant_emea.ics` ->
/// "Valorant Emea").
pub fn scan_calendars(output_dir: &Path) -> io::Result<Vec<IndexEntry>> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(output_dir)? {
        let path = dir_entry?.path();

        if !path.is_file()
            || path.extension().and_then(|extension| extension.to_str())
                != Some(CALENDAR_EXTENSION)
        {
            continue;
        }

        let (Some(file_name), Some(stem)) = (
            path.file_name().and_then(|name| name.to_str()),
            path.file_stem().and_then(|stem| stem.to_str()),
        ) else {
            continue;
        };

        entries.push(IndexEntry {
            rel_path: file_name.to_string(),
            display_name: title_case(&stem.replace('_', " ")),
        });
    }

    entries.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));

    Ok(entries)
}

pub fn render_index(entries: &[IndexEntry]) -> String {
    let items = entries
        .iter()
        .map(|entry| {
            format!(
                r#"      <li><a href="{}">{}</a></li>"#,
                entry.rel_path, entry.display_name
            )
        })
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{INDEX_TITLE}</title>
  </head>
  <body>
    <h1>{INDEX_TITLE}</h1>
    <ul>
{items}
    </ul>
  </body>
</html>
"#
    )
}

/// Renders `index.html` from the calendar files currently in `output_dir`.
/// Calendars already written stay valid if this fails.
pub fn write_index(output_dir: &Path) -> io::Result<()> {
    let entries = scan_calendars(output_dir)?;

    debug!("Indexing {} calendar files", entries.len());

    fs::write(output_dir.join(INDEX_FILE_NAME), render_index(&entries))
}

/// Locale-free word-boundary title-casing: the first character after
/// whitespace is uppercased, the rest pass through.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for character in value.chars() {
        if at_word_start {
            result.extend(character.to_uppercase());
        } else {
            result.push(character);
        }
        at_word_start = character.is_whitespace();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_title_case_words() {
        assert_eq!(title_case("valorant china"), "Valorant China");
        assert_eq!(title_case("emea"), "Emea");
        assert_eq!(title_case("already Cased"), "Already Cased");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("two  spaces"), "Two  Spaces");
    }

    #[test_log::test]
    fn should_scan_only_calendar_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("valorant_pacific.ics"), "BEGIN:VCALENDAR").unwrap();
        std::fs::write(dir.path().join("valorant_china.ics"), "BEGIN:VCALENDAR").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a calendar").unwrap();

        let entries = scan_calendars(dir.path()).unwrap();

        assert_eq!(
            entries,
            vec![
                IndexEntry {
                    rel_path: "valorant_china.ics".to_string(),
                    display_name: "Valorant China".to_string(),
                },
                IndexEntry {
                    rel_path: "valorant_pacific.ics".to_string(),
                    display_name: "Valorant Pacific".to_string(),
                },
            ]
        );
    }

    #[test_log::test]
    fn should_render_one_link_per_calendar() {
        let entries = vec![
            IndexEntry {
                rel_path: "valorant_china.ics".to_string(),
                display_name: "Valorant China".to_string(),
            },
            IndexEntry {
                rel_path: "valorant_pacific.ics".to_string(),
                display_name: "Valorant Pacific".to_string(),
            },
        ];

        let html = render_index(&entries);

        assert!(html.contains(r#"<a href="valorant_china.ics">Valorant China</a>"#));
        assert!(html.contains(r#"<a href="valorant_pacific.ics">Valorant Pacific</a>"#));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test_log::test]
    fn should_write_index_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("valorant_emea.ics"), "BEGIN:VCALENDAR").unwrap();

        write_index(dir.path()).unwrap();

        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains(r#"<a href="valorant_emea.ics">Valorant Emea</a>"#));
    }
}
