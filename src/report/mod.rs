//! Cut list CSV rendering and atomic file output

use chrono::Local;
use std::io::Write;
use std::path::Path;

use crate::entities::timber::TimberRecord;

/// First line of every cut list file
pub const DISCLAIMER: &str =
    "Estimated lumber order list - verify dimensions and quantities before purchasing";

/// Column headers, second line of every cut list file
pub const FIELD_NAMES: [&str; 13] = [
    "Name",
    "Part #",
    "Material",
    "Qty",
    "Order Length (ft)",
    "Order Width (in)",
    "Order Height (in)",
    "Total Boardfeet",
    "Order Mass",
    "Exact Length (in)",
    "Exact Width (in)",
    "Exact Height (in)",
    "Exact Mass (kg)",
];

/// Render the cut list as CSV: disclaimer, headers, one row per component.
///
/// The Order Mass column is deliberately left empty; see DESIGN.md.
pub fn render_csv(records: &[TimberRecord]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    let disclaimer = format!("{} (generated {})", DISCLAIMER, Local::now().format("%Y-%m-%d"));
    writer.write_record([disclaimer.as_str()])?;
    writer.write_record(FIELD_NAMES)?;

    for record in records {
        let props = &record.properties;
        writer.write_record([
            record.name.as_str(),
            record.part_number.as_str(),
            props.material.as_str(),
            &record.quantity.to_string(),
            &props.order_length_ft.to_string(),
            props.order_width.as_str(),
            props.order_height.as_str(),
            &record.total_board_feet().to_string(),
            "",
            props.exact_length.as_str(),
            props.exact_width.as_str(),
            props.exact_height.as_str(),
            &format!("{:.1}", props.mass_kg),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write `contents` to `path` without ever leaving a truncated file there:
/// the bytes go to a temporary sibling first, then rename into place.
pub fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    {
        let mut file = std::fs::File::create(&tmp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
    }

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::Resolution;
    use crate::entities::selection::{BoundingBox, Occurrence, PhysicalProperties};
    use crate::entities::species;
    use crate::entities::timber::build_records;

    fn sample_records() -> Vec<TimberRecord> {
        let occurrences = vec![
            Occurrence {
                name: "Post 6x4:1".to_string(),
                component: "Post 6x4".to_string(),
                bounding_box: BoundingBox {
                    length: 243.84,
                    width: 15.24,
                    height: 10.16,
                },
                physical: PhysicalProperties {
                    mass_kg: 38.2,
                    volume_cm3: 50000.0,
                },
                material: None,
            },
            Occurrence {
                name: "Sill, south:1".to_string(),
                component: "Sill, south".to_string(),
                bounding_box: BoundingBox {
                    length: 121.92,
                    width: 15.24,
                    height: 10.16,
                },
                physical: PhysicalProperties {
                    mass_kg: 19.1,
                    volume_cm3: 25000.0,
                },
                material: None,
            },
        ];
        let oak = species::find("Oak, Red").unwrap();
        build_records(&occurrences, oak, Resolution::Eighth, "LCTF-").unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let csv = render_csv(&sample_records()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(DISCLAIMER));
        assert_eq!(lines[1], FIELD_NAMES.join(","));
        assert!(lines[2].starts_with("Post 6x4,LCTF-1,\"Oak, Red\",1,10,"));
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let csv = render_csv(&sample_records()).unwrap();
        // both the component name and the species carry commas
        assert!(csv.contains("\"Sill, south\""));
        assert!(csv.contains("\"Oak, Red\""));
    }

    #[test]
    fn test_csv_rows_parse_back() {
        let csv = render_csv(&sample_records()).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv.as_bytes());

        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].len(), FIELD_NAMES.len());

        let post: Vec<&str> = rows[2].iter().collect();
        assert_eq!(
            post,
            [
                "Post 6x4", "LCTF-1", "Oak, Red", "1", "10", "6\"", "4\"", "20", "", "96\"",
                "6\"", "4\"", "48.9"
            ]
        );
    }

    #[test]
    fn test_empty_selection_yields_header_only_csv() {
        let csv = render_csv(&[]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(DISCLAIMER));
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cutlist.csv");
        write_atomic(&path, "a,b,c\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b,c\n");
        let entries: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["cutlist.csv"]);
    }
}
