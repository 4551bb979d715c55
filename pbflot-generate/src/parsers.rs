use std::path::Path;

use pbflot_data::{ControlPointRecord, ResponseTableRecord};

/// Parses one `<table>.dat` curve file. The table is named after the file stem.
///
/// ```text
/// # comment
/// unit g/t
/// columns recovery grade
/// 0    10.0  45.0
/// 25   30.0  48.0
/// ```
pub fn parse_table(path: &Path) -> ResponseTableRecord {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .expect("curve file has a UTF-8 name")
        .to_string();
    parse_table_str(&name, &content)
}

pub fn parse_table_str(name: &str, content: &str) -> ResponseTableRecord {
    let mut unit = String::new();
    let mut attributes = Vec::new();
    let mut points = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        let mut words = line.split_whitespace();
        match words.next() {
            Some("unit") => unit = words.collect::<Vec<_>>().join(" "),
            Some("columns") => attributes = words.map(str::to_string).collect(),
            Some(key) => {
                let parse = |w: &str| -> f64 {
                    w.parse().unwrap_or_else(|_| {
                        panic!("{name}.dat line {}: bad number '{w}'", lineno + 1)
                    })
                };
                points.push(ControlPointRecord {
                    key: parse(key),
                    values: words.map(parse).collect(),
                });
            }
            None => {}
        }
    }

    ResponseTableRecord {
        name: name.to_string(),
        unit,
        attributes,
        points,
    }
}
