mod parsers;

use std::io::Write;
use std::path::{Path, PathBuf};

use pbflot::{CurveSet, Lever};
use pbflot_data::{CurvePackRecord, VersionRecord};

fn main() {
    let workspace = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("generator lives inside the workspace")
        .to_path_buf();
    let mut args = std::env::args().skip(1);
    let data_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace.join("data_sources").join("standard"));
    let out_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace.join("packs").join("standard.bin.zst"));

    if !data_dir.is_dir() {
        eprintln!("Error: curve source directory not found at {:?}", data_dir);
        std::process::exit(1);
    }

    println!("Parsing curve files from {:?}...", data_dir);

    let mut tables = Vec::new();
    for lever in Lever::ALL {
        let path = data_dir.join(format!("{}.dat", lever.name()));
        if !path.is_file() {
            eprintln!("Error: missing curve file {:?}", path);
            std::process::exit(1);
        }
        let table = parsers::parse_table(&path);
        println!(
            "  {}: {} points x {} attributes ({})",
            table.name,
            table.points.len(),
            table.attributes.len(),
            table.unit
        );
        tables.push(table);
    }

    let record = CurvePackRecord {
        version: vec![VersionRecord {
            tag: env!("CARGO_PKG_VERSION").to_string(),
            notes: format!("compiled from {}", data_dir.display()),
        }],
        tables,
    };

    // Reject anything the model would refuse to load.
    if let Err(e) = CurveSet::from_record(&record) {
        eprintln!("Error: invalid curve set: {e}");
        std::process::exit(1);
    }

    println!("\nSerializing with postcard...");
    let serialized = postcard::to_allocvec(&record).expect("postcard serialization failed");
    println!("  Serialized size: {} bytes", serialized.len());

    println!("Compressing with zstd (level 19)...");
    let compressed = zstd::encode_all(&serialized[..], 19).expect("zstd compression failed");
    println!("  Compressed size: {} bytes", compressed.len());

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create output directory");
    }
    let mut f = std::fs::File::create(&out_path).expect("failed to create output file");
    f.write_all(&compressed)
        .expect("failed to write compressed data");

    println!("\nWrote {:?}", out_path);

    println!("Verifying round-trip deserialization...");
    let curves = CurveSet::from_pack(&compressed).expect("curve pack failed to load");
    assert_eq!(curves.to_record().tables, record.tables);
    println!("  Round-trip OK!");
}
