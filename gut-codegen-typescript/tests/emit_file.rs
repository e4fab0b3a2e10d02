//! Tests for writing generated declarations to disk.

use std::fs;

use gut_codegen_typescript::{Error, NamingOptions, TypeScriptFile, convert, emit};
use gut_core::{Settings, WriteResult};
use gut_ir::{DateTime, Field, StructType, StructuralType, Uuid};
use tempfile::TempDir;

fn order() -> StructuralType {
    StructType::new("Order")
        .field(Field::of::<Uuid>("ID").tag("id"))
        .field(Field::of::<DateTime>("PlacedAt").tag("placed_at"))
        .field(Field::of::<u64>("Total").tag("total,omitempty"))
        .into()
}

#[test]
fn test_emit_writes_preamble_and_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("types.gen.ts");

    let content = convert(&order(), None).unwrap();
    let result = emit(&path, &content, None).unwrap();
    assert_eq!(result, WriteResult::Written);

    insta::assert_snapshot!(fs::read_to_string(&path).unwrap(), @r"
    export type UuidType = string
    export type BigIntType = BigInt
    export type DateType = Date

    export interface Order {
      id: UuidType
      placed_at: DateType
      total?: BigIntType
    }
    ");
}

#[test]
fn test_emit_with_custom_settings() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("types.gen.ts");
    let settings = Settings::new()
        .with_first_line("// This is a custom comment in the file\n")
        .with_date_type("string")
        .with_uuid_type("string")
        .with_big_int_type("number");

    emit(&path, "", Some(&settings)).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "// This is a custom comment in the file\nexport type UuidType = string\nexport type BigIntType = number\nexport type DateType = string\n\n"
    );
}

#[test]
fn test_emit_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("web").join("src").join("types.gen.ts");

    emit(&path, "", None).unwrap();
    assert!(path.exists());
}

#[test]
fn test_emit_skips_identical_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("types.gen.ts");
    let content = convert(&order(), None).unwrap();

    assert_eq!(emit(&path, &content, None).unwrap(), WriteResult::Written);
    assert_eq!(emit(&path, &content, None).unwrap(), WriteResult::Unchanged);
}

#[test]
fn test_emit_reports_write_failure() {
    let temp = TempDir::new().unwrap();

    let err = emit(temp.path(), "", None).unwrap_err();
    assert!(matches!(err, Error::Write { ref path, .. } if path == temp.path()));
    assert!(!err.is_fatal());
}

#[test]
fn test_file_concatenates_declarations_after_one_preamble() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("types.gen.ts");

    let file = TypeScriptFile::new(Settings::new().with_date_type("string"))
        .declare(&order(), None)
        .unwrap()
        .declare(&order(), Some(&NamingOptions::new().name("Draft").with_array()))
        .unwrap();
    file.write(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written.matches("export type UuidType").count(), 1);
    assert!(written.contains("export type DateType = string\n\nexport interface Order {"));
    assert!(written.contains("}\n\nexport type DraftArray = Draft[]\n\nexport interface Draft {"));
}
