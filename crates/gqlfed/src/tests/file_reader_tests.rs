use crate::ReadContentError;
use crate::file_reader::read_content;
use crate::tests::utils::write_file;

#[test]
fn reads_utf8_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "schema.graphql", "scalar Date\n");
    assert_eq!(read_content(&path), Ok("scalar Date\n".to_string()));
}

#[test]
fn drops_byte_order_mark() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "schema.graphql", "\u{feff}scalar Date");
    assert_eq!(read_content(&path), Ok("scalar Date".to_string()));
}

#[test]
fn directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        read_content(dir.path()),
        Err(ReadContentError::NotAFile(dir.path().to_path_buf())),
    );
}

#[test]
fn missing_file_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.graphql");
    assert_eq!(read_content(&path), Err(ReadContentError::NotAFile(path)));
}

#[test]
fn invalid_utf8_reports_offset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.graphql");
    std::fs::write(&path, [0x73, 0xff, 0xfe]).unwrap();
    assert_eq!(
        read_content(&path),
        Err(ReadContentError::InvalidUtf8 {
            file_path: path,
            valid_up_to: 1,
        }),
    );
}
