use crate::input_files::collect_input_files;
use crate::tests::utils::write_file;
use std::path::PathBuf;

fn default_exts() -> Vec<String> {
    vec!["graphql".to_string(), "graphqls".to_string()]
}

#[test]
fn directories_are_filtered_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "a.graphql", "");
    let b = write_file(dir.path(), "nested/b.graphqls", "");
    write_file(dir.path(), "notes.txt", "");

    let found = collect_input_files(&[dir.path().to_path_buf()], &default_exts(), &[]);
    assert_eq!(found, vec![a, b]);
}

#[test]
fn extensions_may_have_leading_dot() {
    let dir = tempfile::tempdir().unwrap();
    let gql = write_file(dir.path(), "a.gql", "");
    write_file(dir.path(), "b.graphql", "");

    let found = collect_input_files(
        &[dir.path().to_path_buf()],
        &[".gql".to_string()],
        &[],
    );
    assert_eq!(found, vec![gql]);
}

#[test]
fn explicit_files_are_kept_regardless_of_extension() {
    let dir = tempfile::tempdir().unwrap();
    let txt = write_file(dir.path(), "schema.txt", "");
    let found = collect_input_files(&[txt.clone()], &default_exts(), &[]);
    assert_eq!(found, vec![txt]);
}

/// The walk goes 5 levels below the directory passed in, and no further.
#[test]
fn walk_depth_is_limited() {
    let dir = tempfile::tempdir().unwrap();
    let shallow = write_file(dir.path(), "1/2/3/4/shallow.graphql", "");
    write_file(dir.path(), "1/2/3/4/5/deep.graphql", "");

    let found = collect_input_files(&[dir.path().to_path_buf()], &default_exts(), &[]);
    assert_eq!(found, vec![shallow]);
}

#[test]
fn exclusions_match_path_substrings() {
    let dir = tempfile::tempdir().unwrap();
    let kept = write_file(dir.path(), "src/schema.graphql", "");
    write_file(dir.path(), "generated/schema.graphql", "");
    let explicit = write_file(dir.path(), "generated/other.graphql", "");

    let found = collect_input_files(
        &[dir.path().to_path_buf(), explicit],
        &default_exts(),
        &[PathBuf::from("generated")],
    );
    assert_eq!(found, vec![kept]);
}

#[test]
fn missing_paths_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let present = write_file(dir.path(), "a.graphql", "");
    let found = collect_input_files(
        &[dir.path().join("missing"), present.clone()],
        &default_exts(),
        &[],
    );
    assert_eq!(found, vec![present]);
}
