use crate::purge;
use crate::purge::PurgeFilter;
use crate::tests::utils::config;
use crate::tests::utils::write_file;
use std::path::Path;
use std::path::PathBuf;

#[test]
fn output_path_inserts_suffix_before_extension() {
    assert_eq!(
        purge::output_path(Path::new("dir/schema.graphql"), Some("-purged")),
        PathBuf::from("dir/schema-purged.graphql"),
    );
    assert_eq!(
        purge::output_path(Path::new("dir/schema.graphqls"), Some("-purged")),
        PathBuf::from("dir/schema.graphqls-purged"),
    );
    assert_eq!(
        purge::output_path(Path::new("schema.graphql"), None),
        PathBuf::from("schema.graphql"),
    );
}

#[test]
fn purge_file_writes_suffixed_copy() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(
        dir.path(),
        "schema.graphql",
        "\"\"\"@GKeep\"\"\"\nenum Color {\n  \"\"\"@GKeep\"\"\"\n  RED\n  GREEN\n}\n\
        type Hidden {\n  a: Int\n}\n",
    );
    let config = config(&["@GKeep"], &[]);

    let written = purge::purge_file(&PurgeFilter::new(&config), &input, Some(".min")).unwrap();
    assert_eq!(written, dir.path().join("schema.min.graphql"));
    assert_eq!(
        std::fs::read_to_string(&written).unwrap(),
        "enum Color {\n  RED\n}\n",
    );
    assert!(std::fs::read_to_string(&input).unwrap().contains("Hidden"));
}

#[test]
fn purge_file_overwrites_without_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "schema.graphql", "type Hidden {\n  a: Int\n}\n");
    let config = config(&["@GKeep"], &[]);

    let written = purge::purge_file(&PurgeFilter::new(&config), &input, None).unwrap();
    assert_eq!(written, input);
    assert_eq!(std::fs::read_to_string(&input).unwrap(), "\n");
}

#[test]
fn purge_file_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "broken.graphql", "type Broken {\n  a: Int\n");
    let config = config(&["@GKeep"], &[]);

    let err = purge::purge_file(&PurgeFilter::new(&config), &input, Some("-x")).unwrap_err();
    assert!(format!("{err:#}").contains("couldn't parse"));
    assert!(!dir.path().join("broken-x.graphql").exists());
}
