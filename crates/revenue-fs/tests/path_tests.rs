use revenue_fs::{NormalizedPath, ProjectPath, is_valid_file_name, validate_file_name};
use rstest::rstest;

#[test]
fn test_backslashes_are_normalized() {
    let path = NormalizedPath::new("C:\\Users\\remco\\Revenue");
    assert_eq!(path.as_str(), "C:/Users/remco/Revenue");
}

#[test]
fn test_join_project_path() {
    let root = NormalizedPath::new("/data/Revenue");
    let joined = root.join(ProjectPath::SyncBackups.as_str());
    assert_eq!(joined.as_str(), "/data/Revenue/backup/sync");
}

#[test]
fn test_join_with_trailing_slash() {
    let root = NormalizedPath::new("/data/");
    assert_eq!(root.join("content.xml").as_str(), "/data/content.xml");
}

#[test]
fn test_parent_of_content_file() {
    let path = NormalizedPath::new("/data/Revenue/content.xml");
    assert_eq!(path.parent().unwrap().as_str(), "/data/Revenue");
    assert_eq!(
        NormalizedPath::new("/content.xml").parent().unwrap().as_str(),
        "/"
    );
    assert!(NormalizedPath::new("content.xml").parent().is_none());
}

#[rstest]
#[case("My Company")]
#[case("Revenue 2023")]
#[case("facturen-2023_v2")]
#[case("Ærø Consulting")]
#[case(".revenue")]
fn test_valid_file_names(#[case] name: &str) {
    assert!(is_valid_file_name(name), "{name:?} should be valid");
}

#[rstest]
#[case("")]
#[case(".")]
#[case("..")]
#[case("a/b")]
#[case("a\\b")]
#[case("what?")]
#[case("star*")]
#[case("pipe|name")]
#[case("quote\"name")]
#[case("colon:name")]
#[case("<tag>")]
#[case("tab\tname")]
#[case("trailing.")]
#[case("trailing ")]
#[case("CON")]
#[case("nul.txt")]
#[case("Lpt1")]
fn test_invalid_file_names(#[case] name: &str) {
    assert!(!is_valid_file_name(name), "{name:?} should be invalid");
}

#[test]
fn test_overlong_name_is_invalid() {
    let name = "a".repeat(256);
    let err = validate_file_name(&name, "Project name").unwrap_err();
    assert!(err.contains("255"));
}
