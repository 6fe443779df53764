use clap::Parser;

use super::args::{CliArgs, Mode, OutputFormat};

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["scopewalk", "ast.json"]).expect("default args should parse");

    assert_eq!(args.file, std::path::PathBuf::from("ast.json"));
    assert_eq!(args.format, OutputFormat::Text);
    assert!(!args.tree);
    assert!(!args.no_color);
    assert_eq!(args.mode(), Mode::Scopes);
}

#[test]
fn parses_tree_and_json() {
    let args = CliArgs::try_parse_from(["scopewalk", "--tree", "--format", "json", "-"])
        .expect("flagged args should parse");

    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.mode(), Mode::Tree);
    assert_eq!(args.file, std::path::PathBuf::from("-"));
}

#[test]
fn parses_offset() {
    let args = CliArgs::try_parse_from(["scopewalk", "--at", "17", "ast.json"])
        .expect("offset should parse");
    assert_eq!(args.mode(), Mode::At(17));
}

#[test]
fn rejects_tree_with_offset() {
    assert!(CliArgs::try_parse_from(["scopewalk", "--tree", "--at", "3", "ast.json"]).is_err());
}

#[test]
fn requires_a_file() {
    assert!(CliArgs::try_parse_from(["scopewalk"]).is_err());
}
