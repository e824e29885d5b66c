use std::fs::{read_to_string, write};

use applib_assets_cli::{cli::Commands, fonts::make_fonts};
use tempfile::tempdir;

#[test]
fn test_credits_command() {
    let tmp = tempdir().unwrap();
    write(tmp.path().join("credits.json"), r#"{"a.png": {"link": "http://x", "author": "Bob"}}"#)
        .unwrap();

    Commands::Credits {
        dir: tmp.path().to_path_buf(),
        input: "credits.json".into(),
        output: "README.md".into(),
    }
    .run()
    .unwrap();

    assert_eq!(
        read_to_string(tmp.path().join("README.md")).unwrap(),
        "| Icon | Link | Author |\n| --- | --- | --- |\n|![a.png](png/a.png)|[http://x](http://x)|Bob|\n"
    );
}

#[test]
fn test_fonts_command_missing_font() {
    let tmp = tempdir().unwrap();
    let err = make_fonts(&tmp.path().join("missing.ttf"), tmp.path(), "mono", &[12]).unwrap_err();
    assert!(err.to_string().contains("missing.ttf"));
    assert!(!tmp.path().join("mono").exists());
}
