//! # Icon Credits
//!
//! Turn a JSON map of icon filenames to their source and author into a
//! Markdown attribution table.
//!
//! ```
//! use icon_credits::Credits;
//!
//! let credits = Credits::from_json(r#"{"a.png": {"link": "http://x", "author": "Bob"}}"#).unwrap();
//! assert_eq!(
//!     credits.to_markdown(),
//!     "| Icon | Link | Author |\n| --- | --- | --- |\n|![a.png](png/a.png)|[http://x](http://x)|Bob|\n"
//! );
//! ```

mod error;

use std::{
    fs::{read_to_string, write},
    path::Path,
};

use indexmap::IndexMap;
use log::info;
use serde::Deserialize;

pub use error::{Error, Result};

/// Default input file name.
pub const CREDITS_FILENAME: &str = "credits.json";

/// Default output file name.
pub const README_FILENAME: &str = "README.md";

/// Directory, relative to the README, holding the icon images.
pub const ICON_DIR: &str = "png";

const HEADER: &str = "| Icon | Link | Author |\n| --- | --- | --- |\n";

/// Where an icon came from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credit {
    pub link: String,
    pub author: String,
}

/// Icon credits keyed by filename, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credits {
    entries: IndexMap<String, Credit>,
}

impl Credits {
    /// Parse credits; every entry must have both `link` and `author`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Credit)> {
        self.entries.iter().map(|(filename, credit)| (filename.as_str(), credit))
    }

    /// Render the attribution table, one row per icon.
    ///
    /// Cells are written verbatim, without Markdown escaping.
    pub fn to_markdown(&self) -> String {
        let rows: String = self
            .iter()
            .map(|(filename, credit)| {
                format!(
                    "|![{filename}]({ICON_DIR}/{filename})|[{link}]({link})|{author}|\n",
                    link = credit.link,
                    author = credit.author,
                )
            })
            .collect();
        format!("{HEADER}{rows}")
    }
}

/// Render `input` into `output`, overwriting it. Returns the number of rows.
pub fn write_readme(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize> {
    let output = output.as_ref();
    let credits = Credits::load(input)?;
    write(output, credits.to_markdown()).map_err(|e| Error::io(output, e))?;
    info!("Wrote {} credits to {}", credits.len(), output.display());
    Ok(credits.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_entry() {
        let credits =
            Credits::from_json(r#"{"a.png": {"link": "http://x", "author": "Bob"}}"#).unwrap();
        assert_eq!(
            credits.to_markdown(),
            "| Icon | Link | Author |\n\
             | --- | --- | --- |\n\
             |![a.png](png/a.png)|[http://x](http://x)|Bob|\n"
        );
    }

    #[test]
    fn test_rows_follow_declaration_order() {
        let credits = Credits::from_json(
            r#"{
                "zeta.png": {"link": "https://z", "author": "Z"},
                "alpha.png": {"link": "https://a", "author": "A"},
                "mid.png": {"link": "https://m", "author": "M"}
            }"#,
        )
        .unwrap();

        let markdown = credits.to_markdown();
        let rows: Vec<&str> = markdown.lines().skip(2).collect();
        assert_eq!(
            rows,
            [
                "|![zeta.png](png/zeta.png)|[https://z](https://z)|Z|",
                "|![alpha.png](png/alpha.png)|[https://a](https://a)|A|",
                "|![mid.png](png/mid.png)|[https://m](https://m)|M|",
            ]
        );
    }

    #[test]
    fn test_empty_map_is_header_only() {
        let credits = Credits::from_json("{}").unwrap();
        assert!(credits.is_empty());
        assert_eq!(credits.to_markdown(), HEADER);
    }

    #[test]
    fn test_author_is_not_escaped() {
        let credits =
            Credits::from_json(r#"{"i.png": {"link": "l", "author": "A | *B*"}}"#).unwrap();
        assert!(credits.to_markdown().ends_with("|[l](l)|A | *B*|\n"));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let credits = Credits::from_json(
            r#"{"i.png": {"link": "l", "author": "a", "license": "CC-BY"}}"#,
        )
        .unwrap();
        assert_eq!(credits.len(), 1);
    }

    #[test]
    fn test_missing_author_is_fatal() {
        let err = Credits::from_json(r#"{"i.png": {"link": "l"}}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("author"));
    }

    #[test]
    fn test_missing_link_is_fatal() {
        assert!(Credits::from_json(r#"{"i.png": {"author": "a"}}"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        assert!(matches!(Credits::from_json("{not json"), Err(Error::Json(_))));
        assert!(matches!(Credits::from_json("[]"), Err(Error::Json(_))));
    }
}
