use serde::{Deserialize, Serialize};
use std::fmt;

/// Content of a single table cell.
///
/// Plain cells render their value as-is; titled cells render their title and
/// may point somewhere (e.g. the role detail page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Plain(String),
    Titled {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        link: Option<String>,
    },
}

impl Cell {
    pub fn titled(title: impl Into<String>) -> Self {
        Cell::Titled {
            title: title.into(),
            link: None,
        }
    }

    pub fn link(title: impl Into<String>, to: impl Into<String>) -> Self {
        Cell::Titled {
            title: title.into(),
            link: Some(to.into()),
        }
    }

    /// Text shown in the table body
    pub fn text(&self) -> &str {
        match self {
            Cell::Plain(value) => value,
            Cell::Titled { title, .. } => title,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Cell::Titled { link, .. } => link.as_deref(),
            Cell::Plain(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Plain(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Plain(value.to_string())
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Plain(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub selected: bool,
}

impl Row {
    pub fn new<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            selected: false,
        }
    }
}
