//! Section breaks

use serde::{Deserialize, Serialize};

use crate::style::Margins;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Value of `w:pgSz/@w:orient`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Where the content after a section break starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    #[default]
    Continuous,
    NextPage,
    EvenPage,
    OddPage,
    NextColumn,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::NextPage => "nextPage",
            Self::EvenPage => "evenPage",
            Self::OddPage => "oddPage",
            Self::NextColumn => "nextColumn",
        }
    }
}

/// A section break; unset values fall back to the document's
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub kind: SectionKind,
    pub orientation: Option<Orientation>,
    pub margins: Option<Margins>,
}

impl Section {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }
}
