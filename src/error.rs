use std::path::PathBuf;

use thiserror::Error;

/// What kind of named object a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    WidgetLook,
    NamedArea,
    StateImagery,
    ImagerySection,
    Window,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WidgetLook => "widget look",
            Self::NamedArea => "named area",
            Self::StateImagery => "state imagery",
            Self::ImagerySection => "imagery section",
            Self::Window => "window",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} not found: {name}")]
    NotFound { kind: ObjectKind, name: String },

    #[error("look-and-feel parse error: {0}")]
    Parse(String),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("duplicate {kind} name: {name}")]
    DuplicateName { kind: ObjectKind, name: String },

    #[error("widget look {name} is still in use ({holders} live references)")]
    InUse { name: String, holders: usize },

    #[error("invalid model index {index} (model has {len} items)")]
    InvalidIndex { index: usize, len: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn not_found(kind: ObjectKind, name: impl Into<String>) -> Self {
        Self::NotFound { kind, name: name.into() }
    }

    pub fn duplicate(kind: ObjectKind, name: impl Into<String>) -> Self {
        Self::DuplicateName { kind, name: name.into() }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
