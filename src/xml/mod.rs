//! XML look-and-feel files.
//!
//! The serde types in [`types`] mirror the file format; [`parse`] converts
//! them into [`crate::falagard::WidgetLook`]s and exposes them as a
//! [`crate::falagard::LookSource`].

mod parse;
mod types;

pub use parse::{
    LOOK_FILE_EXTENSIONS, XmlLookSource, convert_document, convert_look, look_files_in, parse_xml, parse_xml_file,
};
pub use types::*;
