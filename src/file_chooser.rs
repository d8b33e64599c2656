//! File open and save dialogs.
//!
//! The underlying portal is `org.freedesktop.portal.FileChooser`. Selected
//! files come back as URIs into the document portal filesystem.

use serde_json::{json, Value};

use crate::error::PortalError;
use crate::options::{OptionsDict, ResultBundle};
use crate::request::RequestPayload;

const INTERFACE: &str = "org.freedesktop.portal.FileChooser";

/// One rule of a file filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRule {
    /// Shell glob, e.g. `*.png`
    Glob(String),
    /// Mimetype, e.g. `image/png`
    MimeType(String),
}

impl FilterRule {
    fn to_value(&self) -> Value {
        match self {
            FilterRule::Glob(pattern) => json!([0, pattern]),
            FilterRule::MimeType(mime) => json!([1, mime]),
        }
    }
}

/// A named file filter offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// User-visible name
    pub label: String,
    pub rules: Vec<FilterRule>,
}

impl FileFilter {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rules: Vec::new(),
        }
    }

    pub fn glob(mut self, pattern: impl Into<String>) -> Self {
        self.rules.push(FilterRule::Glob(pattern.into()));
        self
    }

    pub fn mimetype(mut self, mime: impl Into<String>) -> Self {
        self.rules.push(FilterRule::MimeType(mime.into()));
        self
    }

    fn to_value(&self) -> Value {
        let rules: Vec<Value> = self.rules.iter().map(FilterRule::to_value).collect();
        json!([self.label, rules])
    }
}

/// An extra widget shown in the dialog. An empty option list is a boolean
/// choice, typically displayed as a check button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Identifier returned with the response
    pub id: String,
    /// User-visible label
    pub label: String,
    /// `(id, label)` alternatives; empty for a boolean choice
    pub options: Vec<(String, String)>,
    /// Initially selected option id, empty to let the portal decide
    pub initial: String,
}

impl Choice {
    fn to_value(&self) -> Value {
        let options: Vec<Value> = self
            .options
            .iter()
            .map(|(id, label)| json!([id, label]))
            .collect();
        json!([self.id, self.label, options, self.initial])
    }
}

/// What the user selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChoices {
    /// URIs of the selected files
    pub uris: Vec<String>,
    /// `(choice id, selected option id)` pairs for any widgets passed in
    pub choices: Vec<(String, String)>,
}

fn decode_choices(results: &ResultBundle) -> Vec<(String, String)> {
    let Some(raw) = results.get("choices").and_then(Value::as_array) else {
        return Vec::new();
    };
    raw.iter()
        .filter_map(|pair| {
            let pair = pair.as_array()?;
            match pair.as_slice() {
                [id, selected] => Some((id.as_str()?.to_string(), selected.as_str()?.to_string())),
                _ => None,
            }
        })
        .collect()
}

fn decode_file_choices(results: ResultBundle) -> Result<FileChoices, PortalError> {
    let uris = results.require_str_array("uris")?;
    let choices = decode_choices(&results);
    Ok(FileChoices { uris, choices })
}

/// Ask the user to open one or more files.
#[derive(Debug, Clone, Default)]
pub struct OpenFile {
    /// Dialog title
    pub title: String,
    pub modal: bool,
    /// Allow selecting more than one file
    pub multiple: bool,
    pub filters: Vec<FileFilter>,
    pub choices: Vec<Choice>,
}

impl OpenFile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl RequestPayload for OpenFile {
    type Output = FileChoices;

    fn interface(&self) -> &'static str {
        INTERFACE
    }

    fn method(&self) -> &'static str {
        "OpenFile"
    }

    fn to_options(&self) -> OptionsDict {
        let mut options = OptionsDict::new();
        options.insert("title".to_string(), json!(self.title));
        options.insert("modal".to_string(), json!(self.modal));
        if self.multiple {
            options.insert("multiple".to_string(), json!(true));
        }
        if !self.filters.is_empty() {
            let filters: Vec<Value> = self.filters.iter().map(FileFilter::to_value).collect();
            options.insert("filters".to_string(), Value::Array(filters));
        }
        if !self.choices.is_empty() {
            let choices: Vec<Value> = self.choices.iter().map(Choice::to_value).collect();
            options.insert("choices".to_string(), Value::Array(choices));
        }
        options
    }

    fn decode(results: ResultBundle) -> Result<FileChoices, PortalError> {
        decode_file_choices(results)
    }
}

/// Ask the user for a location to save a file.
#[derive(Debug, Clone, Default)]
pub struct SaveFile {
    /// Dialog title
    pub title: String,
    pub modal: bool,
    /// Suggested filename
    pub current_name: Option<String>,
    /// Suggested folder to save in
    pub current_folder: Option<String>,
    /// The current file, when saving an existing one
    pub current_file: Option<String>,
    pub filters: Vec<FileFilter>,
    pub choices: Vec<Choice>,
}

impl SaveFile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl RequestPayload for SaveFile {
    type Output = FileChoices;

    fn interface(&self) -> &'static str {
        INTERFACE
    }

    fn method(&self) -> &'static str {
        "SaveFile"
    }

    fn to_options(&self) -> OptionsDict {
        let mut options = OptionsDict::new();
        options.insert("title".to_string(), json!(self.title));
        options.insert("modal".to_string(), json!(self.modal));
        if let Some(name) = &self.current_name {
            options.insert("current_name".to_string(), json!(name));
        }
        if let Some(folder) = &self.current_folder {
            options.insert("current_folder".to_string(), json!(folder));
        }
        if let Some(file) = &self.current_file {
            options.insert("current_file".to_string(), json!(file));
        }
        if !self.filters.is_empty() {
            let filters: Vec<Value> = self.filters.iter().map(FileFilter::to_value).collect();
            options.insert("filters".to_string(), Value::Array(filters));
        }
        if !self.choices.is_empty() {
            let choices: Vec<Value> = self.choices.iter().map(Choice::to_value).collect();
            options.insert("choices".to_string(), Value::Array(choices));
        }
        options
    }

    fn decode(results: ResultBundle) -> Result<FileChoices, PortalError> {
        decode_file_choices(results)
    }
}
