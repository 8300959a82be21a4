// src/analysis/input_resolver.rs
use crate::types::ProfileDocument;

/// What the user has filled in on the submission form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub url_text: String,
    pub file: Option<ProfileDocument>,
}

impl FormState {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url_text: url.into(),
            file: None,
        }
    }

    pub fn with_file(document: ProfileDocument) -> Self {
        Self {
            url_text: String::new(),
            file: Some(document),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedInput<'a> {
    UseFile(&'a ProfileDocument),
    UseUrl(&'a str),
    Invalid,
}

/// A selected file always wins over URL text.
pub fn resolve(form: &FormState) -> ResolvedInput<'_> {
    if let Some(document) = &form.file {
        return ResolvedInput::UseFile(document);
    }

    let url = form.url_text.trim();
    if url.is_empty() {
        ResolvedInput::Invalid
    } else {
        ResolvedInput::UseUrl(url)
    }
}
