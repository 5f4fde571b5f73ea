//! Payloads handed to the dialog and toast services

use crate::registry::EntityRegistryEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDialog {
    pub title: Option<String>,
    pub text: String,
    /// Optional link rendered below the text (label, url)
    pub link: Option<(String, String)>,
}

impl AlertDialog {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
            link: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.link = Some((label.into(), url.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationDialog {
    pub title: String,
    pub text: String,
    pub confirm_text: String,
    pub dismiss_text: String,
    pub destructive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignCategoryDialog {
    /// Category scope, "script" here
    pub scope: String,
    pub entry: EntityRegistryEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewAutomationMode {
    Automation,
    Script,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
