use serde::{Deserialize, Serialize};

/// Document styling for the HTML and DOCX reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text and table cells (e.g. "Times New Roman").
    pub body_font: String,

    /// Font for the title and table captions.
    pub heading_font: String,

    /// Body text size in points.
    pub body_size: usize,

    /// Report title size in points.
    pub title_size: usize,

    /// Table caption size in points.
    pub caption_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 12,
            title_size: 16,
            caption_size: 13,
        }
    }
}
