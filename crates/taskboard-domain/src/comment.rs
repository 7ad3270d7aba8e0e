use serde::{Deserialize, Serialize};
use taskboard_core::Timestamp;

use crate::member::Member;

pub type CommentId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Formatting applied to a comment body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default)]
    pub font_style: FontStyle,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default)]
    pub text_decoration: TextDecoration,
    #[serde(default)]
    pub text_align: TextAlign,
}

/// A single formatting action from the comment editor toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToggle {
    Bold,
    Italic,
    Underline,
    Align(TextAlign),
}

impl TextStyle {
    /// Returns a copy with `toggle` applied. Bold, italic and underline flip;
    /// alignment is set.
    pub fn toggled(self, toggle: StyleToggle) -> Self {
        let mut style = self;
        match toggle {
            StyleToggle::Bold => {
                style.font_weight = match style.font_weight {
                    FontWeight::Normal => FontWeight::Bold,
                    FontWeight::Bold => FontWeight::Normal,
                }
            }
            StyleToggle::Italic => {
                style.font_style = match style.font_style {
                    FontStyle::Normal => FontStyle::Italic,
                    FontStyle::Italic => FontStyle::Normal,
                }
            }
            StyleToggle::Underline => {
                style.text_decoration = match style.text_decoration {
                    TextDecoration::None => TextDecoration::Underline,
                    TextDecoration::Underline => TextDecoration::None,
                }
            }
            StyleToggle::Align(align) => style.text_align = align,
        }
        style
    }
}

/// A comment on a task. `by_member` is a snapshot of the author taken when
/// the comment was written, not a live reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub archived_at: Timestamp,
    pub by_member: Member,
    pub txt: String,
    #[serde(default)]
    pub style: TextStyle,
}

impl Comment {
    pub fn with_txt(mut self, txt: impl Into<String>) -> Self {
        self.txt = txt.into();
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}
