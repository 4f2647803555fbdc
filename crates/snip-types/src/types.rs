use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    /// Build a region from two arbitrary corners of a drag gesture.
    ///
    /// The corners may be given in any order; the result is the normalized
    /// rectangle spanning them. A click without movement yields a zero-size
    /// region, which [`CaptureRegion::is_empty`] reports.
    pub fn from_corners(ax: i32, ay: i32, bx: i32, by: i32) -> Self {
        let x = ax.min(bx);
        let y = ay.min(by);
        Self {
            x,
            y,
            width: (ax.max(bx) - x) as u32,
            height: (ay.max(by) - y) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Which OCR backend handles a snip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Tesseract,
    Gemini,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [EngineKind::Tesseract, EngineKind::Gemini];

    pub fn label(&self) -> &'static str {
        match self {
            EngineKind::Tesseract => "Tesseract",
            EngineKind::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tesseract" => Ok(EngineKind::Tesseract),
            "gemini" => Ok(EngineKind::Gemini),
            other => Err(format!("unknown OCR engine '{other}'")),
        }
    }
}

/// One recognized snip kept in the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnipRecord {
    pub timestamp: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub enum TextSource {
    Snip,
    Manual,
}

/// Settings edited in the UI, applied as one batch.
#[derive(Debug, Clone)]
pub struct SettingsPatch {
    pub engine: EngineKind,
    pub language: String,
    pub tesseract_path: String,
    pub gemini_api_key: String,
    pub save_text: bool,
    pub max_entries: usize,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Show,
    Hide,
    Close,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Hotkey or "New Snip" button: start a selection.
    TriggerSnip,
    /// Backend accepted the trigger, UI should raise the overlay.
    BeginSelection,
    RegionSelected(CaptureRegion),
    SelectionCancelled,
    SnipCompleted(SnipRecord),
    SnipFailed {
        message: String,
    },
    StatusUpdate {
        status: String,
        capturing: bool,
    },
    ApplySettings(SettingsPatch),
    /// Full history after an append or delete.
    ShowHistory(Vec<SnipRecord>),
    CopyText(String),
    DeleteEntry(String),
    UiEvent(UiEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_reversed_drag() {
        let region = CaptureRegion::from_corners(300, 250, 100, 50);
        assert_eq!(region.x, 100);
        assert_eq!(region.y, 50);
        assert_eq!(region.width, 200);
        assert_eq!(region.height, 200);
    }

    #[test]
    fn click_without_drag_is_empty() {
        let region = CaptureRegion::from_corners(40, 40, 40, 40);
        assert!(region.is_empty());

        let line = CaptureRegion::from_corners(0, 0, 100, 0);
        assert!(line.is_empty());
    }

    #[test]
    fn engine_kind_round_trips_through_serde() {
        let json = serde_json::to_string(&EngineKind::Gemini).unwrap();
        assert_eq!(json, "\"gemini\"");
        let back: EngineKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EngineKind::Gemini);
    }

    #[test]
    fn engine_kind_parses_case_insensitively() {
        assert_eq!("Tesseract".parse::<EngineKind>().unwrap(), EngineKind::Tesseract);
        assert_eq!("GEMINI".parse::<EngineKind>().unwrap(), EngineKind::Gemini);
        assert!("easyocr".parse::<EngineKind>().is_err());
    }
}
