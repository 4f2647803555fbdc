pub mod language;
pub mod types;

pub use language::{Language, LANGUAGES};
pub use types::{AppEvent, CaptureRegion, EngineKind, SettingsPatch, SnipRecord, TextSource, UiEvent};
