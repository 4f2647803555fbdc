pub mod clipboard;
pub mod history;

pub use history::HistoryStore;
