//! Durable, bounded prediction history and client-side preferences

mod io;
mod paths;
mod record;
mod store;
mod theme;

pub use io::atomic_write;
pub use paths::Paths;
pub use record::{BatchRecord, BatchSummary, HistoryRecord, SingleRecord, BATCH_PREVIEW_LEN};
pub use store::{HistoryStats, HistoryStore, StorageInfo, StoreError, DEFAULT_MAX_ITEMS};
pub use theme::{load_theme, save_theme, Theme};
