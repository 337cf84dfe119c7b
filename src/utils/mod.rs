// Shared helpers: storage, timers, paging, formatting, FFI

pub mod cancellation;
pub mod constants;
pub mod debounce;
pub mod dialog;
pub mod format;
pub mod pagination;
pub mod storage;
pub mod stripe_ffi;

pub use cancellation::{FetchGuard, Ticket};
pub use constants::*;
pub use debounce::{BrowserScheduler, Debouncer, Scheduler};
pub use format::*;
pub use pagination::{PageRequest, Pager, PagingMode};
pub use storage::{BrowserStore, KeyValueStore};
