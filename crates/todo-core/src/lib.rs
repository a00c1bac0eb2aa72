//! Todo Widget Core
//!
//! Headless state containers behind the todo widget:
//! - task: the persisted entity
//! - store: ordered task list with an injected persistence port
//! - filter: view projection over the list
//! - edit: single-task edit session
//! - easter_egg: click counter driven by an injectable scheduler
//!
//! Nothing here touches the DOM; the UI crate renders these as a pure projection.

pub mod easter_egg;
pub mod edit;
pub mod error;
pub mod filter;
pub mod ids;
pub mod storage;
pub mod store;
pub mod task;
pub mod timer;

pub use easter_egg::{ClickCounter, ClickOutcome, EasterEggConfig};
pub use edit::{EditSession, EditTracker, SaveOutcome};
pub use error::{StorageError, StorageResult};
pub use filter::{visible, Filter};
pub use ids::{ClockIds, IdSource, SequentialIds};
pub use storage::{decode_tasks, encode_tasks, MemoryStorage, TaskStorage, STORAGE_KEY};
pub use store::TaskStore;
pub use task::{is_blank, Task, TaskId};
pub use timer::{Scheduler, TimerEvent, TimerHandle, VirtualClock};
