// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{load_index, resolve_index_path};

// Re-export find functionality from catscout-core
pub use catscout_core::find::{execute_find, FindOptions};
pub use catscout_core::report::{render_report, ReportFormat};
