//! File-backed implementations of the Latte client stores.
//!
//! Durable state lives as small JSON blobs under the platform config
//! directory; each store caches its contents in memory and holds its lock
//! across the whole read-modify-write-persist sequence, so no task ever
//! observes a partial update.

pub mod environment;
pub mod paths;
pub mod preference_store;
pub mod session_store;

pub use environment::ShellEnvironment;
pub use paths::LattePaths;
pub use preference_store::FilePreferenceStore;
pub use session_store::FileSessionStore;
