pub mod db;
pub mod file;
pub mod memory;
pub mod namespaced;

pub use db::DbAdapter;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use namespaced::NamespacedStore;
