pub mod error;
pub mod local;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use local::LocalStorage;
pub use memory::InMemoryStorage;
pub use traits::Storage;
