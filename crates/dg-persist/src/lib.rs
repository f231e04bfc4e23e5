pub mod backend;
pub mod local;
pub mod memory;
pub mod remote;
pub mod sync;

pub use backend::{PersistError, PersistenceBackend};
pub use local::FileBackend;
pub use memory::MemoryBackend;
pub use remote::RemoteBackend;
pub use sync::PersistenceSync;
