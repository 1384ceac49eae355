pub mod directory;
pub mod session;
pub mod store;

pub use directory::{Directory, DEMO_PASSWORD};
pub use session::{decode_identity, Session};
pub use store::{FileStore, MemoryStore, SessionStore, SESSION_KEY};
