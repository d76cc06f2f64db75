//! Core types and client-side state for the critterfacts app.
//!
//! Everything in this crate is platform-neutral: the fact record, the
//! persisted session and its storage mirror, and the pure state machines
//! driving the refresh timer. The WASM frontend supplies the browser
//! bindings; tests run natively.

pub mod countdown;
pub mod fact;
pub mod sequence;
pub mod session;
pub mod storage;

pub use countdown::Countdown;
pub use fact::Fact;
pub use sequence::RequestSequence;
pub use session::{Session, USER_STORAGE_KEY};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
