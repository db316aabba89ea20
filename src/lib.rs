//! REST backend that keeps initiatives and users in flat JSON files.
//!
//! Each collection lives in one file as a pretty-printed JSON array. Every
//! request loads the whole file, changes the array in memory, and writes the
//! whole file back.
//!
//! ```rust,no_run
//! use initiative_registry::{RecordStore, User};
//!
//! # async fn demo() -> initiative_registry::Result<()> {
//! let users = RecordStore::<User>::open("data/users.json")?;
//! let organizers = users.filter(User::is_organizer).await?;
//! println!("{} organizers", organizers.len());
//! # Ok(())
//! # }
//! ```
//!
//! **No locking.** Overlapping writers to the same file can lose updates, both
//! inside one process and across processes. Put a real database behind this if
//! that matters.

#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod persist;
pub mod records;
pub mod serializer;
pub mod store;

pub use api::{router, AppState};
pub use error::{Error, Result};
pub use persist::WriteMode;
pub use records::{Initiative, User};
pub use store::{RecordStore, RecordStoreBuilder};
