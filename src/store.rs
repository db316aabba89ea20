//! Whole-file record store and its builder.

use crate::error::{Error, Result};
use crate::persist::{self, WriteMode};
use crate::serializer::{JsonSerializer, Serializer};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A collection of records kept as one JSON array in one file.
///
/// Nothing is held in memory between calls: every operation reads the whole
/// file, and every write replaces the whole file. Use [`open`](Self::open) for the
/// defaults (pretty JSON, atomic writes) or [`builder`](Self::builder) to tune them.
///
/// **No locking.** Two [`modify`](Self::modify) calls that overlap on the same
/// file can interleave their load and save phases, and the later save wins. The
/// other cycle's change is lost without any error. This holds within one process as
/// much as across processes.
pub struct RecordStore<T> {
    path: PathBuf,
    serializer: JsonSerializer,
    mode: WriteMode,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RecordStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Store at `path` with pretty JSON and atomic writes. The file is not touched
    /// until the first save.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder(path).build()
    }

    /// Start configuring a new store. Call [`.build()`](RecordStoreBuilder::build)
    /// when ready.
    pub fn builder(path: impl AsRef<Path>) -> RecordStoreBuilder<T> {
        RecordStoreBuilder::new(path)
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// How saves replace the file.
    #[must_use]
    pub fn write_mode(&self) -> WriteMode {
        self.mode
    }

    // ---- reads ----

    /// Read the full collection. Missing or blank files give an empty collection.
    pub async fn load(&self) -> Result<Vec<T>> {
        persist::load(&self.path, &self.serializer).await
    }

    /// Read the full collection and keep the records matching `pred`, in file order.
    pub async fn filter<P>(&self, mut pred: P) -> Result<Vec<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let mut records = self.load().await?;
        records.retain(|r| pred(r));
        Ok(records)
    }

    // ---- writes ----

    /// Overwrite the file with `records`.
    pub async fn save(&self, records: &[T]) -> Result<()> {
        let bytes = self.serializer.serialize(records)?;
        persist::write(&self.path, &bytes, self.mode).await
    }

    /// One load, mutate, save cycle.
    ///
    /// `f` gets the freshly loaded collection. When it returns `Err` the cycle
    /// stops and the file is left as it was. When it returns `Ok` the whole
    /// collection is saved and its value is passed through.
    pub async fn modify<F, R, E>(&self, f: F) -> std::result::Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> std::result::Result<R, E>,
        E: From<Error>,
    {
        let mut records = self.load().await?;
        let out = f(&mut records)?;
        self.save(&records).await?;
        Ok(out)
    }

    /// Append one record and persist.
    pub async fn append(&self, record: T) -> Result<()> {
        self.modify(|records| {
            records.push(record);
            Ok(())
        })
        .await
    }
}

impl<T> std::fmt::Debug for RecordStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures a [`RecordStore`].
///
/// ```rust,no_run
/// use initiative_registry::{RecordStore, User, WriteMode};
///
/// let users = RecordStore::<User>::builder("data/users.json")
///     .pretty(false)
///     .write_mode(WriteMode::InPlace)
///     .build()
///     .unwrap();
/// ```
pub struct RecordStoreBuilder<T> {
    path: PathBuf,
    pretty: bool,
    mode: WriteMode,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RecordStoreBuilder<T>
where
    T: Serialize + DeserializeOwned,
{
    fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
            mode: WriteMode::default(),
            _marker: PhantomData,
        }
    }

    /// Write human-readable JSON with indentation (default: pretty).
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Set how saves replace the file (default: [`WriteMode::Atomic`]).
    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check the configuration and return the store.
    pub fn build(self) -> Result<RecordStore<T>> {
        if self.path.file_name().is_none() {
            return Err(Error::Config(format!(
                "store path {} does not name a file",
                self.path.display()
            )));
        }

        let serializer = if self.pretty {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::new()
        };

        Ok(RecordStore {
            path: self.path,
            serializer,
            mode: self.mode,
            _marker: PhantomData,
        })
    }
}

impl<T> std::fmt::Debug for RecordStoreBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStoreBuilder")
            .field("path", &self.path)
            .field("pretty", &self.pretty)
            .field("mode", &self.mode)
            .finish()
    }
}
