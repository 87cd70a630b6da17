//! Date-named capture files on the SD card.
//!
//! Names are 8.3-safe for FAT cards: two-digit month, two-digit day, a
//! four-digit file index and a fixed extension, e.g. `06150042.tmp`.
//! Month leads so lexicographic directory order is chronological within a
//! year.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::LogDate;
use crate::consts::{DATA_FILE_EXT, MAX_FILE_INDEX};
use crate::format::{four_digits, two_digits};

/// Error type for capture file operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Index does not fit the four-digit filename field.
    #[error("File index {0} out of range (0-{MAX_FILE_INDEX})")]
    IndexOutOfRange(u16),

    /// Underlying filesystem failure.
    #[error("Cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A capture file index guaranteed to render in four digits
/// (`0..=MAX_FILE_INDEX`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct FileIndex(u16);

impl FileIndex {
    /// Creates a new FileIndex, validating that it's <= `MAX_FILE_INDEX`
    ///
    /// # Errors
    /// Returns `StorageError::IndexOutOfRange` if the value is
    /// > `MAX_FILE_INDEX`.
    pub fn new(value: u16) -> Result<Self, StorageError> {
        if value > MAX_FILE_INDEX {
            return Err(StorageError::IndexOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Returns the index value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// The next index, or None once the four-digit field is exhausted.
    pub const fn next(self) -> Option<Self> {
        if self.0 == MAX_FILE_INDEX {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }
}

impl TryFrom<u16> for FileIndex {
    type Error = StorageError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FileIndex> for u16 {
    fn from(index: FileIndex) -> Self {
        index.0
    }
}

impl fmt::Display for FileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", four_digits(self.0))
    }
}

/// Builds the capture file name for a date and index: `MMDDNNNN.tmp`.
pub fn data_file_name(index: FileIndex, date: &LogDate) -> String {
    format!(
        "{}{}{}.{DATA_FILE_EXT}",
        two_digits(date.month()),
        two_digits(date.day()),
        four_digits(index.get()),
    )
}

/// Joins the capture file name onto the card's data directory.
pub fn data_file_path(dir: &Path, index: FileIndex, date: &LogDate) -> PathBuf {
    dir.join(data_file_name(index, date))
}

/// Opens the capture file for the given date and index, creating it if
/// absent and appending otherwise.
///
/// # Errors
/// Returns `StorageError::Io` with the attempted path if the filesystem
/// refuses the open.
pub fn create_data_file(
    dir: &Path,
    index: FileIndex,
    date: &LogDate,
) -> Result<File, StorageError> {
    let path = data_file_path(dir, index, date);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| StorageError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_new_valid() {
        assert!(FileIndex::new(0).is_ok());
        assert!(FileIndex::new(42).is_ok());
        assert!(FileIndex::new(MAX_FILE_INDEX).is_ok());
    }

    #[test]
    fn test_index_new_out_of_range() {
        let result = FileIndex::new(10_000);
        assert!(matches!(result, Err(StorageError::IndexOutOfRange(10_000))));

        let result = FileIndex::new(u16::MAX);
        assert!(matches!(result, Err(StorageError::IndexOutOfRange(_))));
    }

    #[test]
    fn test_index_display_four_digits() {
        assert_eq!(FileIndex::new(7).unwrap().to_string(), "0007");
        assert_eq!(FileIndex::new(9999).unwrap().to_string(), "9999");
    }

    #[test]
    fn test_index_next() {
        let index = FileIndex::new(41).unwrap();
        assert_eq!(index.next(), Some(FileIndex::new(42).unwrap()));

        let last = FileIndex::new(MAX_FILE_INDEX).unwrap();
        assert_eq!(last.next(), None);
    }

    #[test]
    fn test_index_try_from_u16() {
        let index: FileIndex = 42.try_into().unwrap();
        assert_eq!(index.get(), 42);

        let result: Result<FileIndex, _> = 10_000.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_index_serde() {
        let index = FileIndex::new(42).unwrap();
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, "42");

        let parsed: FileIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(index, parsed);

        let result: Result<FileIndex, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_data_file_name() {
        let date = LogDate::new(15, 6).unwrap();
        let index = FileIndex::new(42).unwrap();
        assert_eq!(data_file_name(index, &date), "06150042.tmp");
    }

    #[test]
    fn test_data_file_name_placeholder_date() {
        let date = LogDate::new(0, 0).unwrap();
        let index = FileIndex::new(0).unwrap();
        assert_eq!(data_file_name(index, &date), "00000000.tmp");
    }

    #[test]
    fn test_data_file_name_sorts_chronologically() {
        let jan31 = data_file_name(FileIndex::new(0).unwrap(), &LogDate::new(31, 1).unwrap());
        let feb01 = data_file_name(FileIndex::new(0).unwrap(), &LogDate::new(1, 2).unwrap());
        assert!(jan31 < feb01);
    }

    #[test]
    fn test_data_file_path() {
        let date = LogDate::new(15, 6).unwrap();
        let index = FileIndex::new(42).unwrap();
        let path = data_file_path(Path::new("/sd/data"), index, &date);
        assert_eq!(path, PathBuf::from("/sd/data/06150042.tmp"));
    }

    #[test]
    fn test_create_data_file() {
        let dir = std::env::temp_dir().join("sample_log_storage_test");
        std::fs::create_dir_all(&dir).unwrap();

        let date = LogDate::new(15, 6).unwrap();
        let index = FileIndex::new(1).unwrap();
        let file = create_data_file(&dir, index, &date).unwrap();
        drop(file);

        let path = data_file_path(&dir, index, &date);
        assert!(path.exists());

        // Reopening appends rather than failing
        assert!(create_data_file(&dir, index, &date).is_ok());

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn test_create_data_file_missing_dir() {
        let dir = std::env::temp_dir().join("sample_log_storage_test_missing/nope");
        let date = LogDate::new(15, 6).unwrap();
        let index = FileIndex::new(1).unwrap();

        let result = create_data_file(&dir, index, &date);
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
