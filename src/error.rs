//! error handling stuff
use thiserror::Error;

#[derive(Debug, Error)]
/// An error
pub enum ShopError {
    /// a theme id that isn't part of the compiled-in catalog
    #[error("invalid theme id: {0:?}")]
    InvalidThemeId(String),

    /// the preference storage couldn't be read or written
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),

    /// the product catalog couldn't be fetched
    #[error("{0}")]
    FetchFailed(String),

    /// the product catalog response had an unexpected shape
    #[error("failed to parse products: {0}")]
    ParseFailed(String),

    /// an IO error
    #[error("i/o error: {0}")]
    IO(#[from] std::io::Error),

    /// a redb database error
    #[error("redb database error: {0}")]
    RedbDatabase(#[from] redb::DatabaseError),

    /// a redb transaction error
    #[error("redb transaction error: {0}")]
    RedbTransaction(#[from] redb::TransactionError),

    /// a redb table error
    #[error("redb table error: {0}")]
    RedbTable(#[from] redb::TableError),

    /// a redb storage error
    #[error("redb storage error: {0}")]
    RedbStorage(#[from] redb::StorageError),

    /// a redb commit error
    #[error("redb commit error: {0}")]
    RedbCommit(#[from] redb::CommitError),

    /// a report from color_eyre, shown with its causes and suggestions
    #[error("{0:?}")]
    EyreReport(#[from] color_eyre::Report),

    /// a prompt error
    #[cfg(feature = "cli")]
    #[error("prompt error: {0}")]
    Inquire(#[from] inquire::InquireError),

    /// a miette hook install error
    #[error("error installing miette hook: {0}")]
    MietteInstall(#[from] miette::InstallError),

    /// a custom error
    #[error("error: {0}")]
    Other(String),
}

impl ShopError {
    /// whether the error came from the preference storage backend
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable(_)
                | Self::IO(_)
                | Self::RedbDatabase(_)
                | Self::RedbTransaction(_)
                | Self::RedbTable(_)
                | Self::RedbStorage(_)
                | Self::RedbCommit(_)
        )
    }
}

impl From<String> for ShopError {
    fn from(value: String) -> Self {
        Self::Other(value)
    }
}

/// A result using [`ShopError`] as the `Err` variant
pub type Result<T, U = ShopError> = miette::Result<T, U>;

/// bail
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::error::ShopError::from(String::from($msg)))
    };

    ($err:expr $(,)?) => {
        return Err($crate::error::ShopError::from($err))
    };

    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::ShopError::from(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_classification() {
        assert!(ShopError::StorageUnavailable("quota".into()).is_storage());
        assert!(ShopError::IO(std::io::Error::other("disk")).is_storage());
        assert!(!ShopError::InvalidThemeId("theme9".into()).is_storage());
        assert!(!ShopError::FetchFailed("nope".into()).is_storage());
    }

    #[test]
    fn test_bail_formats() {
        fn fails(id: u32) -> Result<()> {
            bail!("no product {}", id)
        }

        let err = fails(7).unwrap_err();
        assert_eq!(err.to_string(), "error: no product 7");
    }
}
