use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};

use thiserror::Error;

macro_rules! impl_read {
    ($fn_name:ident, $typ:ty) => {
        pub fn $fn_name(&mut self) -> Result<$typ, VeroBufReaderError> {
            let mut buf = [0u8; size_of::<$typ>()];

            self.inner.read_exact(&mut buf)?;

            Ok(<$typ>::from_be_bytes(buf))
        }
    };
}

/// Represents the possible errors that can occur when using `VeroBufReader`.
#[derive(Error, Debug)]
pub enum VeroBufReaderError {
    /// An error occurred during a read operation on the underlying buffer.
    /// This variant transparently wraps `std::io::Error`.
    #[error(transparent)]
    ReadError(#[from] io::Error),

    /// An error occurred during a seek operation on the underlying buffer.
    /// This variant contains the `std::io::Error` that caused the seek failure.
    #[error("Failed to seek, error context: {0}")]
    FailedToSeek(io::Error),
}

/// A big-endian reader over font table data.
///
/// Every multi-byte field in `cmap` and `name` is stored big-endian, so
/// all of the `read_*` helpers decode in that order.
pub struct VeroBufReader<B: Read + Seek> {
    inner: BufReader<B>,
}

impl<'a> VeroBufReader<Cursor<&'a [u8]>> {
    /// Returns a reader over an in-memory table slice, which is how the
    /// `cmap` and `name` parsers receive their data.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::from_buffer(Cursor::new(bytes))
    }
}

impl<B> VeroBufReader<B>
where
    B: Read + Seek,
{
    /// Returns a new buf reader from anything which implements read
    /// the most obvious use case would be a File
    /// but it's also useful for loading fonts off a network buffer
    /// and such
    pub fn from_buffer(buffer: B) -> Self {
        Self {
            inner: BufReader::new(buffer),
        }
    }

    /// Seeks to a specifc place in the buffer
    /// from the start of the table
    ///
    /// # Examples
    ///
    /// ```
    /// use vero_platform::buffer::VeroBufReader;
    ///
    /// let data = [0, 0, 0, 10, 0, 0, 0, 20];
    /// let mut reader = VeroBufReader::from_bytes(&data);
    ///
    /// reader.seek_to(4).unwrap();
    /// assert_eq!(reader.read_u32().unwrap(), 20);
    /// ```
    pub fn seek_to(&mut self, pos: u64) -> Result<(), VeroBufReaderError> {
        self.inner
            .seek(SeekFrom::Start(pos))
            .map_err(VeroBufReaderError::FailedToSeek)?;

        Ok(())
    }

    impl_read!(read_u32, u32);
    impl_read!(read_u16, u16);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian() {
        let data = [0x00, 0x03, 0x00, 0x0A, 0x00, 0x00, 0x01, 0x2C];
        let mut reader = VeroBufReader::from_bytes(&data);

        assert_eq!(reader.read_u16().unwrap(), 3);
        assert_eq!(reader.read_u16().unwrap(), 10);
        assert_eq!(reader.read_u32().unwrap(), 300);
        assert!(reader.read_u16().is_err());
    }

    #[test]
    fn short_read_is_an_error() {
        let data = [0x00];
        let mut reader = VeroBufReader::from_bytes(&data);

        assert!(matches!(
            reader.read_u16(),
            Err(VeroBufReaderError::ReadError(_))
        ));
    }

    #[test]
    fn seek_then_read() {
        let data = [0x00, 0x01, 0x00, 0x02, 0x00, 0x03];
        let mut reader = VeroBufReader::from_bytes(&data);

        reader.seek_to(4).unwrap();
        assert_eq!(reader.read_u16().unwrap(), 3);
        reader.seek_to(0).unwrap();
        assert_eq!(reader.read_u16().unwrap(), 1);
    }
}
