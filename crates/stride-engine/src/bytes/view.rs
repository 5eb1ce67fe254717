use std::ops::Deref;

use crate::error::{PackError, Result};

/// Fixed-length, bounds-checked byte sequence with owned storage.
///
/// Length is set at construction and never changes. `Clone` is a deep copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteView {
    bytes: Box<[u8]>,
}

impl ByteView {
    /// Creates a zero-filled view of `len` bytes. `len == 0` is legal.
    #[inline]
    pub fn new(len: usize) -> Self {
        Self { bytes: vec![0u8; len].into_boxed_slice() }
    }

    /// Copies `bytes` into a new view.
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self { bytes: bytes.into() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reads the byte at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<u8> {
        self.bytes
            .get(index)
            .copied()
            .ok_or(PackError::OutOfRange { index, len: self.len() })
    }

    /// Overwrites the byte at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: u8) -> Result<()> {
        let len = self.len();
        let slot = self
            .bytes
            .get_mut(index)
            .ok_or(PackError::OutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Deref for ByteView {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteView {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes: bytes.into_boxed_slice() }
    }
}
