//! Borrowed views of memory and raw word reads.
//!
//! Every read is volatile and goes straight to memory; nothing is cached, so the same
//! view observes changes made by hardware, other threads or other processes.

use std::marker::PhantomData;

use crate::word::WordSize;

/// A non-owning view of `len` bytes starting at a base address.
///
/// The view never frees or writes the memory it points to.
#[derive(Debug, Clone, Copy)]
pub struct MemoryRegion<'a> {
    base: *const u8,
    len: usize,
    _marker: PhantomData<&'a [u8]>,
}

// SAFETY: the region is only ever read, through volatile reads. Synchronizing with
// writers of the underlying memory is left to the owner of that memory.
unsafe impl Send for MemoryRegion<'_> {}
unsafe impl Sync for MemoryRegion<'_> {}

impl<'a> MemoryRegion<'a> {
    /// Creates a view over a borrowed byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            base: data.as_ptr(),
            len: data.len(),
            _marker: PhantomData,
        }
    }

    /// Creates a view over live memory, e.g. a memory-mapped register block or a
    /// shared memory segment that is modified outside of this process.
    ///
    /// # Safety
    ///
    /// `base` must be non-null and valid for reads of `len` bytes for the whole lifetime `'a`.
    pub unsafe fn from_raw_parts(base: *const u8, len: usize) -> Self {
        Self {
            base,
            len,
            _marker: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.base
    }

    /// Whether a read of `word_size` at `offset` stays inside the view.
    pub fn contains(&self, offset: usize, word_size: WordSize) -> bool {
        offset
            .checked_add(word_size.bytes())
            .is_some_and(|end| end <= self.len)
    }

    /// Reads the byte at `offset`. Returns `None` outside of the view.
    pub fn read_byte(&self, offset: usize) -> Option<u8> {
        if !self.contains(offset, WordSize::Bit8) {
            return None;
        }

        // SAFETY: bounds checked above.
        Some(unsafe { self.read_byte_unchecked(offset) })
    }

    /// Reads a raw word of `word_size` at `offset` in host byte order, zero-extended to `u64`.
    /// A 1-bit word reads its containing byte. Returns `None` outside of the view.
    pub fn read_word(&self, offset: usize, word_size: WordSize) -> Option<u64> {
        if !self.contains(offset, word_size) {
            return None;
        }

        // SAFETY: bounds checked above.
        Some(unsafe { self.read_word_unchecked(offset, word_size) })
    }

    /// # Safety
    ///
    /// `offset` must be inside the view.
    pub(crate) unsafe fn read_byte_unchecked(&self, offset: usize) -> u8 {
        unsafe { self.base.add(offset).read_volatile() }
    }

    /// Naturally aligned words are read with a single access of their full width, as
    /// device registers require. Unaligned words fall back to byte-wise reads.
    ///
    /// # Safety
    ///
    /// `offset..offset + word_size.bytes()` must be inside the view.
    pub(crate) unsafe fn read_word_unchecked(&self, offset: usize, word_size: WordSize) -> u64 {
        let ptr = unsafe { self.base.add(offset) };

        unsafe {
            match word_size {
                WordSize::Bit1 | WordSize::Bit8 => ptr.read_volatile() as u64,
                WordSize::Bit16 => {
                    let word = ptr.cast::<u16>();
                    if word.is_aligned() {
                        word.read_volatile() as u64
                    } else {
                        u16::from_ne_bytes(read_bytes(ptr)) as u64
                    }
                }
                WordSize::Bit32 => {
                    let word = ptr.cast::<u32>();
                    if word.is_aligned() {
                        word.read_volatile() as u64
                    } else {
                        u32::from_ne_bytes(read_bytes(ptr)) as u64
                    }
                }
                WordSize::Bit64 => {
                    let word = ptr.cast::<u64>();
                    if word.is_aligned() {
                        word.read_volatile()
                    } else {
                        u64::from_ne_bytes(read_bytes(ptr))
                    }
                }
            }
        }
    }
}

impl<'a> From<&'a [u8]> for MemoryRegion<'a> {
    fn from(data: &'a [u8]) -> Self {
        MemoryRegion::new(data)
    }
}

/// # Safety
///
/// `ptr` must be valid for reads of `N` bytes.
unsafe fn read_bytes<const N: usize>(ptr: *const u8) -> [u8; N] {
    let mut bytes = [0u8; N];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = unsafe { ptr.add(i).read_volatile() };
    }

    bytes
}
