//=========================================================================
// Image Buffer
//=========================================================================
//
// Owning, copyable 2D pixel buffer with interleaved channels.
//
// Layout (row-major, interleaved):
// ```text
//   index(y, x, c) = (y * width + x) * channels + c
//
//   row 0:  [p(0,0) c0..cN][p(0,1) c0..cN] ... [p(0,W-1) c0..cN]
//   row 1:  [p(1,0) c0..cN] ...
//   ...
// ```
//
// Ownership: a buffer exclusively owns one allocation. Copies (`Clone`,
// `clone_from`) are always deep. Slices and pointers are derived on
// demand from that single allocation, never cached.
//
//=========================================================================

//=== External Dependencies ===============================================

use bytemuck::Pod;

//=== Internal Dependencies ===============================================

use super::error::ImageError;

//=== ImageBuffer =========================================================

/// Owning 2D array of numeric samples with a fixed per-pixel channel count.
///
/// `T` is any plain-old-data element type (`u8`, `u16`, `f32`, ...). Two
/// aliases cover the common cases: [`ImageF`] and [`ImageByte`].
///
/// # States
///
/// - **Empty** (`Default`): 0×0, 0 channels, no storage.
/// - **Sized** ([`ImageBuffer::new`]): storage of exactly
///   `width * height * channels` zero-initialized elements.
///
/// # Index Contract
///
/// `buffer[(y, x, c)]` addresses channel `c` of pixel `(y, x)`.
/// `buffer[(y, x)]` addresses flat element `y * width + x` with no channel
/// stride. Both panic when any coordinate lies outside the declared
/// dimensions. Use [`ImageBuffer::get`] for a checked
/// lookup.
///
/// # Examples
///
/// ```
/// use recon_viewer::core::image::ImageF;
///
/// let mut img = ImageF::new(4, 2, 3).unwrap();
/// img[(1, 3, 2)] = 0.5;
///
/// let copy = img.clone();
/// img.flip_y_inplace();
///
/// assert_eq!(img[(0, 3, 2)], 0.5);
/// assert_eq!(copy[(1, 3, 2)], 0.5);
/// ```
pub struct ImageBuffer<T: Pod> {
    /// Declared `(width, height)`.
    dims: (u32, u32),

    /// Samples per pixel.
    channels: u32,

    /// `None` only for the empty state.
    storage: Option<Box<[T]>>,
}

/// Floating point image (linear color, depth, normals).
pub type ImageF = ImageBuffer<f32>;

/// 8-bit image (decoded LDR textures).
pub type ImageByte = ImageBuffer<u8>;

impl<T: Pod> ImageBuffer<T> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty buffer without allocating.
    pub fn new_empty() -> Self {
        Self {
            dims: (0, 0),
            channels: 0,
            storage: None,
        }
    }

    /// Allocates a zero-initialized buffer of `width * height * channels`
    /// elements.
    ///
    /// # Errors
    ///
    /// - [`ImageError::SizeOverflow`] if the element count overflows `usize`
    /// - [`ImageError::Allocation`] if memory cannot be obtained
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self, ImageError> {
        let len = element_count::<T>(width, height, channels)?;
        let storage = allocate_zeroed::<T>(len)?;

        Ok(Self {
            dims: (width, height),
            channels,
            storage: Some(storage),
        })
    }

    /// Adopts samples produced by an upstream decoder.
    ///
    /// The vector must hold exactly `width * height * channels` elements in
    /// row-major interleaved order.
    pub fn from_vec(
        width: u32,
        height: u32,
        channels: u32,
        samples: Vec<T>,
    ) -> Result<Self, ImageError> {
        let expected = element_count::<T>(width, height, channels)?;

        if samples.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            dims: (width, height),
            channels,
            storage: Some(samples.into_boxed_slice()),
        })
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, ImageError> {
        let storage = match &self.storage {
            Some(src) => {
                let mut samples = Vec::new();
                samples.try_reserve_exact(src.len())?;
                samples.extend_from_slice(src);
                Some(samples.into_boxed_slice())
            }
            None => None,
        };

        Ok(Self {
            dims: self.dims,
            channels: self.channels,
            storage,
        })
    }

    //--- Transformations --------------------------------------------------

    /// Reverses row order in place.
    ///
    /// Converts between top-left origin (image decoders) and bottom-left
    /// origin (GPU texture sampling). Dimensions and channel layout are
    /// unchanged. Applying it twice restores the original content.
    pub fn flip_y_inplace(&mut self) {
        let height = self.dims.1 as usize;
        let row_stride = self.row_len() * std::mem::size_of::<T>();

        let Some(storage) = self.storage.as_deref_mut() else {
            return;
        };

        if row_stride == 0 || height < 2 {
            return;
        }

        let bytes: &mut [u8] = bytemuck::cast_slice_mut(storage);
        let mut scratch = vec![0u8; row_stride];

        let mut low = 0;
        let mut high = (height - 1) * row_stride;

        while low < high {
            let (head, tail) = bytes.split_at_mut(high);
            let low_row = &mut head[low..low + row_stride];
            let high_row = &mut tail[..row_stride];

            scratch.copy_from_slice(low_row);
            low_row.copy_from_slice(high_row);
            high_row.copy_from_slice(&scratch);

            low += row_stride;
            high -= row_stride;
        }
    }

    //--- Dimensions -------------------------------------------------------

    /// Declared `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.0
    }

    pub fn height(&self) -> u32 {
        self.dims.1
    }

    /// Samples per pixel.
    pub fn num_channels(&self) -> u32 {
        self.channels
    }

    /// `width * height`.
    pub fn num_pixels(&self) -> usize {
        self.dims.0 as usize * self.dims.1 as usize
    }

    /// `width * height * channels * size_of::<T>()`.
    pub fn num_bytes(&self) -> usize {
        self.num_pixels() * self.channels as usize * std::mem::size_of::<T>()
    }

    /// Returns `false` only for the empty (default) state.
    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    //--- Storage Access ---------------------------------------------------

    /// All samples in row-major interleaved order (empty when unallocated).
    pub fn data(&self) -> &[T] {
        self.storage.as_deref().unwrap_or(&[])
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        self.storage.as_deref_mut().unwrap_or(&mut [])
    }

    /// Raw bytes of the storage, e.g. for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.data())
    }

    pub fn as_ptr(&self) -> *const T {
        self.data().as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data_mut().as_mut_ptr()
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.dims.1 as usize, "row {} out of bounds (height {})", y, self.dims.1);
        let len = self.row_len();
        &self.data()[y * len..(y + 1) * len]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.dims.1 as usize, "row {} out of bounds (height {})", y, self.dims.1);
        let len = self.row_len();
        &mut self.data_mut()[y * len..(y + 1) * len]
    }

    /// Checked sample lookup at `(y, x, channel)`.
    pub fn get(&self, y: usize, x: usize, channel: usize) -> Option<&T> {
        if !self.contains(y, x, channel) {
            return None;
        }
        self.data().get(self.offset_unchecked(y, x, channel))
    }

    pub fn get_mut(&mut self, y: usize, x: usize, channel: usize) -> Option<&mut T> {
        if !self.contains(y, x, channel) {
            return None;
        }
        let idx = self.offset_unchecked(y, x, channel);
        self.data_mut().get_mut(idx)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Elements per row.
    fn row_len(&self) -> usize {
        self.dims.0 as usize * self.channels as usize
    }

    fn contains(&self, y: usize, x: usize, channel: usize) -> bool {
        y < self.dims.1 as usize && x < self.dims.0 as usize && channel < self.channels as usize
    }

    fn offset_unchecked(&self, y: usize, x: usize, channel: usize) -> usize {
        (y * self.dims.0 as usize + x) * self.channels as usize + channel
    }

    fn offset(&self, y: usize, x: usize, channel: usize) -> usize {
        assert!(
            self.contains(y, x, channel),
            "pixel ({}, {}, {}) out of bounds for {}x{}x{} image",
            y,
            x,
            channel,
            self.dims.0,
            self.dims.1,
            self.channels
        );
        self.offset_unchecked(y, x, channel)
    }

    /// Flat element offset `y * width + x`, ignoring channels.
    fn flat_offset(&self, y: usize, x: usize) -> usize {
        let idx = y * self.dims.0 as usize + x;
        assert!(
            y < self.dims.1 as usize && x < self.dims.0 as usize && idx < self.data().len(),
            "element ({}, {}) out of bounds for {}x{}x{} image",
            y,
            x,
            self.dims.0,
            self.dims.1,
            self.channels
        );
        idx
    }
}

//=== Allocation Helpers ==================================================

fn element_count<T>(width: u32, height: u32, channels: u32) -> Result<usize, ImageError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels as usize))
        .filter(|n| n.checked_mul(std::mem::size_of::<T>()).is_some())
        .ok_or(ImageError::SizeOverflow {
            width,
            height,
            channels,
        })
}

fn allocate_zeroed<T: Pod>(len: usize) -> Result<Box<[T]>, ImageError> {
    let mut samples = Vec::new();
    samples.try_reserve_exact(len)?;
    samples.resize(len, T::zeroed());
    Ok(samples.into_boxed_slice())
}

//=== Trait Implementations ===============================================

impl<T: Pod> Default for ImageBuffer<T> {
    fn default() -> Self {
        Self::new_empty()
    }
}

/// Deep copy. The clone owns a fresh allocation sized from the source's
/// dimensions and channel count; an empty source yields an empty clone.
impl<T: Pod> Clone for ImageBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            dims: self.dims,
            channels: self.channels,
            storage: self.storage.clone(),
        }
    }

    /// Copy assignment. Existing storage is reused only when its element
    /// count matches the source exactly; otherwise it is replaced.
    fn clone_from(&mut self, source: &Self) {
        self.dims = source.dims;
        self.channels = source.channels;

        match (&mut self.storage, &source.storage) {
            (Some(dst), Some(src)) if dst.len() == src.len() => dst.copy_from_slice(src),
            (dst, src) => *dst = src.clone(),
        }
    }
}

impl<T: Pod + PartialEq> PartialEq for ImageBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims
            && self.channels == other.channels
            && self.has_storage() == other.has_storage()
            && self.data() == other.data()
    }
}

impl<T: Pod> std::fmt::Debug for ImageBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("width", &self.dims.0)
            .field("height", &self.dims.1)
            .field("channels", &self.channels)
            .field("has_storage", &self.has_storage())
            .finish()
    }
}

//--- Indexing ------------------------------------------------------------

/// `(row, column)`: flat element `y * width + x` of the storage, without
/// channel stride. Matches pixel `(y, x)` only for single-channel buffers.
impl<T: Pod> std::ops::Index<(usize, usize)> for ImageBuffer<T> {
    type Output = T;

    fn index(&self, (y, x): (usize, usize)) -> &T {
        let idx = self.flat_offset(y, x);
        &self.data()[idx]
    }
}

impl<T: Pod> std::ops::IndexMut<(usize, usize)> for ImageBuffer<T> {
    fn index_mut(&mut self, (y, x): (usize, usize)) -> &mut T {
        let idx = self.flat_offset(y, x);
        &mut self.data_mut()[idx]
    }
}

/// `(row, column, channel)`.
impl<T: Pod> std::ops::Index<(usize, usize, usize)> for ImageBuffer<T> {
    type Output = T;

    fn index(&self, (y, x, c): (usize, usize, usize)) -> &T {
        let idx = self.offset(y, x, c);
        &self.data()[idx]
    }
}

impl<T: Pod> std::ops::IndexMut<(usize, usize, usize)> for ImageBuffer<T> {
    fn index_mut(&mut self, (y, x, c): (usize, usize, usize)) -> &mut T {
        let idx = self.offset(y, x, c);
        &mut self.data_mut()[idx]
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
