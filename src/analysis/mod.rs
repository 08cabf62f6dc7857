//! Pixel-level area and intersection counts over packed binary images.
//!
//! Images are packed into `u64` words, one bit per pixel, row-major, most significant bit first;
//! a set bit is a light pixel. Each image carries a [`ForegroundConvention`] telling which level
//! is counted, so the subject's dark silhouette is inverted explicitly instead of by an implicit
//! bitwise NOT. Counting is then one `count_ones` per word:
//! ```text
//! size    += popcount(fg(subject[i]))
//! overlap += popcount(fg(subject[i]) & fg(marker[i]))
//! ```

use {
  crate::{
    drawing::{BinaryImage, LIGHT},
    error::{Error, Result}
  },
  std::{
    iter::Sum,
    ops::{Add, Range}
  }
};

pub mod parallel;
pub use parallel::{ChunkTask, WorkerPool, partition};

#[cfg(test)] mod tests;

pub const WORD_BITS: usize = u64::BITS as usize;

/// Which stored level is the foreground of an image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ForegroundConvention {
  /// Dark shape on a light canvas; raw light bits must be inverted.
  DarkOnLight,
  /// Light shape on a dark canvas.
  LightOnDark
}

impl ForegroundConvention {
  /// Foreground bits of a packed word whose set bits are light pixels.
  #[inline]
  pub fn apply(self, word: u64) -> u64 {
    match self {
      ForegroundConvention::DarkOnLight => !word,
      ForegroundConvention::LightOnDark => word
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
  words: Vec<u64>,
  dimensions: (u32, u32),
  pixels: usize,
  convention: ForegroundConvention
}

impl PackedBitmap {
  pub fn pack(image: &BinaryImage, convention: ForegroundConvention) -> Self {
    let words = image.as_raw()
      .chunks(WORD_BITS)
      .map(|pixels| {
        let word = pixels.iter()
          .fold(0u64, |word, &value| word << 1 | (value == LIGHT) as u64);
        // left-align a partial last word
        word << (WORD_BITS - pixels.len())
      })
      .collect();
    Self {
      words,
      dimensions: image.dimensions(),
      pixels: image.as_raw().len(),
      convention
    }
  }

  pub fn words(&self) -> &[u64] {
    &self.words
  }

  /// Number of words.
  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn dimensions(&self) -> (u32, u32) {
    self.dimensions
  }

  pub fn pixels(&self) -> usize {
    self.pixels
  }

  /// Foreground bits of word `index`. Padding past the last pixel is never foreground.
  #[inline]
  pub fn foreground(&self, index: usize) -> u64 {
    self.convention.apply(self.words[index]) & self.mask(index)
  }

  #[inline]
  fn mask(&self, index: usize) -> u64 {
    let end = (index + 1) * WORD_BITS;
    match end.checked_sub(self.pixels) {
      Some(padding) if padding > 0 => u64::MAX << padding,
      _ => u64::MAX
    }
  }
}

/// Subject foreground size, and how much of it the marker covers.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct OverlapCounts {
  pub size: u64,
  pub overlap: u64
}

impl OverlapCounts {
  /// `overlap / size`. Undefined, and an error, for an empty subject.
  pub fn ratio(&self) -> Result<f64> {
    match self.size {
      0 => Err(Error::EmptySubject),
      size => Ok(self.overlap as f64 / size as f64)
    }
  }
}

impl Add for OverlapCounts {
  type Output = Self;

  fn add(self, other: Self) -> Self {
    Self {
      size: self.size + other.size,
      overlap: self.overlap + other.overlap
    }
  }
}

impl Sum for OverlapCounts {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::default(), Add::add)
  }
}

pub fn check_dimensions(subject: &PackedBitmap, marker: &PackedBitmap) -> Result<()> {
  if subject.dimensions() != marker.dimensions() {
    return Err(Error::DimensionMismatch {
      subject: subject.dimensions(),
      marker: marker.dimensions()
    });
  }
  Ok(())
}

/// Counts over a range of word positions. Callers guarantee the range is in bounds of both.
pub(crate) fn count_words(subject: &PackedBitmap, marker: &PackedBitmap, words: Range<usize>) -> OverlapCounts {
  words.fold(OverlapCounts::default(), |counts, i| {
    let a = subject.foreground(i);
    let b = marker.foreground(i);
    OverlapCounts {
      size: counts.size + a.count_ones() as u64,
      overlap: counts.overlap + (a & b).count_ones() as u64
    }
  })
}

/// Single pass over every word.
pub fn count_sequential(subject: &PackedBitmap, marker: &PackedBitmap) -> Result<OverlapCounts> {
  check_dimensions(subject, marker)?;
  Ok(count_words(subject, marker, 0..subject.len()))
}
