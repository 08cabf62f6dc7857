use {
  crate::{
    error::{Error, Result},
    geometry::{BoundingBox, Capsule, PixelSpace, Shape, SDF, P2}
  },
  euclid::Box2D,
  image::{GrayImage, Luma},
  std::{ops::Range, path::Path}
};


/// Stored value of a light pixel. Dark pixels are `0`.
pub const LIGHT: u8 = u8::MAX;
pub const DARK: u8 = 0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Level {
  Dark,
  Light
}

impl Level {
  pub fn luma(self) -> Luma<u8> {
    match self {
      Level::Dark => Luma([DARK]),
      Level::Light => Luma([LIGHT])
    }
  }

  pub fn from_luma(value: u8) -> Option<Self> {
    match value {
      DARK => Some(Level::Dark),
      LIGHT => Some(Level::Light),
      _ => None
    }
  }

  pub fn inverted(self) -> Self {
    match self {
      Level::Dark => Level::Light,
      Level::Light => Level::Dark
    }
  }
}

/// Two-level raster. Every pixel is either [`DARK`] or [`LIGHT`].
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryImage {
  buffer: GrayImage
}

impl BinaryImage {
  pub fn new(width: u32, height: u32, level: Level) -> Self {
    Self { buffer: GrayImage::from_pixel(width, height, level.luma()) }
  }

  pub fn square(side: u32, level: Level) -> Self {
    Self::new(side, side, level)
  }

  pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Level) -> Self {
    Self { buffer: GrayImage::from_fn(width, height, |x, y| f(x, y).luma()) }
  }

  /// Fails with [`Error::MalformedImage`] on the first pixel that is neither dark nor light.
  pub fn from_luma(buffer: GrayImage) -> Result<Self> {
    let malformed = buffer.enumerate_pixels()
      .find(|(_, _, pixel)| Level::from_luma(pixel.0[0]).is_none())
      .map(|(x, y, pixel)| Error::MalformedImage { x, y, value: pixel.0[0] });
    match malformed {
      Some(err) => Err(err),
      None => Ok(Self { buffer })
    }
  }

  /// Decode an image file; the format is guessed from the path.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::from_luma(image::open(path)?.into_luma8())
  }

  /// Encode as 8-bit grayscale; the format is derived from the path extension.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    self.buffer.save(path)?;
    Ok(())
  }

  pub fn dimensions(&self) -> (u32, u32) {
    self.buffer.dimensions()
  }

  pub fn get(&self, x: u32, y: u32) -> Level {
    match self.buffer.get_pixel(x, y).0[0] {
      LIGHT => Level::Light,
      _ => Level::Dark
    }
  }

  pub fn set(&mut self, x: u32, y: u32, level: Level) {
    self.buffer.put_pixel(x, y, level.luma());
  }

  /// Raw pixel values, row-major.
  pub fn as_raw(&self) -> &[u8] {
    self.buffer.as_raw()
  }

  pub fn count(&self, level: Level) -> u64 {
    let value = level.luma().0[0];
    self.as_raw().iter()
      .filter(|&&pixel| pixel == value)
      .count() as u64
  }

  pub fn inverted(&self) -> Self {
    let (width, height) = self.dimensions();
    Self::from_fn(width, height, |x, y| self.get(x, y).inverted())
  }
}

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

/// A shape painted with a single level.
#[derive(Debug, Copy, Clone)]
pub struct Fill<S> {
  pub shape: S,
  pub level: Level
}
impl <S> SDF for Fill<S> where S: SDF {
  fn sdf(&self, pixel: P2) -> f64 { self.shape.sdf(pixel) } }
impl <S> BoundingBox for Fill<S> where S: BoundingBox {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> { self.shape.bounding_box() } }

impl <S> Draw<BinaryImage> for Fill<S> where S: Shape {
  /// Paints every pixel whose center is inside the shape (`sdf <= 0`).
  fn draw(&self, image: &mut BinaryImage) {
    let (xs, ys) = match pixel_span(self.bounding_box(), image.dimensions()) {
      Some(x) => x,
      None => return // bounding box has no intersection with canvas at all
    };
    itertools::iproduct!(ys, xs)
      .filter(|&(y, x)| self.sdf(P2::new(x as f64, y as f64)) <= 0.0)
      .for_each(|(y, x)| image.set(x, y, self.level));
  }
}

// pixel centers covered by the bounding box, clipped to the canvas
fn pixel_span(
  bounding_box: Box2D<f64, PixelSpace>,
  (width, height): (u32, u32)
) -> Option<(Range<u32>, Range<u32>)> {
  let clip = |min: f64, max: f64, len: u32| {
    let start = min.ceil().max(0.0);
    let end = (max.floor() + 1.0).min(len as f64);
    (start < end).then(|| start as u32 .. end as u32)
  };
  Some((
    clip(bounding_box.min.x, bounding_box.max.x, width)?,
    clip(bounding_box.min.y, bounding_box.max.y, height)?
  ))
}

/// Connect consecutive points with segments of the given stroke width.
pub fn stroke_polyline(image: &mut BinaryImage, points: &[P2], width: f64, level: Level) {
  points.windows(2)
    .map(|segment| Capsule { a: segment[0], b: segment[1], width })
    .for_each(|capsule| capsule.fill(level).draw(image));
}

/// Scanline flood fill, 4-connected. Replaces the region of same-level pixels around `seed`.
///
/// Returns the number of pixels changed; zero when the seed is off-canvas or already `level`.
pub fn flood_fill(image: &mut BinaryImage, seed: (u32, u32), level: Level) -> u64 {
  let (width, height) = image.dimensions();
  if seed.0 >= width || seed.1 >= height {
    return 0;
  }
  let target = image.get(seed.0, seed.1);
  if target == level {
    return 0;
  }

  let mut filled = 0;
  let mut stack = vec![seed];
  while let Some((x, y)) = stack.pop() {
    if image.get(x, y) != target {
      continue;
    }
    let mut left = x;
    while left > 0 && image.get(left - 1, y) == target {
      left -= 1;
    }
    let mut right = x;
    while right + 1 < width && image.get(right + 1, y) == target {
      right += 1;
    }
    (left..=right).for_each(|x| image.set(x, y, level));
    filled += (right - left + 1) as u64;

    // one seed per run of fillable pixels on the neighbouring rows
    let rows = [y.checked_sub(1), (y + 1 < height).then(|| y + 1)];
    for row in rows.into_iter().flatten() {
      let mut in_run = false;
      for x in left..=right {
        let fillable = image.get(x, row) == target;
        if fillable && !in_run {
          stack.push((x, row));
        }
        in_run = fillable;
      }
    }
  }
  filled
}
