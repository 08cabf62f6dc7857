use {
  super::*,
  crate::drawing::{BinaryImage, Level},
  rand::prelude::*
};

fn noise_image(width: u32, height: u32, density: f64, rng: &mut impl Rng) -> BinaryImage {
  BinaryImage::from_fn(width, height, |_, _| {
    if rng.gen_bool(density) { Level::Light } else { Level::Dark }
  })
}

fn pack_pair(subject: &BinaryImage, marker: &BinaryImage) -> (PackedBitmap, PackedBitmap) {
  (
    PackedBitmap::pack(subject, ForegroundConvention::DarkOnLight),
    PackedBitmap::pack(marker, ForegroundConvention::LightOnDark)
  )
}

// per-pixel reference
fn naive_counts(subject: &BinaryImage, marker: &BinaryImage) -> OverlapCounts {
  let (width, height) = subject.dimensions();
  itertools::iproduct!(0..height, 0..width)
    .map(|(y, x)| (subject.get(x, y) == Level::Dark, marker.get(x, y) == Level::Light))
    .fold(OverlapCounts::default(), |counts, (a, b)| OverlapCounts {
      size: counts.size + a as u64,
      overlap: counts.overlap + (a && b) as u64
    })
}

#[test] fn packing_layout() {
  let image = BinaryImage::from_fn(10, 7, |x, y| {
    if (x, y) == (0, 0) || (x, y) == (3, 6) { Level::Light } else { Level::Dark }
  });
  let packed = PackedBitmap::pack(&image, ForegroundConvention::LightOnDark);
  assert_eq!(packed.len(), 2);
  assert_eq!(packed.pixels(), 70);
  assert_eq!(packed.dimensions(), (10, 7));
  // pixel 0 is the most significant bit, pixel 63 at (3, 6) the least significant one
  assert_eq!(packed.words()[0], 1 << 63 | 1);
  // 6 pixels in the last word, left-aligned
  assert_eq!(packed.words()[1], 0);
  assert_eq!(packed.foreground(1), 0);
}

#[test] fn padding_is_not_counted() -> Result<()> {
  // 91 pixels: 27 padding bits would turn foreground under a naive NOT
  let subject = BinaryImage::new(13, 7, Level::Light);
  let marker = BinaryImage::new(13, 7, Level::Light);
  let (subject, marker) = pack_pair(&subject, &marker);
  assert_eq!(count_sequential(&subject, &marker)?, OverlapCounts { size: 0, overlap: 0 });

  let subject = PackedBitmap::pack(&BinaryImage::new(13, 7, Level::Dark), ForegroundConvention::DarkOnLight);
  assert_eq!(count_sequential(&subject, &marker)?, OverlapCounts { size: 91, overlap: 91 });
  Ok(())
}

#[test] fn matches_per_pixel_reference() -> Result<()> {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  for (width, height) in [(1, 1), (8, 8), (13, 7), (64, 3), (100, 37)] {
    let subject = noise_image(width, height, 0.5, &mut rng);
    let marker = noise_image(width, height, 0.3, &mut rng);
    let (a, b) = pack_pair(&subject, &marker);
    assert_eq!(count_sequential(&a, &b)?, naive_counts(&subject, &marker));
  }
  Ok(())
}

#[test] fn sequential_equals_parallel() -> Result<()> {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(1);
  let pool = WorkerPool::new(4)?;
  for (width, height) in [(13, 7), (64, 64), (250, 119)] {
    let subject = noise_image(width, height, 0.6, &mut rng);
    let marker = noise_image(width, height, 0.2, &mut rng);
    let (a, b) = pack_pair(&subject, &marker);
    let sequential = count_sequential(&a, &b)?;
    for chunks in [1, 2, 3, 4, 7, 64, a.len(), a.len() + 5] {
      assert_eq!(pool.count_chunked(&a, &b, chunks)?, sequential, "{} chunks", chunks);
    }
    assert_eq!(pool.count(&a, &b)?, sequential);
  }
  Ok(())
}

#[test] fn overlap_never_exceeds_size() -> Result<()> {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(2);
  for density in [0.0, 0.1, 0.5, 0.9, 1.0] {
    let subject = noise_image(40, 40, density, &mut rng);
    let marker = noise_image(40, 40, 1.0 - density, &mut rng);
    let (a, b) = pack_pair(&subject, &marker);
    let counts = count_sequential(&a, &b)?;
    assert!(counts.overlap <= counts.size);
  }
  Ok(())
}

#[test] fn blank_marker() -> Result<()> {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(3);
  let subject = noise_image(50, 50, 0.5, &mut rng);
  let marker = BinaryImage::new(50, 50, Level::Dark);
  let (a, b) = pack_pair(&subject, &marker);
  let counts = count_sequential(&a, &b)?;
  assert_eq!(counts.size, subject.count(Level::Dark));
  assert_eq!(counts.overlap, 0);
  assert_eq!(counts.ratio()?, 0.0);
  Ok(())
}

#[test] fn marker_equal_to_foreground() -> Result<()> {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(4);
  let subject = noise_image(50, 50, 0.5, &mut rng);
  let (a, b) = pack_pair(&subject, &subject.inverted());
  let counts = count_sequential(&a, &b)?;
  assert!(counts.size > 0);
  assert_eq!(counts.overlap, counts.size);
  assert_eq!(counts.ratio()?, 1.0);
  Ok(())
}

#[test] fn dimension_mismatch() -> Result<()> {
  let pool = WorkerPool::new(2)?;
  // same pixel count, different shape
  let (a, b) = pack_pair(&BinaryImage::new(8, 4, Level::Dark), &BinaryImage::new(4, 8, Level::Light));
  assert!(matches!(
    count_sequential(&a, &b),
    Err(Error::DimensionMismatch { subject: (8, 4), marker: (4, 8) })
  ));
  assert!(matches!(pool.count(&a, &b), Err(Error::DimensionMismatch { .. })));
  assert!(matches!(pool.count_chunked(&a, &b, 3), Err(Error::DimensionMismatch { .. })));
  Ok(())
}

#[test] fn empty_subject() {
  assert!(matches!(OverlapCounts::default().ratio(), Err(Error::EmptySubject)));
}

#[test] fn sums() {
  let counts = [
    OverlapCounts { size: 3, overlap: 1 },
    OverlapCounts { size: 0, overlap: 0 },
    OverlapCounts { size: 10, overlap: 4 },
  ];
  assert_eq!(counts.iter().copied().sum::<OverlapCounts>(), OverlapCounts { size: 13, overlap: 5 });
  assert_eq!(counts[0] + counts[2], OverlapCounts { size: 13, overlap: 5 });
}

#[test] fn partitions() -> Result<()> {
  assert_eq!(partition(10, 3)?, vec![0..4, 4..7, 7..10]);
  assert_eq!(partition(2, 4)?, vec![0..1, 1..2, 2..2, 2..2]);
  assert_eq!(partition(0, 2)?, vec![0..0, 0..0]);
  for (len, chunks) in [(1, 1), (99, 7), (1000, 16)] {
    let ranges = partition(len, chunks)?;
    assert_eq!(ranges.len(), chunks);
    assert_eq!(ranges[0].start, 0);
    assert_eq!(ranges[chunks - 1].end, len);
    assert!(ranges.windows(2).all(|pair| pair[0].end == pair[1].start));
  }
  assert!(matches!(partition(10, 0), Err(Error::InvalidChunking(_))));
  Ok(())
}

#[test] fn zero_chunks() -> Result<()> {
  let pool = WorkerPool::new(1)?;
  let (a, b) = pack_pair(&BinaryImage::new(8, 8, Level::Dark), &BinaryImage::new(8, 8, Level::Dark));
  assert!(matches!(pool.count_chunked(&a, &b, 0), Err(Error::InvalidChunking(_))));
  assert!(matches!(WorkerPool::new(0), Err(Error::Config(_))));
  Ok(())
}

#[test] fn chunk_bounds_are_checked() {
  let (a, b) = pack_pair(&BinaryImage::new(16, 8, Level::Dark), &BinaryImage::new(16, 8, Level::Light));
  assert_eq!(a.len(), 2);
  let task = ChunkTask { index: 5, bounds: 1..3, subject: &a, marker: &b };
  assert!(matches!(
    task.run(),
    Err(Error::ChunkOutOfBounds { index: 5, start: 1, end: 3, len: 2 })
  ));
  let task = ChunkTask { bounds: 1..2, ..task };
  assert_eq!(task.run().ok(), Some(OverlapCounts { size: 64, overlap: 64 }));
}

#[test] fn failed_chunk_fails_the_sum() {
  let (a, b) = pack_pair(&BinaryImage::new(16, 8, Level::Dark), &BinaryImage::new(16, 8, Level::Light));
  let tasks = [
    ChunkTask { index: 0, bounds: 0..1, subject: &a, marker: &b },
    ChunkTask { index: 1, bounds: 1..4, subject: &a, marker: &b },
  ];
  let total = tasks.iter().map(|task| task.run()).sum::<Result<OverlapCounts>>();
  assert!(matches!(total, Err(Error::ChunkOutOfBounds { index: 1, .. })));
}

#[test] fn every_chunk_runs_on_the_pool() -> Result<()> {
  let (a, b) = pack_pair(&BinaryImage::new(64, 64, Level::Dark), &BinaryImage::new(64, 64, Level::Light));
  // many more chunks than threads, all results still collected
  for workers in [1, 3] {
    let pool = WorkerPool::new(workers)?;
    assert_eq!(pool.count_chunked(&a, &b, 50)?, OverlapCounts { size: 4096, overlap: 4096 });
  }
  Ok(())
}

#[test] fn available_parallelism() -> Result<()> {
  let pool = WorkerPool::with_available_parallelism()?;
  assert!(pool.workers() >= 1);
  Ok(())
}
