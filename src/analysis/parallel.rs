use {
  super::{check_dimensions, count_words, OverlapCounts, PackedBitmap},
  crate::error::{Error, Result},
  std::{num::NonZeroUsize, ops::Range}
};

/// Fixed-size pool of analysis workers.
pub struct WorkerPool {
  pool: rayon::ThreadPool
}

impl WorkerPool {
  pub fn new(workers: usize) -> Result<Self> {
    if workers == 0 {
      return Err(Error::Config("worker pool needs at least one worker".into()));
    }
    let pool = rayon::ThreadPoolBuilder::new()
      .num_threads(workers)
      .thread_name(|i| format!("blotch-worker-{}", i))
      .build()?;
    Ok(Self { pool })
  }

  /// One worker per available hardware thread.
  pub fn with_available_parallelism() -> Result<Self> {
    let workers = std::thread::available_parallelism()
      .map(NonZeroUsize::get)
      .unwrap_or(1);
    Self::new(workers)
  }

  pub fn workers(&self) -> usize {
    self.pool.current_num_threads()
  }

  /// One chunk per worker.
  pub fn count(&self, subject: &PackedBitmap, marker: &PackedBitmap) -> Result<OverlapCounts> {
    self.count_chunked(subject, marker, self.workers())
  }

  /// Split the words into `chunks` contiguous ranges, count each on the pool, and sum.
  ///
  /// Blocks until every chunk is done. The first failed chunk fails the whole count.
  pub fn count_chunked(
    &self,
    subject: &PackedBitmap,
    marker: &PackedBitmap,
    chunks: usize
  ) -> Result<OverlapCounts> {
    check_dimensions(subject, marker)?;
    let tasks = partition(subject.len(), chunks)?
      .into_iter()
      .enumerate()
      .map(|(index, bounds)| ChunkTask { index, bounds, subject, marker })
      .collect::<Vec<_>>();
    let mut results = tasks.iter()
      .map(|_| Ok(OverlapCounts::default()))
      .collect::<Vec<Result<OverlapCounts>>>();

    // `scope` returns only once every spawned task has stored its result
    self.pool.scope(|scope| {
      tasks.iter()
        .zip(results.iter_mut())
        .for_each(|(task, result)| scope.spawn(move |_| *result = task.run()));
    });

    results.into_iter().sum()
  }
}

/// A contiguous range of word positions, and read-only views of both bitmaps.
#[derive(Debug, Clone)]
pub struct ChunkTask<'a> {
  pub index: usize,
  pub bounds: Range<usize>,
  pub subject: &'a PackedBitmap,
  pub marker: &'a PackedBitmap
}

impl ChunkTask<'_> {
  pub fn run(&self) -> Result<OverlapCounts> {
    let len = self.subject.len().min(self.marker.len());
    if self.bounds.start > self.bounds.end || self.bounds.end > len {
      return Err(Error::ChunkOutOfBounds {
        index: self.index,
        start: self.bounds.start,
        end: self.bounds.end,
        len
      });
    }
    Ok(count_words(self.subject, self.marker, self.bounds.clone()))
  }
}

/// `chunks` contiguous, disjoint ranges covering `0..len`, sizes differing by at most one.
/// Trailing ranges are empty when there are more chunks than words.
pub fn partition(len: usize, chunks: usize) -> Result<Vec<Range<usize>>> {
  if chunks == 0 {
    return Err(Error::InvalidChunking("chunk count must be at least 1".into()));
  }
  let (base, extra) = (len / chunks, len % chunks);
  Ok((0..chunks)
    .scan(0, |start, i| {
      let end = *start + base + (i < extra) as usize;
      let range = *start..end;
      *start = end;
      Some(range)
    })
    .collect())
}
