use crate::{
  analysis::OverlapCounts,
  error::Result
};

/// Fixed overlap ratio above which a subject is positive.
pub const THRESHOLD: f64 = 0.1;

/// `overlap / size > 0.1`. Fails with `EmptySubject` when there is nothing to cover.
pub fn is_positive(counts: OverlapCounts) -> Result<bool> {
  Ok(counts.ratio()? > THRESHOLD)
}
