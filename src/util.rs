use {
  crate::error::Result,
  std::path::Path
};

/// Evaluate an expression, print how long it took, and return its value.
/// ```
/// let sum = blotch::profile!("sum", (0..10u32).sum::<u32>());
/// assert_eq!(sum, 45);
/// ```
#[macro_export]
macro_rules! profile(
  ($title: expr, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    println!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Human readable size of a file on disk.
pub fn file_size(path: impl AsRef<Path>) -> Result<String> {
  let bytes = std::fs::metadata(path)?.len();
  Ok(human_size(bytes))
}

pub fn human_size(bytes: u64) -> String {
  use humansize::{FileSize, file_size_opts as options};

  bytes.file_size(options::BINARY)
    .unwrap_or_else(|_| format!("{} B", bytes))
}
