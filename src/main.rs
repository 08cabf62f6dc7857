//! Batch driver: generate subject/marker pairs, then report a verdict for each.

use {
  blotch::{profile, util, Config, Error, WorkerPool},
  anyhow::{Context, Result, bail},
  clap::{Parser, ValueEnum},
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::path::{Path, PathBuf}
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
  Sequential,
  Parallel,
  Both
}

/// Generate synthetic subject/marker image pairs and flag subjects more than 10% covered.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
  /// Number of test cases
  #[arg(long, default_value_t = 5)]
  cases: usize,

  /// Side of the square canvas, in pixels
  #[arg(long, default_value_t = 10000)]
  resolution: u32,

  /// Seed of the random source; drawn from the OS when omitted
  #[arg(long)]
  seed: Option<u64>,

  /// Where `subject-N.png` and `marker-N.png` are written
  #[arg(long, default_value = ".")]
  out_dir: PathBuf,

  /// Analysis workers; one per hardware thread when omitted
  #[arg(long)]
  workers: Option<usize>,

  #[arg(long, value_enum, default_value_t = Mode::Both)]
  mode: Mode
}

struct Case {
  subject: PathBuf,
  marker: PathBuf
}

// profiles whose outline misses its own center are drawn again
const MAX_ATTEMPTS: usize = 16;

fn generate_case(index: usize, out_dir: &Path, config: &Config, rng: &mut Pcg64) -> Result<Case> {
  let resolution = config.resolution;
  // subject takes up at least a quarter of the canvas
  let radius_scale = rng.gen_range(resolution / 4..=resolution / 2);
  let offset = rng.gen_range(0..=radius_scale / 2);
  let case = Case {
    subject: out_dir.join(format!("subject-{}.png", index)),
    marker: out_dir.join(format!("marker-{}.png", index))
  };

  let mut attempt = 0;
  loop {
    attempt += 1;
    match profile!(format!("subject {}", index),
      blotch::generate_subject(&case.subject, radius_scale, offset, config, rng)) {
      Ok(()) => break,
      Err(Error::UnenclosedSeed { .. }) if attempt < MAX_ATTEMPTS => {
        println!("subject {}: outline does not enclose its center, resampling", index);
      }
      Err(err) => {
        return Err(err).with_context(|| format!("generating {}", case.subject.display()));
      }
    }
  }
  profile!(format!("marker {}", index),
    blotch::generate_marker(&case.marker, radius_scale, offset, config, rng))
    .with_context(|| format!("generating {}", case.marker.display()))?;

  println!(
    "case {}: radius {}, offset {}, subject {}, marker {}",
    index, radius_scale, offset,
    util::file_size(&case.subject)?, util::file_size(&case.marker)?
  );
  Ok(case)
}

fn analyze_case(index: usize, case: &Case, mode: Mode, pool: &WorkerPool) -> Result<bool> {
  let context = || format!("analyzing {} / {}", case.subject.display(), case.marker.display());
  let mut verdicts = vec![];
  if mode != Mode::Parallel {
    verdicts.push(
      profile!("single thread", blotch::analyze(&case.subject, &case.marker)).with_context(context)?
    );
  }
  if mode != Mode::Sequential {
    verdicts.push(
      profile!(format!("{} workers", pool.workers()),
        blotch::analyze_parallel(&case.subject, &case.marker, pool)).with_context(context)?
    );
  }
  match verdicts[..] {
    [sequential, parallel] if sequential != parallel =>
      bail!("subject {}: sequential and parallel verdicts differ", index),
    [verdict, ..] => Ok(verdict),
    [] => bail!("no analysis mode selected")
  }
}

fn main() -> Result<()> {
  let args = Args::parse();
  let config = Config::default().with_resolution(args.resolution);
  config.validate()?;

  let mut rng = match args.seed {
    Some(seed) => Pcg64::seed_from_u64(seed),
    None => Pcg64::from_entropy()
  };
  let pool = match args.workers {
    Some(workers) => WorkerPool::new(workers)?,
    None => WorkerPool::with_available_parallelism()?
  };
  std::fs::create_dir_all(&args.out_dir)
    .with_context(|| format!("creating {}", args.out_dir.display()))?;

  let cases = (0..args.cases)
    .map(|index| generate_case(index, &args.out_dir, &config, &mut rng))
    .collect::<Result<Vec<_>>>()?;

  for (index, case) in cases.iter().enumerate() {
    if analyze_case(index, case, args.mode, &pool)? {
      println!("subject {} is positive", index);
    } else {
      println!("subject {} is negative", index);
    }
  }
  Ok(())
}
