use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use cgstd_math::{determinant, inverse, try_inverse, Invertible, Matrix};
use cgstd_sdk::logging::{init_logging, LoggingConfig};
use cgstd_sdk::time::FramerateCounter;

const USAGE: &str = "usage: cgstd-probe [--strict] [--spin SECONDS] a11 a12 ... aNN  (N = 1..4)";

#[derive(Debug, Clone, PartialEq)]
struct Args {
    strict: bool,
    spin: Option<Duration>,
    elements: Vec<f64>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut strict = false;
    let mut spin = None;
    let mut elements = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strict" => strict = true,
            "--spin" => {
                let value = args.next().context("--spin needs a duration in seconds")?;
                let secs: f64 = value
                    .parse()
                    .with_context(|| format!("invalid --spin duration {value:?}"))?;
                let duration = Duration::try_from_secs_f64(secs)
                    .with_context(|| format!("--spin duration {secs} out of range"))?;
                spin = Some(duration);
            }
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            value => {
                let element: f64 = value
                    .parse()
                    .with_context(|| format!("invalid matrix element {value:?}"))?;
                elements.push(element);
            }
        }
    }

    match elements.len() {
        1 | 4 | 9 | 16 => Ok(Args { strict, spin, elements }),
        0 => bail!(USAGE),
        n => bail!("{n} elements do not form a square matrix of size 1..4\n{USAGE}"),
    }
}

fn run(args: &Args) -> Result<()> {
    match args.elements.len() {
        1 => report::<1>(args),
        4 => report::<2>(args),
        9 => report::<3>(args),
        16 => report::<4>(args),
        n => bail!("unsupported element count {n}"),
    }
}

fn report<const N: usize>(args: &Args) -> Result<()>
where
    Matrix<f64, N, N>: Invertible<Elem = f64>,
{
    let a = Matrix::<f64, N, N>::from_rows(core::array::from_fn(|r| {
        core::array::from_fn(|c| args.elements[r * N + c])
    }));
    log::debug!("input:\n{a}");

    let inv = if args.strict {
        try_inverse(a).context("matrix cannot be inverted")?
    } else {
        if let Err(err) = try_inverse(a) {
            log::warn!("{err}; printing the unguarded result anyway");
        }
        inverse(a)
    };
    let residual = (a * inv).max_abs_diff(&Matrix::identity());

    println!("inverse:\n{inv:.6}");
    println!("determinant: {}", determinant(a));
    println!("residual:    {residual:e}");

    if let Some(duration) = args.spin {
        spin(a, duration);
    }
    Ok(())
}

fn spin<M: Invertible>(a: M, duration: Duration) {
    let mut counter = FramerateCounter::new();
    let start = Instant::now();
    while start.elapsed() < duration {
        let _ = std::hint::black_box(inverse(std::hint::black_box(a)));
        if let Some(rate) = counter.tick() {
            log::info!("{rate:.0} inversions/s");
        }
    }
    log::info!("{} inversions in {:.2?}", counter.total_frames(), start.elapsed());
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = parse_args(std::env::args().skip(1))?;
    run(&args)
}
