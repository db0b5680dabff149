// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use mintri::{
    InvalidMetricPolicy, PointSet, PointSource, SearchConfig, SizeMetric, UniformIntegerSource,
    ValidityPolicy, compare,
};

#[derive(Parser)]
#[command(name = "mintri")]
#[command(about = "Generate random points and find the smallest triangle among them")]
struct Args {
    /// Number of points to generate
    points: usize,

    /// Seed for the point generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Size metric: perimeter, area or heron
    #[arg(long, default_value = "perimeter")]
    metric: SizeMetric,

    /// Degeneracy test: collinear or perpendicular
    #[arg(long, default_value = "collinear")]
    policy: ValidityPolicy,

    /// Lower coordinate bound (inclusive)
    #[arg(long, default_value_t = -100, allow_negative_numbers = true)]
    min: i32,

    /// Upper coordinate bound (exclusive)
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    max: i32,

    /// Abort instead of skipping when a metric yields NaN or a negative size
    #[arg(long)]
    strict: bool,

    /// Use rayon workers (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Print the generated points
    #[arg(long)]
    show_points: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn generate(args: &Args) -> Result<PointSet<f64>, mintri::GenerationError> {
    let source = match args.seed {
        Some(seed) => UniformIntegerSource::seeded(seed),
        None => UniformIntegerSource::from_os_rng(),
    };
    let mut source = source.with_range(args.min, args.max)?;
    Ok(source.generate(args.points))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let points = match generate(&args) {
        Ok(points) => points,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(n = points.len(), "generated points");

    if args.show_points {
        for (i, p) in points.iter().enumerate() {
            println!("{i:>5}: {p}");
        }
    }

    let on_invalid_metric = if args.strict {
        InvalidMetricPolicy::Fail
    } else {
        InvalidMetricPolicy::Skip
    };
    let config = SearchConfig::new(args.metric)
        .with_policy(args.policy)
        .with_invalid_metric_policy(on_invalid_metric)
        .with_parallel(args.parallel);

    let comparison = compare(&points, &config);
    println!("{comparison}");

    if comparison.both_found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
