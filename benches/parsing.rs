//! Benchmarking RINEX V2 Observation decoding
extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rinex2_obs::prelude::{ParsingOptions, Rinex};

fn rinex_parsing(path: &str, opts: &ParsingOptions) {
    let _ = Rinex::from_file_with_options(path, opts).unwrap();
}

fn benchmark(c: &mut Criterion) {
    let mut parsing_grp = c.benchmark_group("parsing");

    // Mixed GPS + Glonass (V2.11)
    let opts = ParsingOptions::default();
    parsing_grp.bench_function("OBS/V2/zeck0010.11o", |b| {
        b.iter(|| {
            rinex_parsing(black_box("test_resources/OBS/V2/zeck0010.11o"), &opts);
        })
    });

    // one fold per epoch
    let opts = ParsingOptions::default().with_window_size(1);
    parsing_grp.bench_function("OBS/V2/zeck0010.11o/window=1", |b| {
        b.iter(|| {
            rinex_parsing(black_box("test_resources/OBS/V2/zeck0010.11o"), &opts);
        })
    });

    // GPS only (V2.10)
    let opts = ParsingOptions::default();
    parsing_grp.bench_function("OBS/V2/delf0010.95o", |b| {
        b.iter(|| {
            rinex_parsing(black_box("test_resources/OBS/V2/delf0010.95o"), &opts);
        })
    });

    parsing_grp.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
