use aeon_json::Parser;
use criterion::{criterion_group, criterion_main, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use std::fs;

macro_rules! build_parse_benchmark {
    ($func : tt, $path : expr) => {
        fn $func(c: &mut Criterion) {
            let bytes = fs::read($path).unwrap();
            let parser = Parser::default();
            c.bench_function(concat!("parse of ", stringify!($func)), |b| {
                b.iter(|| parser.parse_bytes(&bytes))
            });
        }
    };
}

build_parse_benchmark!(catalog, "fixtures/json/bench/catalog.json");
build_parse_benchmark!(coordinates, "fixtures/json/bench/coordinates.json");
build_parse_benchmark!(blog_entries, "fixtures/json/valid/blog_entries.json");
build_parse_benchmark!(simple_structure, "fixtures/json/valid/simple_structure.json");

criterion_group! {
    name = parse_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = catalog, coordinates, blog_entries, simple_structure
}
criterion_main!(parse_benches);
