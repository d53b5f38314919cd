use criterion::*;
use nse_spider::embed;
use nse_spider::stock::nse;
use serde_json::Value;

// read a json file to a string
#[inline]
fn read_file_to_string(path: &str) -> String {
    std::fs::read_to_string(path)
        .map_err(|err| {
            println!("Unable to open file: {:?}", err);
            err
        })
        .unwrap()
}

// deserialize the raw allIndices response
// ----------------------------------------------------------
fn benchmark_deserialization(c: &mut Criterion) {
    let file_contents = read_file_to_string("./tests/files/all_indices.json");

    c.bench_function("deserialize all indices", |b| {
        b.iter(|| {
            let _raw: Value = serde_json::from_str(black_box(&file_contents)).unwrap();
        })
    });
}

// filter the sectoral indices
// ----------------------------------------------------------
fn benchmark_filter(c: &mut Criterion) {
    let raw: Value =
        serde_json::from_str(&read_file_to_string("./tests/files/all_indices.json")).unwrap();
    let captured_at = chrono::Local::now().naive_local();

    c.bench_function("filter sectoral indices", |b| {
        b.iter(|| {
            let _indices = nse::filter(black_box(&raw), captured_at).unwrap();
        })
    });
}

// render the embedded js
// ----------------------------------------------------------
fn benchmark_render(c: &mut Criterion) {
    let raw: Value =
        serde_json::from_str(&read_file_to_string("./tests/files/all_indices.json")).unwrap();
    let indices = serde_json::to_value(nse::filter(&raw, chrono::Local::now().naive_local()).unwrap())
        .unwrap();

    c.bench_function("render embedded js", |b| {
        b.iter(|| {
            let _js = embed::render(embed::JS_VAR_NAME, black_box(&indices)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_deserialization,
    benchmark_filter,
    benchmark_render
);
criterion_main!(benches);
