//! Accessor micro-benchmarks
//!
//! Measures path compilation and accessor evaluation, with and without null guards.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pathlinq::{Shape, StructShape, compile, sort_by_accessor};
use pathlinq::{CompileOptions, PathCompiler};
use serde_json::{Value, json};
use std::hint::black_box;

const PATHS: [(&str, &str); 4] = [
    ("member", ".subClass.Type"),
    ("map_key", ".dictionary.crossplane\\.io/external-name"),
    ("filter", ".subClassList[?(@.Type==\"3\")].Status"),
    ("nested_filter", ".subClassList[?(@.Nested.Name=='Nested3')].Status"),
];

fn root_shape() -> Shape {
    let nested: Shape = StructShape::new("TestObject3")
        .with_member("Name", Shape::optional(Shape::Text))
        .into();
    let element: Shape = StructShape::new("TestObject2")
        .with_member("Type", Shape::optional(Shape::Text))
        .with_member("Status", Shape::optional(Shape::Text))
        .with_member("Nested", Shape::optional(nested))
        .into();
    StructShape::new("TestObject")
        .with_member("subClass", Shape::optional(element.clone()))
        .with_member("subClassList", Shape::list_of(element))
        .with_member("dictionary", Shape::map_of(Shape::Text))
        .into()
}

fn root_value(list_len: usize) -> Value {
    let items: Vec<Value> = (0..list_len)
        .map(|i| {
            json!({
                "Type": (i + 1).to_string(),
                "Status": "Ready",
                "Nested": { "Name": format!("Nested{}", i + 1) }
            })
        })
        .collect();
    json!({
        "subClass": { "Type": "Type1", "Status": "Status1", "Nested": null },
        "subClassList": items,
        "dictionary": { "key": "value", "crossplane.io/external-name": "value1" }
    })
}

fn benchmark_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    let shape = root_shape();

    for null_safety in [false, true] {
        let compiler = PathCompiler::new(CompileOptions::default().with_null_safety(null_safety));
        for (name, path) in PATHS {
            let id = format!("{}/null_safe={}", name, null_safety);
            group.bench_function(id, |b| {
                b.iter(|| compiler.compile_for_shape(black_box(&shape), black_box(path)))
            });
        }
    }

    group.finish();
}

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let shape = root_shape();
    let data = root_value(3);

    for null_safety in [false, true] {
        let compiler = PathCompiler::new(CompileOptions::default().with_null_safety(null_safety));
        for (name, path) in PATHS {
            let Ok(accessor) = compiler.compile_for_shape(&shape, path) else {
                continue;
            };
            let id = format!("{}/null_safe={}", name, null_safety);
            group.bench_function(id, |b| b.iter(|| accessor.evaluate_value(black_box(&data))));
        }
    }

    group.finish();
}

fn benchmark_filter_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_scan");
    let compiler = PathCompiler::default();
    let shape = root_shape();

    for list_len in [10, 100, 1000] {
        let data = root_value(list_len);
        let path = format!(".subClassList[?(@.Type=='{}')].Status", list_len);
        let Ok(accessor) = compiler.compile_for_shape(&shape, &path) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("items", list_len), &data, |b, data| {
            b.iter(|| accessor.evaluate_value(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_accessor");
    let Ok(accessor) = compile::<Value>(".Nested.Name", true) else {
        return;
    };

    for row_count in [100, 1000] {
        let rows: Vec<Value> = (0..row_count)
            .rev()
            .map(|i| json!({ "Nested": if i % 10 == 0 { Value::Null } else { json!({ "Name": format!("n{:05}", i) }) } }))
            .collect();
        group.bench_with_input(BenchmarkId::new("rows", row_count), &rows, |b, rows| {
            b.iter(|| {
                let mut rows = rows.clone();
                sort_by_accessor(&mut rows, &accessor)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_compile,
    benchmark_evaluate,
    benchmark_filter_scan,
    benchmark_sort
);
criterion_main!(benches);
