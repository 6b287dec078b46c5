use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indexmap::IndexMap;
use tagform::{ContentType, Deserializer, Registry, Serializer};

fn sample_table(rows: usize) -> IndexMap<u32, Vec<String>> {
    let mut map = IndexMap::new();
    for i in 0..rows {
        map.insert(
            i as u32,
            vec![
                format!("name-{i}"),
                format!("value [{i}]"),
                "flag".to_string(),
            ],
        );
    }
    map
}

fn bench_write(c: &mut Criterion) {
    let registry = Registry::with_builtins();
    let serializer = Serializer::new(&registry);
    let value = sample_table(100).to_value();

    c.bench_function("write_dictionary_100_rows", |b| {
        b.iter(|| serializer.to_string("table", black_box(&value)).unwrap())
    });
}

fn bench_read(c: &mut Criterion) {
    let registry = Registry::with_builtins();
    let serializer = Serializer::new(&registry);
    let deserializer = Deserializer::new(&registry);
    let text = serializer
        .to_string("table", &sample_table(100).to_value())
        .unwrap();

    c.bench_function("read_dictionary_100_rows", |b| {
        b.iter(|| deserializer.from_str(black_box(&text)).unwrap())
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let registry = Registry::with_builtins();
    let serializer = Serializer::new(&registry);
    let deserializer = Deserializer::new(&registry);
    let value = sample_table(10).to_value();

    c.bench_function("round_trip_10_rows", |b| {
        b.iter(|| {
            let text = serializer.to_string("table", black_box(&value)).unwrap();
            deserializer.from_str(&text).unwrap()
        })
    });
}

criterion_group!(benches, bench_write, bench_read, bench_round_trip);
criterion_main!(benches);
