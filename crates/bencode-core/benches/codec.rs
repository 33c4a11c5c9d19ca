//! Encode/decode throughput over a torrent-shaped value tree.

use bencode_core::{decode, encode, Value};
use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::BTreeMap;
use std::hint::black_box;

fn sample_tree() -> Value {
    let mut info = BTreeMap::new();
    info.insert(b"length".to_vec(), Value::from(1_162_936_320));
    info.insert(b"name".to_vec(), Value::from("example-1.0.iso"));
    info.insert(b"piece length".to_vec(), Value::from(524_288));
    info.insert(b"pieces".to_vec(), Value::Bytes(vec![0xab; 20 * 128]));

    let mut top = BTreeMap::new();
    top.insert(
        b"announce".to_vec(),
        Value::from("http://torrent.example.com:6969/announce"),
    );
    top.insert(
        b"announce-list".to_vec(),
        Value::List(
            (0..8)
                .map(|i| Value::List(vec![Value::from(format!("http://t{i}.example/announce"))]))
                .collect(),
        ),
    );
    top.insert(b"creation date".to_vec(), Value::from(1_414_070_124));
    top.insert(b"info".to_vec(), Value::Dict(info));
    Value::Dict(top)
}

fn bench_codec(c: &mut Criterion) {
    let tree = sample_tree();
    let bytes = encode(&tree).unwrap();

    c.bench_function("encode torrent tree", |b| {
        b.iter(|| encode(black_box(&tree)).unwrap())
    });
    c.bench_function("decode torrent tree", |b| {
        b.iter(|| decode(black_box(&bytes)).unwrap())
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
