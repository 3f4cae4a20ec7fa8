use criterion::{black_box, criterion_group, criterion_main, Criterion};
use symbits::{CharTable, Packer, Unpacker};

const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let table = CharTable::new(BASE64);

    for width in [1usize, 8, 16, 32] {
        let mut packer = Packer::new(6, table.clone()).unwrap();
        group.bench_function(format!("push_{width}_bits"), |b| {
            b.iter(|| {
                packer.push(black_box(1), width).unwrap();
                black_box(packer.flush());
            })
        });

        let mut unpacker = Unpacker::new(6, table.clone()).unwrap();
        unpacker
            .load("abcdefghijklmnopqrstuvwxyz".chars())
            .unwrap();
        group.bench_function(format!("pop_{width}_bits"), |b| {
            b.iter(|| {
                black_box(unpacker.pop(width).unwrap());
                unpacker.offset(0);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
