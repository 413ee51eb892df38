use criterion::criterion_main;

mod add;

criterion_main!(add::benches, iter::benches);
