use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skilib::app;
use skilib::church::{and, not, or, truth_table, FALSE, TRUE};
use skilib::combinators::{K, S};
use skilib::interpreter::Interpreter;
use skilib::values::Val;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("skk x", |b| {
        b.iter(|| app!(&S, &K, &K, black_box(Val::I32(3))))
    });
    let mut interp = Interpreter::default();
    c.bench_function("not true", |b| {
        b.iter(|| not(&mut interp, black_box(&TRUE)))
    });
    c.bench_function("de morgan", |b| {
        b.iter(|| {
            let true_or_false = or(&mut interp, black_box(&TRUE), black_box(&FALSE))?;
            let lhs = not(&mut interp, &true_or_false)?;
            let (not_true, not_lhs) = (not(&mut interp, &TRUE)?, not(&mut interp, &lhs)?);
            and(&mut interp, &not_true, &not_lhs)
        })
    });
    c.bench_function("truth table", |b| {
        b.iter(|| truth_table(&mut interp, and))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
