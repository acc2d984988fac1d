use std::hint::black_box;
use std::str::FromStr;

use bigdec::Decimal;
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_addition(c: &mut Criterion) {
    c.bench_function("decimal_addition", |b| {
        let x = Decimal::from_str("123.456789").unwrap();
        let y = Decimal::from_str("987.654321").unwrap();
        b.iter(|| black_box(black_box(x.clone()) + black_box(y.clone())));
    });
}

fn bench_subtraction(c: &mut Criterion) {
    c.bench_function("decimal_subtraction", |b| {
        let x = Decimal::from_str("987.654321").unwrap();
        let y = Decimal::from_str("123.456789").unwrap();
        b.iter(|| black_box(black_box(x.clone()) - black_box(y.clone())));
    });
}

fn bench_multiplication(c: &mut Criterion) {
    c.bench_function("decimal_multiplication", |b| {
        let x = Decimal::from_str("123.456789").unwrap();
        let y = Decimal::from_str("9.876543").unwrap();
        b.iter(|| black_box(black_box(x.clone()) * black_box(y.clone())));
    });
}

fn bench_division(c: &mut Criterion) {
    c.bench_function("decimal_division", |b| {
        let x = Decimal::from_str("123.456789").unwrap();
        let y = Decimal::from_str("9.876543").unwrap();
        b.iter(|| black_box(black_box(x.clone()) / black_box(y.clone())));
    });
}

fn bench_modulo(c: &mut Criterion) {
    c.bench_function("decimal_modulo", |b| {
        let x = Decimal::from_str("123456.789").unwrap();
        let y = Decimal::from_str("9.876543").unwrap();
        b.iter(|| black_box(black_box(x.clone()) % black_box(y.clone())));
    });
}

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("decimal_parsing", |b| {
        b.iter(|| black_box(Decimal::from_str("123.456789").unwrap()));
    });
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("decimal_formatting", |b| {
        let d = Decimal::from_str("123.456789").unwrap();
        b.iter(|| black_box(format!("{}", d)));
    });
}

fn bench_comparison(c: &mut Criterion) {
    c.bench_function("decimal_comparison", |b| {
        let x = Decimal::from_str("123.456789").unwrap();
        let y = Decimal::from_str("123.456790").unwrap();
        b.iter(|| black_box(black_box(&x) < black_box(&y)));
    });
}

fn bench_sum(c: &mut Criterion) {
    c.bench_function("decimal_sum_1000_values", |b| {
        let values: Vec<Decimal> = (0..1000)
            .map(|i| Decimal::from_str(&format!("{}.{:02}", i, i % 100)).unwrap())
            .collect();
        b.iter(|| black_box(values.iter().sum::<Decimal>()));
    });
}

fn bench_wide_multiplication(c: &mut Criterion) {
    c.bench_function("decimal_50_digit_multiplication", |b| {
        let x = Decimal::from_str("12345678901234567890123456789012345678901234567891").unwrap();
        let y = Decimal::from_str("98765432109876543210987654321098765432109876543211").unwrap();
        b.iter(|| black_box(black_box(x.clone()) * black_box(y.clone())));
    });
}

fn bench_to_i64(c: &mut Criterion) {
    c.bench_function("decimal_to_i64", |b| {
        let d = Decimal::from_str("1234567890.5").unwrap();
        b.iter(|| black_box(black_box(&d).to_i64().unwrap()));
    });
}

criterion_group!(
    benches,
    bench_addition,
    bench_subtraction,
    bench_multiplication,
    bench_division,
    bench_modulo,
    bench_parsing,
    bench_formatting,
    bench_comparison,
    bench_sum,
    bench_wide_multiplication,
    bench_to_i64,
);

criterion_main!(benches);
