//! Analysis performance benchmarks.
//!
//! Measures end-to-end loading plus the individual analyses over
//! synthetic earnings data of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Write;
use tempfile::NamedTempFile;

use freelancer_analyzer::{DataAnalyzer, DataLoader};

/// Generate a synthetic earnings CSV.
fn generate_earnings_data(rows: usize) -> String {
    let mut data = String::new();
    data.push_str(
        "Freelancer_ID,Job_Category,Platform,Experience_Level,Client_Region,\
         Payment_Method,Job_Completed,Earnings_USD,Hourly_Rate,Job_Success_Rate,Client_Rating\n",
    );

    let categories = ["Web Development", "Design", "Writing", "Data Science"];
    let platforms = ["Upwork", "Fiverr", "Freelancer", "Toptal"];
    let levels = ["Beginner", "Intermediate", "Expert"];
    let regions = ["USA", "UK", "Europe", "Asia", "Australia"];
    let payments = ["Crypto", "PayPal", "Bank Transfer", "Mobile Banking"];

    for row in 0..rows {
        data.push_str(&format!(
            "{},{},{},{},{},{},{},{:.2},{:.2},{:.2},{:.2}\n",
            row + 1,
            categories[row % categories.len()],
            platforms[row % platforms.len()],
            levels[row % levels.len()],
            regions[row % regions.len()],
            payments[row % payments.len()],
            (row * 7) % 400,
            200.0 + fastrand::f64() * 9000.0,
            10.0 + fastrand::f64() * 90.0,
            60.0 + fastrand::f64() * 40.0,
            3.0 + fastrand::f64() * 2.0,
        ));
    }

    data
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_earnings_data(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| {
                    let dataset = DataLoader::new(temp.path()).load().unwrap();
                    black_box(dataset.len())
                },
            );
        });
    }

    group.finish();
}

fn bench_analyses(c: &mut Criterion) {
    let data = generate_earnings_data(10_000);
    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
    temp.write_all(data.as_bytes()).unwrap();
    let dataset = DataLoader::new(temp.path()).load().unwrap();

    let mut group = c.benchmark_group("analyses");

    group.bench_function("crypto_payment", |b| {
        b.iter(|| {
            let analyzer = DataAnalyzer::new(&dataset);
            black_box(analyzer.crypto_payment())
        });
    });

    group.bench_function("regional_income", |b| {
        b.iter(|| {
            let analyzer = DataAnalyzer::new(&dataset);
            black_box(analyzer.regional_income())
        });
    });

    group.bench_function("summary", |b| {
        b.iter(|| {
            let analyzer = DataAnalyzer::new(&dataset);
            black_box(analyzer.summary())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_analyses);
criterion_main!(benches);
