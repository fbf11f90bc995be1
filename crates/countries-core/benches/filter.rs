use countries_core::prelude::*;
use countries_core::source::default_data_path;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_filter(c: &mut Criterion) {
    let sample = FileSource::new(default_data_path())
        .fetch()
        .expect("bundled dataset");
    // Roughly the size of a full world dataset.
    let countries: Vec<Country> = sample.iter().cycle().take(250).cloned().collect();

    c.bench_function("filter/search", |b| {
        let filter = CountryFilter::new().with_search("an");
        b.iter(|| black_box(filter.apply(black_box(&countries))).len())
    });

    c.bench_function("filter/search+region", |b| {
        let filter = CountryFilter::new()
            .with_search("an")
            .with_region(Region::Europe);
        b.iter(|| black_box(filter.apply(black_box(&countries))).len())
    });

    c.bench_function("detail/neighbours", |b| {
        let france = countries.find_by_name("France").expect("France");
        b.iter(|| black_box(countries.neighbours(black_box(france))))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
