// crates/tripmap-core/benches/benchmarks.rs

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tripmap_core::alias::{AliasTable, BUILTIN_ALIASES};
use tripmap_core::boundary::BoundaryFeature;
use tripmap_core::cache::QueryKey;
use tripmap_core::map::MapView;
use tripmap_core::model::{Country, VisitStatus};
use tripmap_core::resolve::Registry;
use tripmap_core::style::style_for;

fn fixture_countries() -> Vec<Country> {
    let mut seen = std::collections::HashSet::new();
    BUILTIN_ALIASES
        .iter()
        .filter(|(_, code)| seen.insert(*code))
        .enumerate()
        .map(|(i, (alias, code))| Country {
            id: i as u32 + 1,
            code: (*code).to_string(),
            name: (*alias).to_string(),
            status: match i % 3 {
                0 => VisitStatus::Visited,
                1 => VisitStatus::Upcoming,
                _ => VisitStatus::Unvisited,
            },
            visited_date: if i % 3 == 0 {
                Some("2024-01-01".to_string())
            } else {
                None
            },
        })
        .collect()
}

fn bench_resolution(c: &mut Criterion) {
    let countries = fixture_countries();
    let registry = Registry::with_builtin_aliases(&countries);

    c.bench_function("resolve_alias_hit", |b| {
        b.iter(|| registry.resolve(black_box("United States of America")))
    });

    c.bench_function("find_by_code", |b| {
        b.iter(|| registry.find_by_code(black_box("fr")))
    });

    c.bench_function("resolve_miss", |b| {
        b.iter(|| registry.resolve(black_box("Atlantis")))
    });
}

fn bench_styling(c: &mut Criterion) {
    let countries = fixture_countries();

    c.bench_function("style_for_single", |b| {
        b.iter(|| style_for(black_box(Some(&countries[0])), black_box(Some(1))))
    });

    let mut view = MapView::new();
    let ticket = view.begin_boundary_load();
    let features: Vec<BoundaryFeature> = BUILTIN_ALIASES
        .iter()
        .map(|(alias, _)| BoundaryFeature::new(*alias))
        .collect();
    view.complete_boundary_load(ticket, Ok(features));
    let ticket = view.begin_load(QueryKey::Countries);
    view.complete_countries(ticket, Ok(countries));

    c.bench_function("full_style_pass", |b| b.iter(|| view.style_pass()));
}

fn bench_alias_table(c: &mut Criterion) {
    c.bench_function("alias_table_build", |b| {
        b.iter(|| AliasTable::new(black_box(BUILTIN_ALIASES)))
    });
}

criterion_group!(benches, bench_resolution, bench_styling, bench_alias_table);
criterion_main!(benches);
