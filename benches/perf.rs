use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cricket_terminal::batting::batting_stats;
use cricket_terminal::bowling::bowling_stats;
use cricket_terminal::dataset::{Dataset, load_data};
use cricket_terminal::fake_data::{FakeConfig, generate, write_dataset};
use cricket_terminal::match_stats::{season_winners, venue_stats};
use cricket_terminal::team_stats::{head_to_head, team_stats};

fn sample() -> Dataset {
    generate(FakeConfig {
        seasons: 5,
        ..FakeConfig::default()
    })
}

fn bench_batting(c: &mut Criterion) {
    let data = sample();
    c.bench_function("batting_stats", |b| {
        b.iter(|| {
            let rows = batting_stats(black_box(&data.deliveries), None);
            black_box(rows.len());
        })
    });
}

fn bench_bowling(c: &mut Criterion) {
    let data = sample();
    c.bench_function("bowling_stats", |b| {
        b.iter(|| {
            let rows = bowling_stats(black_box(&data.deliveries), None);
            black_box(rows.len());
        })
    });
}

fn bench_match_tables(c: &mut Criterion) {
    let data = sample();
    c.bench_function("match_tables", |b| {
        b.iter(|| {
            let teams = team_stats(black_box(&data.matches));
            let venues = venue_stats(black_box(&data.matches));
            let winners = season_winners(black_box(&data.matches));
            let h2h = head_to_head(black_box(&data.matches), "Chennai Chargers", "Mumbai Mariners");
            black_box((teams.len(), venues.len(), winners.len(), h2h.total_matches));
        })
    });
}

fn bench_csv_load(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("tempdir");
    write_dataset(dir.path(), &sample()).expect("write sample dataset");
    c.bench_function("csv_load", |b| {
        b.iter(|| {
            let data = load_data(black_box(dir.path())).unwrap();
            black_box(data.map(|d| d.deliveries.len()));
        })
    });
}

criterion_group!(
    perf,
    bench_batting,
    bench_bowling,
    bench_match_tables,
    bench_csv_load
);
criterion_main!(perf);
