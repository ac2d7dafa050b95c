use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engagement_service::models::{ReadingHistoryEntry, Role, User};
use engagement_service::services::EngagementEvaluator;

/// Heavy reader: several chapters a day for two years.
fn heavy_reader() -> User {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let reading_history = (0..2_000)
        .map(|i| ReadingHistoryEntry {
            timestamp: now - Duration::hours(i * 8),
            manga_id: format!("manga-{}", i % 40),
            chapter_id: Some(format!("chapter-{i}")),
            manga_title: Some("Frieren".to_string()),
            chapter_number: Some((i % 120) as f64),
        })
        .collect();

    User {
        user_id: "bench".to_string(),
        username: "bench".to_string(),
        role: Role::Viewer,
        reading_history,
        bookmarks: vec!["m".to_string(); 60],
        followers: vec![],
        following: vec!["u".to_string(); 12],
        likes: vec!["l".to_string(); 300],
        comments: vec!["c".to_string(); 80],
        coins: 0,
        created_at: String::new(),
    }
}

fn benchmark_evaluate(c: &mut Criterion) {
    let user = heavy_reader();
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let evaluator = EngagementEvaluator::default();

    let mut group = c.benchmark_group("engagement");

    group.bench_function("evaluate_heavy_reader", |b| {
        b.iter(|| evaluator.evaluate(black_box(&user.activity_record()), black_box(now)))
    });

    group.bench_function("streak_only", |b| {
        b.iter(|| {
            evaluator.reading_streak(
                black_box(&user.reading_history)
                    .iter()
                    .map(|e| e.timestamp),
                now,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_evaluate);
criterion_main!(benches);
