use std::sync::Arc;

use sandlot::{
    AwardService, AwardedBadge, BadgeRepository, InMemoryBadgeRepository, PerGameStats,
};

fn game(hits: u32, runs: u32, good_defense: u32) -> PerGameStats {
    PerGameStats {
        hits,
        runs,
        good_defense,
        ..PerGameStats::default()
    }
}

#[tokio::test]
async fn full_award_flow_persists_badges_once() {
    let repository = Arc::new(InMemoryBadgeRepository::new());
    let service = AwardService::standard(repository.clone());

    let history = vec![game(2, 1, 0), game(3, 0, 2)];

    let outcome = service
        .check_and_award("player-1", &history, None)
        .await
        .expect("award check should succeed");

    let awarded: Vec<&str> = outcome.newly_earned.iter().map(|b| b.id.as_str()).collect();
    assert!(awarded.contains(&"first_hit"));
    assert!(awarded.contains(&"first_run"));
    assert!(awarded.contains(&"first_defense"));
    assert_eq!(outcome.snapshot.total_hits, 5);
    assert_eq!(outcome.snapshot.games_played, 2);

    // the repository holds exactly what the outcome reported
    let persisted = repository.owned_badges("player-1").await.unwrap();
    assert_eq!(persisted.len(), outcome.newly_earned.len());

    // re-checking the same stats awards nothing further
    let second = service
        .check_and_award("player-1", &history, None)
        .await
        .expect("second award check should succeed");
    assert!(second.newly_earned.is_empty());
    assert_eq!(
        repository.owned_badges("player-1").await.unwrap().len(),
        persisted.len()
    );
}

#[tokio::test]
async fn growing_history_unlocks_ladder_badges() {
    let repository = Arc::new(InMemoryBadgeRepository::new());
    let service = AwardService::standard(repository.clone());

    let mut history = vec![game(2, 0, 0)];
    let first = service
        .check_and_award("player-2", &history, None)
        .await
        .unwrap();
    assert!(first
        .newly_earned
        .iter()
        .any(|badge| badge.id == "first_hit"));
    assert!(!first
        .newly_earned
        .iter()
        .any(|badge| badge.id == "slugger_10"));

    for _ in 0..4 {
        history.push(game(2, 0, 0));
    }
    let second = service
        .check_and_award("player-2", &history, None)
        .await
        .unwrap();
    let ids: Vec<&str> = second.newly_earned.iter().map(|b| b.id.as_str()).collect();
    assert!(ids.contains(&"slugger_10"), "10 hits reached");
    assert!(ids.contains(&"steady"), "5 games reached");
    assert!(!ids.contains(&"first_hit"), "already owned");
}

#[tokio::test]
async fn concurrent_checks_do_not_double_award() {
    let repository = Arc::new(InMemoryBadgeRepository::new());
    let service = Arc::new(AwardService::standard(repository.clone()));

    let history = vec![game(1, 1, 1)];

    let a = {
        let service = service.clone();
        let history = history.clone();
        tokio::spawn(async move { service.check_and_award("player-3", &history, None).await })
    };
    let b = {
        let service = service.clone();
        let history = history.clone();
        tokio::spawn(async move { service.check_and_award("player-3", &history, None).await })
    };

    let first = a.await.unwrap().unwrap();
    let second = b.await.unwrap().unwrap();

    // one call wins the race and awards; the other sees an updated owned set
    let total_awarded = first.newly_earned.len() + second.newly_earned.len();
    let persisted = repository.owned_badges("player-3").await.unwrap();
    assert_eq!(persisted.len(), total_awarded);

    let mut ids: Vec<String> = persisted.iter().map(|r| r.badge_id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), persisted.len(), "no duplicate badge records");
}

#[tokio::test]
async fn progress_overview_surfaces_the_closest_badge_per_track() {
    let repository = Arc::new(InMemoryBadgeRepository::new());
    let service = AwardService::standard(repository);

    let history = vec![game(3, 1, 0), game(4, 1, 0)];
    service
        .check_and_award("player-4", &history, None)
        .await
        .unwrap();

    let rows = service
        .progress_overview("player-4", &history, None)
        .await
        .unwrap();

    assert!(!rows.is_empty());
    assert!(rows
        .windows(2)
        .all(|w| w[0].progress.percent >= w[1].progress.percent));

    // hits track: 7 hits, first_hit owned, so slugger_10 leads at 70%
    let hits = rows.iter().find(|row| row.badge.id == "slugger_10").unwrap();
    assert_eq!(hits.progress.percent, 70);
}

#[tokio::test]
async fn awarded_badge_documents_round_trip_through_json() {
    let repository = Arc::new(InMemoryBadgeRepository::new());
    let service = AwardService::standard(repository.clone());

    service
        .check_and_award("player-5", &[game(1, 0, 0)], None)
        .await
        .unwrap();

    let persisted = repository.owned_badges("player-5").await.unwrap();
    let json = serde_json::to_string(&persisted).unwrap();
    let decoded: Vec<AwardedBadge> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, persisted);
}
