//! End-to-end pipeline tests against the bundled and substitute fixtures

use cricket_dash::{
    pipeline::{run, RunOptions, ScrapeBackup},
    scrape::{
        fixture::{self, FixtureRow, FixtureSet},
        Source,
    },
    CricketDatabase, RecordKind,
};

fn bundled_source() -> Source {
    Source::Fixture(fixture::BUNDLED)
}

#[tokio::test]
async fn test_fixture_run_fills_all_tables() {
    let mut db = CricketDatabase::new_in_memory().unwrap();

    let summary = run(&mut db, &bundled_source(), &RunOptions::default())
        .await
        .unwrap();

    assert!(summary.succeeded());
    for kind in RecordKind::ALL {
        assert_eq!(db.row_count(kind).unwrap(), 20);
        let report = summary.report(kind).unwrap();
        assert_eq!(report.extracted, 20);
        assert_eq!(report.normalized, 20);
        assert_eq!(report.rejected, 0);
        assert_eq!(report.loaded, 20);
    }
}

#[tokio::test]
async fn test_matches_ordered_with_expected_content() {
    let mut db = CricketDatabase::new_in_memory().unwrap();
    run(&mut db, &bundled_source(), &RunOptions::default())
        .await
        .unwrap();

    let matches = db.all_matches().unwrap();
    assert_eq!(matches.len(), 20);
    assert!(matches.windows(2).all(|w| w[0].match_no < w[1].match_no));

    assert_eq!(matches[0].match_no.as_u32(), 1);
    assert_eq!(matches[0].team1, "Melbourne Stars");
    assert_eq!(matches[0].winner, "Perth Scorchers");
    assert_eq!(matches[19].match_no.as_u32(), 20);
    assert_eq!(matches[19].player_of_match, "Josh Brown");
}

#[tokio::test]
async fn test_batting_matches_bundled_table() {
    let mut db = CricketDatabase::new_in_memory().unwrap();
    run(&mut db, &bundled_source(), &RunOptions::default())
        .await
        .unwrap();

    let batting = db.batting_by_rank().unwrap();
    assert_eq!(batting.len(), 20);

    let leader = &batting[0];
    assert_eq!(leader.rank.as_u32(), 1);
    assert_eq!(leader.player_name, "Mitchell Owen");
    assert_eq!(leader.runs, 452);
    assert_eq!(leader.strike_rate, 203.60);
    assert_eq!(leader.high_score, "108");

    // Not-out marker survives the round trip untouched
    assert_eq!(batting[2].player_name, "Glenn Maxwell");
    assert_eq!(batting[2].high_score, "90*");

    let bowling = db.bowling_by_rank().unwrap();
    assert_eq!(bowling.len(), 20);
    assert_eq!(bowling[1].player_name, "Tom Rogers");
    assert_eq!(bowling[1].best_figures, "4/23");
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let mut db = CricketDatabase::new_in_memory().unwrap();

    run(&mut db, &bundled_source(), &RunOptions::default())
        .await
        .unwrap();
    let first_matches = db.all_matches().unwrap();
    let first_batting = db.batting_by_rank().unwrap();

    run(&mut db, &bundled_source(), &RunOptions::default())
        .await
        .unwrap();
    let second_matches = db.all_matches().unwrap();
    let second_batting = db.batting_by_rank().unwrap();

    assert_eq!(first_matches, second_matches);
    assert_eq!(first_batting, second_batting);
    assert_eq!(db.row_count(RecordKind::Match).unwrap(), 20);
}

#[tokio::test]
async fn test_backup_file_captures_normalized_records() {
    let dir = tempfile::tempdir().unwrap();
    let backup_path = dir.path().join("scraped_data.json");
    let mut db = CricketDatabase::new_in_memory().unwrap();

    let opts = RunOptions {
        backup_path: Some(backup_path.clone()),
        survey: false,
        verbose: false,
    };
    run(&mut db, &bundled_source(), &opts).await.unwrap();

    let json = std::fs::read_to_string(&backup_path).unwrap();
    let backup: ScrapeBackup = serde_json::from_str(&json).unwrap();

    assert_eq!(backup.matches.len(), 20);
    assert_eq!(backup.batting.len(), 20);
    assert_eq!(backup.bowling.len(), 20);
    assert_eq!(backup.batting[0].player_name, "Mitchell Owen");
}

const SPARSE_BATTING: &[FixtureRow] = &[
    &["Alpha One", "Team A", "5", "200", "40.00", "150.00", "88", "0", "2", "20", "8"],
    &["", "Team B", "5", "150", "30.00", "120.00", "70", "0", "1", "15", "4"],
    &["Beta Two", "Team C", "5", "100", "20.00", "110.00", "55", "0", "0", "10", "2"],
];

const NO_ROWS: &[FixtureRow] = &[];

#[tokio::test]
async fn test_rejected_candidates_counted_and_excluded() {
    let source = Source::Fixture(FixtureSet {
        matches: NO_ROWS,
        batting: SPARSE_BATTING,
        bowling: NO_ROWS,
    });
    let mut db = CricketDatabase::new_in_memory().unwrap();

    let summary = run(&mut db, &source, &RunOptions::default()).await.unwrap();

    let report = summary.report(RecordKind::Batting).unwrap();
    assert_eq!(report.extracted, 3);
    assert_eq!(report.normalized, 2);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.loaded, 2);

    // Rejected row never reaches the table; ranks stay contiguous
    let batting = db.batting_by_rank().unwrap();
    assert_eq!(batting.len(), 2);
    assert_eq!(batting[0].player_name, "Alpha One");
    assert_eq!(batting[0].rank.as_u32(), 1);
    assert_eq!(batting[1].player_name, "Beta Two");
    assert_eq!(batting[1].rank.as_u32(), 2);
}
