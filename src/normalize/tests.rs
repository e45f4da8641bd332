//! Unit tests for the Normalizer

use super::*;
use crate::scrape::RawRecord;

fn raw(fields: &[&str]) -> RawRecord {
    RawRecord::new(fields.iter().map(|s| s.to_string()).collect())
}

fn batting_raw() -> RawRecord {
    raw(&[
        "Mitchell Owen",
        "Hobart Hurricanes",
        "11",
        "452",
        "41.09",
        "203.60",
        "108",
        "2",
        "0",
        "35",
        "36",
    ])
}

#[test]
fn test_batting_row_normalizes() {
    let outcome = normalize(RecordKind::Batting, &batting_raw(), 1);

    let Outcome::Accepted(Record::Batting(entry)) = outcome else {
        panic!("expected an accepted batting entry");
    };
    assert_eq!(entry.rank, Rank::new(1));
    assert_eq!(entry.player_name, "Mitchell Owen");
    assert_eq!(entry.team, "Hobart Hurricanes");
    assert_eq!(entry.matches, 11);
    assert_eq!(entry.runs, 452);
    assert_eq!(entry.average, 41.09);
    assert_eq!(entry.strike_rate, 203.60);
    assert_eq!(entry.high_score, "108");
    assert_eq!(entry.sixes, 36);
}

#[test]
fn test_bowling_row_normalizes() {
    let fields = raw(&[
        "Tom Rogers",
        "Melbourne Renegades",
        "10",
        "16",
        "4/23",
        "17.38",
        "7.51",
        "13.88",
    ]);
    let outcome = normalize(RecordKind::Bowling, &fields, 2);

    let Outcome::Accepted(Record::Bowling(entry)) = outcome else {
        panic!("expected an accepted bowling entry");
    };
    assert_eq!(entry.rank, Rank::new(2));
    assert_eq!(entry.wickets, 16);
    assert_eq!(entry.best_figures, "4/23");
    assert_eq!(entry.economy, 7.51);
}

#[test]
fn test_match_row_normalizes() {
    let fields = raw(&[
        "Dec 15, 2024",
        "MCG",
        "Melbourne Stars",
        "133/9 (20)",
        "Perth Scorchers",
        "135/6 (18.3)",
        "Scorchers won",
        "Perth Scorchers",
        "4 wickets",
        "Aaron Hardie",
    ]);
    let outcome = normalize(RecordKind::Match, &fields, 1);

    let Outcome::Accepted(Record::Match(m)) = outcome else {
        panic!("expected an accepted match");
    };
    assert_eq!(m.match_no, MatchNo::new(1));
    assert_eq!(m.team1, "Melbourne Stars");
    assert_eq!(m.score1, "133/9 (20)");
    assert_eq!(m.winner, "Perth Scorchers");
}

#[test]
fn test_missing_player_name_rejected() {
    let fields = raw(&["", "Team B", "5", "150", "30.0", "120.0"]);
    let outcome = normalize(RecordKind::Batting, &fields, 1);

    assert!(matches!(outcome, Outcome::Rejected { .. }));
}

#[test]
fn test_whitespace_player_name_rejected() {
    let fields = raw(&["   ", "Team B", "5", "150"]);
    let outcome = normalize(RecordKind::Bowling, &fields, 1);

    assert!(matches!(outcome, Outcome::Rejected { .. }));
}

#[test]
fn test_match_missing_team_rejected() {
    // team2 position is empty after trimming
    let fields = raw(&["Dec 15, 2024", "MCG", "Melbourne Stars", "133/9 (20)", " "]);
    let outcome = normalize(RecordKind::Match, &fields, 1);

    let Outcome::Rejected { reason } = outcome else {
        panic!("expected a rejection");
    };
    assert!(reason.contains("team2"));
}

#[test]
fn test_short_row_degrades_to_defaults() {
    // Only the first five cells scraped; everything else defaults
    let fields = raw(&["Sam Konstas", "Sydney Thunder", "9", "224", "24.89"]);
    let outcome = normalize(RecordKind::Batting, &fields, 1);

    let Outcome::Accepted(Record::Batting(entry)) = outcome else {
        panic!("expected an accepted batting entry");
    };
    assert_eq!(entry.strike_rate, 0.0);
    assert_eq!(entry.high_score, "0");
    assert_eq!(entry.hundreds, 0);
    assert_eq!(entry.sixes, 0);
}

#[test]
fn test_malformed_numbers_floor_to_zero() {
    let fields = raw(&["Player", "Team", "n/a", "-", "abc", "??", "55"]);
    let outcome = normalize(RecordKind::Batting, &fields, 1);

    let Outcome::Accepted(Record::Batting(entry)) = outcome else {
        panic!("expected an accepted batting entry");
    };
    assert_eq!(entry.matches, 0);
    assert_eq!(entry.runs, 0);
    assert_eq!(entry.average, 0.0);
    assert_eq!(entry.strike_rate, 0.0);
    assert_eq!(entry.high_score, "55");
}

#[test]
fn test_numeric_parse_tolerates_padding_and_separators() {
    let fields = raw(&["Player", "Team", " 11 ", "1,234", " 41.09 ", "203.60"]);
    let outcome = normalize(RecordKind::Batting, &fields, 1);

    let Outcome::Accepted(Record::Batting(entry)) = outcome else {
        panic!("expected an accepted batting entry");
    };
    assert_eq!(entry.matches, 11);
    assert_eq!(entry.runs, 1234);
    assert_eq!(entry.average, 41.09);
}

#[test]
fn test_not_out_marker_preserved() {
    let fields = raw(&[
        "Glenn Maxwell",
        "Melbourne Stars",
        "11",
        "325",
        "29.55",
        "162.81",
        "90*",
    ]);
    let outcome = normalize(RecordKind::Batting, &fields, 3);

    let Outcome::Accepted(Record::Batting(entry)) = outcome else {
        panic!("expected an accepted batting entry");
    };
    assert_eq!(entry.high_score, "90*");
}

#[test]
fn test_normalize_all_assigns_contiguous_numbers() {
    let raws = vec![
        raw(&["Alpha One", "Team A", "5", "200", "40.0", "150.0"]),
        raw(&["", "Team B", "5", "150", "30.0", "120.0"]),
        raw(&["Beta Two", "Team C", "5", "100", "20.0", "110.0"]),
    ];
    let batch = normalize_all(RecordKind::Batting, &raws);

    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.rejections.len(), 1);
    assert_eq!(batch.rejections[0].seq, 1);

    let ranks: Vec<u32> = batch
        .records
        .iter()
        .map(|r| match r {
            Record::Batting(b) => b.rank.as_u32(),
            _ => panic!("expected batting entries"),
        })
        .collect();
    assert_eq!(ranks, vec![1, 2]);
}

#[test]
fn test_normalize_all_preserves_order() {
    let raws = vec![
        raw(&["First", "Team", "1", "10", "1.0", "1.0"]),
        raw(&["Second", "Team", "2", "20", "2.0", "2.0"]),
        raw(&["Third", "Team", "3", "30", "3.0", "3.0"]),
    ];
    let batch = normalize_all(RecordKind::Batting, &raws);

    let names: Vec<&str> = batch
        .records
        .iter()
        .map(|r| match r {
            Record::Batting(b) => b.player_name.as_str(),
            _ => panic!("expected batting entries"),
        })
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_record_kind_accessor() {
    let outcome = normalize(RecordKind::Batting, &batting_raw(), 1);
    let Outcome::Accepted(record) = outcome else {
        panic!("expected an accepted record");
    };
    assert_eq!(record.kind(), RecordKind::Batting);
}
