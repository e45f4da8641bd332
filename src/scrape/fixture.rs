//! Bundled fallback dataset: the 2024-25 Big Bash League season.
//!
//! Used when remote scraping is unavailable or blocked. Rows carry the same
//! positional field layout the Extractor produces for live pages, so the
//! downstream pipeline cannot tell the two sources apart. Rank and match
//! number are not part of a row; the Normalizer assigns them sequentially.

use crate::cli::types::RecordKind;

/// One fixture row: ordered field texts, identical in shape to a scraped row.
pub type FixtureRow = &'static [&'static str];

/// A complete fallback dataset, injected via [`super::Source::Fixture`] so
/// tests can substitute arbitrary tables.
#[derive(Debug, Clone, Copy)]
pub struct FixtureSet {
    pub matches: &'static [FixtureRow],
    pub batting: &'static [FixtureRow],
    pub bowling: &'static [FixtureRow],
}

impl FixtureSet {
    /// Rows for a kind.
    pub fn rows(&self, kind: RecordKind) -> &'static [FixtureRow] {
        match kind {
            RecordKind::Match => self.matches,
            RecordKind::Batting => self.batting,
            RecordKind::Bowling => self.bowling,
        }
    }
}

/// The bundled season dataset.
pub const BUNDLED: FixtureSet = FixtureSet {
    matches: MATCHES,
    batting: BATTING,
    bowling: BOWLING,
};

// Field order: date, venue, team1, score1, team2, score2, result, winner,
// margin, player_of_match.
const MATCHES: &[FixtureRow] = &[
    &["Dec 15, 2024", "MCG", "Melbourne Stars", "133/9 (20)", "Perth Scorchers", "135/6 (18.3)", "Scorchers won", "Perth Scorchers", "4 wickets", "Aaron Hardie"],
    &["Dec 15, 2024", "Sydney", "Melbourne Renegades", "155/8 (20)", "Sydney Sixers", "159/5 (18.2)", "Sixers won", "Sydney Sixers", "5 wickets", "Jordan Silk"],
    &["Dec 17, 2024", "Adelaide", "Adelaide Strikers", "140/7 (20)", "Sydney Thunder", "141/5 (18.4)", "Thunder won", "Sydney Thunder", "5 wickets", "Sam Konstas"],
    &["Dec 18, 2024", "MCG", "Melbourne Stars", "180/5 (20)", "Brisbane Heat", "181/7 (19.4)", "Heat won", "Brisbane Heat", "3 wickets", "Marnus Labuschagne"],
    &["Dec 19, 2024", "Hobart", "Hobart Hurricanes", "74/10 (14.3)", "Melbourne Renegades", "75/2 (10.4)", "Renegades won", "Melbourne Renegades", "8 wickets", "Tom Rogers"],
    &["Dec 20, 2024", "Adelaide", "Adelaide Strikers", "189/7 (20)", "Melbourne Stars", "165/9 (20)", "Strikers won", "Adelaide Strikers", "24 runs", "Matthew Short"],
    &["Dec 21, 2024", "Perth", "Perth Scorchers", "146/9 (20)", "Hobart Hurricanes", "147/5 (19.2)", "Hurricanes won", "Hobart Hurricanes", "5 wickets", "Mitchell Owen"],
    &["Dec 22, 2024", "Sydney", "Sydney Thunder", "178/8 (20)", "Sydney Sixers", "150/7 (20)", "Thunder won", "Sydney Thunder", "28 runs", "David Warner"],
    &["Dec 23, 2024", "Adelaide", "Adelaide Strikers", "169/7 (20)", "Brisbane Heat", "171/6 (19.4)", "Heat won", "Brisbane Heat", "4 wickets", "Xavier Bartlett"],
    &["Dec 26, 2024", "Perth", "Perth Scorchers", "139/8 (20)", "Melbourne Renegades", "142/7 (19.3)", "Renegades won", "Melbourne Renegades", "3 wickets", "Jake Fraser-McGurk"],
    &["Dec 27, 2024", "MCG", "Melbourne Stars", "180/4 (20)", "Sydney Sixers", "182/5 (19.3)", "Sixers won", "Sydney Sixers", "5 wickets", "Steven Smith"],
    &["Dec 28, 2024", "Perth", "Perth Scorchers", "187/6 (20)", "Brisbane Heat", "166/8 (20)", "Scorchers won", "Perth Scorchers", "21 runs", "Ashton Turner"],
    &["Dec 29, 2024", "Hobart", "Hobart Hurricanes", "172/6 (20)", "Adelaide Strikers", "145/9 (20)", "Hurricanes won", "Hobart Hurricanes", "27 runs", "Ben McDermott"],
    &["Dec 30, 2024", "Sydney", "Sydney Thunder", "158/7 (20)", "Melbourne Stars", "162/6 (19.2)", "Stars won", "Melbourne Stars", "4 wickets", "Glenn Maxwell"],
    &["Dec 31, 2024", "Brisbane", "Brisbane Heat", "169/8 (20)", "Sydney Sixers", "170/6 (19.4)", "Sixers won", "Sydney Sixers", "4 wickets", "Jordan Silk"],
    &["Jan 1, 2025", "Sydney", "Sydney Thunder", "179/5 (20)", "Melbourne Renegades", "166/8 (20)", "Thunder won", "Sydney Thunder", "13 runs", "Jason Sangha"],
    &["Jan 2, 2025", "Adelaide", "Adelaide Strikers", "161/7 (20)", "Perth Scorchers", "162/5 (18.3)", "Scorchers won", "Perth Scorchers", "5 wickets", "Cooper Connolly"],
    &["Jan 3, 2025", "Hobart", "Hobart Hurricanes", "179/4 (20)", "Sydney Sixers", "162/8 (20)", "Hurricanes won", "Hobart Hurricanes", "17 runs", "Nikhil Chaudhary"],
    &["Jan 4, 2025", "Brisbane", "Brisbane Heat", "190/5 (20)", "Melbourne Stars", "154/9 (20)", "Heat won", "Brisbane Heat", "36 runs", "Colin Munro"],
    &["Jan 4, 2025", "Melbourne", "Melbourne Renegades", "187/7 (20)", "Adelaide Strikers", "147/9 (20)", "Renegades won", "Melbourne Renegades", "40 runs", "Josh Brown"],
];

// Field order: player_name, team, matches, runs, average, strike_rate,
// high_score, hundreds, fifties, fours, sixes.
const BATTING: &[FixtureRow] = &[
    &["Mitchell Owen", "Hobart Hurricanes", "11", "452", "41.09", "203.60", "108", "2", "0", "35", "36"],
    &["David Warner", "Sydney Thunder", "11", "357", "32.45", "140.55", "86", "0", "3", "44", "10"],
    &["Glenn Maxwell", "Melbourne Stars", "11", "325", "29.55", "162.81", "90*", "0", "2", "27", "18"],
    &["Cooper Connolly", "Perth Scorchers", "10", "294", "32.67", "146.27", "66", "0", "3", "28", "12"],
    &["Josh Brown", "Melbourne Renegades", "11", "291", "26.45", "158.15", "73", "0", "2", "30", "16"],
    &["Ben McDermott", "Hobart Hurricanes", "11", "287", "26.09", "139.32", "68", "0", "2", "32", "8"],
    &["Jason Sangha", "Sydney Thunder", "11", "285", "25.91", "134.91", "67", "0", "2", "28", "7"],
    &["Jake Fraser-McGurk", "Melbourne Renegades", "11", "277", "25.18", "172.67", "79", "0", "2", "20", "19"],
    &["Jordan Silk", "Sydney Sixers", "11", "275", "30.56", "142.49", "70", "0", "2", "25", "9"],
    &["Matthew Short", "Adelaide Strikers", "10", "268", "26.80", "151.41", "69", "0", "2", "31", "11"],
    &["Marnus Labuschagne", "Brisbane Heat", "8", "263", "32.88", "131.66", "77", "0", "2", "28", "7"],
    &["Tim David", "Hobart Hurricanes", "10", "256", "42.67", "171.81", "62*", "0", "2", "13", "20"],
    &["Steven Smith", "Sydney Sixers", "8", "238", "29.75", "128.65", "66", "0", "1", "29", "4"],
    &["Ashton Turner", "Perth Scorchers", "10", "236", "33.71", "137.21", "55", "0", "1", "18", "11"],
    &["Marcus Stoinis", "Melbourne Stars", "9", "228", "28.50", "144.30", "53", "0", "1", "16", "14"],
    &["Sam Konstas", "Sydney Thunder", "9", "224", "24.89", "168.42", "73", "0", "2", "24", "11"],
    &["Colin Munro", "Brisbane Heat", "10", "221", "22.10", "161.31", "62", "0", "1", "21", "13"],
    &["Moises Henriques", "Sydney Sixers", "11", "219", "24.33", "131.73", "48", "0", "0", "20", "6"],
    &["Alex Ross", "Adelaide Strikers", "10", "213", "21.30", "124.42", "51", "0", "1", "21", "5"],
    &["Nick Hobson", "Perth Scorchers", "10", "208", "26.00", "145.10", "52", "0", "1", "18", "10"],
];

// Field order: player_name, team, matches, wickets, best_figures, average,
// economy, strike_rate.
const BOWLING: &[FixtureRow] = &[
    &["Jason Behrendorff", "Perth Scorchers", "10", "17", "3/21", "17.82", "7.05", "13.41"],
    &["Tom Rogers", "Melbourne Renegades", "10", "16", "4/23", "17.38", "7.51", "13.88"],
    &["Lance Morris", "Perth Scorchers", "8", "15", "3/22", "15.67", "8.10", "11.60"],
    &["Lloyd Pope", "Sydney Sixers", "10", "15", "3/25", "20.87", "8.49", "14.73"],
    &["Riley Meredith", "Hobart Hurricanes", "9", "13", "3/27", "19.54", "7.73", "15.15"],
    &["Spencer Johnson", "Adelaide Strikers", "7", "13", "4/20", "13.08", "6.54", "11.08"],
    &["Ben Dwarshuis", "Sydney Sixers", "11", "14", "4/32", "22.57", "7.76", "17.43"],
    &["Nathan Ellis", "Hobart Hurricanes", "11", "14", "3/23", "23.71", "7.93", "17.93"],
    &["Xavier Bartlett", "Brisbane Heat", "9", "13", "3/22", "19.69", "7.53", "15.69"],
    &["Nathan McAndrew", "Sydney Thunder", "10", "13", "5/26", "21.69", "7.68", "16.92"],
    &["Chris Green", "Sydney Thunder", "11", "12", "3/18", "23.25", "7.15", "19.50"],
    &["Wes Agar", "Adelaide Strikers", "9", "11", "3/28", "24.09", "8.00", "18.00"],
    &["Kane Richardson", "Melbourne Renegades", "11", "11", "3/26", "29.09", "8.03", "21.73"],
    &["Adam Zampa", "Melbourne Stars", "9", "11", "3/21", "24.18", "7.85", "18.55"],
    &["Joel Paris", "Perth Scorchers", "9", "10", "3/19", "22.70", "7.32", "18.60"],
    &["Ben Cutting", "Sydney Sixers", "8", "9", "3/24", "21.56", "7.76", "16.67"],
    &["Hayden Kerr", "Sydney Sixers", "11", "9", "3/27", "32.22", "7.84", "24.67"],
    &["Doug Warren", "Melbourne Stars", "8", "8", "3/31", "24.00", "7.38", "19.50"],
    &["Matthew Kuhnemann", "Brisbane Heat", "8", "8", "2/21", "28.75", "7.93", "21.75"],
    &["Mark Steketee", "Brisbane Heat", "7", "8", "2/18", "21.75", "7.25", "18.00"],
];
