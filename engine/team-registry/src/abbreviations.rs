/// Team code -> canonical nickname
///
/// Standard three-letter codes first, then the alternates seen in game logs
/// and on other sites.
pub const TEAM_ABBREVIATIONS: &[(&str, &str)] = &[
    ("ATL", "Hawks"),
    ("BOS", "Celtics"),
    ("BKN", "Nets"),
    ("CHA", "Hornets"),
    ("CHI", "Bulls"),
    ("CLE", "Cavaliers"),
    ("DAL", "Mavericks"),
    ("DEN", "Nuggets"),
    ("DET", "Pistons"),
    ("GSW", "Warriors"),
    ("HOU", "Rockets"),
    ("IND", "Pacers"),
    ("LAC", "Clippers"),
    ("LAL", "Lakers"),
    ("MEM", "Grizzlies"),
    ("MIA", "Heat"),
    ("MIL", "Bucks"),
    ("MIN", "Timberwolves"),
    ("NOP", "Pelicans"),
    ("NYK", "Knicks"),
    ("OKC", "Thunder"),
    ("ORL", "Magic"),
    ("PHI", "76ers"),
    ("PHX", "Suns"),
    ("POR", "Trail Blazers"),
    ("SAC", "Kings"),
    ("SAS", "Spurs"),
    ("TOR", "Raptors"),
    ("UTA", "Jazz"),
    ("WAS", "Wizards"),
    // Alternates
    ("HAW", "Hawks"),
    ("CEL", "Celtics"),
    ("NET", "Nets"),
    ("BRK", "Nets"),
    ("HOR", "Hornets"),
    ("CHO", "Hornets"),
    ("BUL", "Bulls"),
    ("CAV", "Cavaliers"),
    ("MAV", "Mavericks"),
    ("NUG", "Nuggets"),
    ("PIS", "Pistons"),
    ("GOL", "Warriors"),
    ("GS", "Warriors"),
    ("ROC", "Rockets"),
    ("PAC", "Pacers"),
    ("CLI", "Clippers"),
    ("LAK", "Lakers"),
    ("GRI", "Grizzlies"),
    ("HEA", "Heat"),
    ("BUC", "Bucks"),
    ("TIM", "Timberwolves"),
    ("PEL", "Pelicans"),
    ("NO", "Pelicans"),
    ("KNI", "Knicks"),
    ("NY", "Knicks"),
    ("THU", "Thunder"),
    ("MAG", "Magic"),
    ("SIX", "76ers"),
    ("SUN", "Suns"),
    ("PHO", "Suns"),
    ("BLA", "Trail Blazers"),
    ("KIN", "Kings"),
    ("SPU", "Spurs"),
    ("SA", "Spurs"),
    ("RAP", "Raptors"),
    ("JAZ", "Jazz"),
    ("UTAH", "Jazz"),
    ("WIZ", "Wizards"),
    ("WSH", "Wizards"),
];

/// Full franchise names -> canonical nickname
pub const FRANCHISE_NAMES: &[(&str, &str)] = &[
    ("Atlanta Hawks", "Hawks"),
    ("Boston Celtics", "Celtics"),
    ("Brooklyn Nets", "Nets"),
    ("Charlotte Hornets", "Hornets"),
    ("Chicago Bulls", "Bulls"),
    ("Cleveland Cavaliers", "Cavaliers"),
    ("Dallas Mavericks", "Mavericks"),
    ("Denver Nuggets", "Nuggets"),
    ("Detroit Pistons", "Pistons"),
    ("Golden State Warriors", "Warriors"),
    ("Houston Rockets", "Rockets"),
    ("Indiana Pacers", "Pacers"),
    ("LA Clippers", "Clippers"),
    ("Los Angeles Clippers", "Clippers"),
    ("LA Lakers", "Lakers"),
    ("Los Angeles Lakers", "Lakers"),
    ("Memphis Grizzlies", "Grizzlies"),
    ("Miami Heat", "Heat"),
    ("Milwaukee Bucks", "Bucks"),
    ("Minnesota Timberwolves", "Timberwolves"),
    ("New Orleans Pelicans", "Pelicans"),
    ("New York Knicks", "Knicks"),
    ("Oklahoma City Thunder", "Thunder"),
    ("Orlando Magic", "Magic"),
    ("Philadelphia 76ers", "76ers"),
    ("Phoenix Suns", "Suns"),
    ("Portland Trail Blazers", "Trail Blazers"),
    ("Sacramento Kings", "Kings"),
    ("San Antonio Spurs", "Spurs"),
    ("Toronto Raptors", "Raptors"),
    ("Utah Jazz", "Jazz"),
    ("Washington Wizards", "Wizards"),
];

/// Canonical nickname for a team code, from the static table
pub fn lookup(code: &str) -> Option<&'static str> {
    let code = code.trim();
    TEAM_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(code))
        .map(|(_, nickname)| *nickname)
}
