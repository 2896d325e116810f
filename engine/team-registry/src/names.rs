use crate::abbreviations::FRANCHISE_NAMES;

/// Clean a team cell as printed by a stats table
///
/// Drops parenthesised fragments ("Jazz (1)"), anything from a "Logo" label
/// onwards, and a trailing season tag ("Jazz 2024-25"), then maps full
/// franchise names to their nickname.
pub fn clean_team_name(raw: &str) -> String {
    let mut name = strip_parenthesised(raw);

    if let Some(pos) = name.find("Logo") {
        name.truncate(pos);
    }
    if let Some(pos) = find_season_tag(&name) {
        name.truncate(pos);
    }

    let name = collapse_whitespace(&name);
    canonical_nickname(&name).map(str::to_string).unwrap_or(name)
}

/// Nickname for a full franchise name, or the name itself when it already is one
pub fn canonical_nickname(name: &str) -> Option<&'static str> {
    let name = name.trim();
    FRANCHISE_NAMES
        .iter()
        .find(|(full, nickname)| full.eq_ignore_ascii_case(name) || nickname.eq_ignore_ascii_case(name))
        .map(|(_, nickname)| *nickname)
}

fn strip_parenthesised(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Byte offset of the first "dddd-dd" season tag
fn find_season_tag(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    if bytes.len() < 7 {
        return None;
    }
    (0..=bytes.len() - 7).find(|&i| {
        let window = &bytes[i..i + 7];
        window[..4].iter().all(u8::is_ascii_digit)
            && window[4] == b'-'
            && window[5..].iter().all(u8::is_ascii_digit)
    })
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_team_name() {
        assert_eq!(clean_team_name("Utah Jazz (12-40)"), "Jazz");
        assert_eq!(clean_team_name("Wizards Logo Washington"), "Wizards");
        assert_eq!(clean_team_name("Hornets 2024-25 Regular Season"), "Hornets");
        assert_eq!(clean_team_name("  Portland   Trail Blazers "), "Trail Blazers");
        assert_eq!(clean_team_name("LA Clippers"), "Clippers");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(clean_team_name("Seattle SuperSonics (1)"), "Seattle SuperSonics");
        assert_eq!(clean_team_name(""), "");
    }

    #[test]
    fn test_canonical_nickname() {
        assert_eq!(canonical_nickname("golden state warriors"), Some("Warriors"));
        assert_eq!(canonical_nickname("76ers"), Some("76ers"));
        assert_eq!(canonical_nickname("Sonics"), None);
    }
}
