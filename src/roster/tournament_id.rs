//! Tournament id extraction from user input.

use uuid::Uuid;

/// Length of a hyphenated UUID such as `9fb0e8d8-6733-49c5-3943-08dddfe5e858`
const HYPHENATED_LEN: usize = 36;

/// Extracts a tournament id from a bare UUID or a Challengermode tournament link.
///
/// Links such as `https://www.challengermode.com/s/FUNCLUB/tournaments/<uuid>?tab=query` yield
/// the first hyphenated UUID found anywhere in the input.
pub fn extract_tournament_id(input: &str) -> Option<Uuid> {
    let input = input.trim();

    if let Ok(id) = Uuid::parse_str(input) {
        return Some(id);
    }

    if !input.starts_with("https://") && !input.starts_with("http://") {
        return None;
    }

    input
        .char_indices()
        .filter_map(|(start, _)| input.get(start..start + HYPHENATED_LEN))
        .find_map(parse_hyphenated)
}

fn parse_hyphenated(candidate: &str) -> Option<Uuid> {
    let is_hyphenated = candidate.char_indices().all(|(i, c)| match i {
        8 | 13 | 18 | 23 => c == '-',
        _ => c.is_ascii_hexdigit(),
    });

    if is_hyphenated {
        Uuid::parse_str(candidate).ok()
    } else {
        None
    }
}
