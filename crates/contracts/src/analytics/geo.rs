/// Buyer state extracted from a free-text address.
///
/// Addresses in the feed follow "street, city, state, PIN", so the
/// second-to-last comma-separated segment is taken as the state. This is
/// deliberately naive, not an address parser: anything with fewer than two
/// segments, or an empty segment in that position, falls back to "Unknown".
pub fn extract_state(address: &str) -> String {
    let parts: Vec<&str> = address.split(',').map(str::trim).collect();
    if parts.len() >= 2 {
        let state = parts[parts.len() - 2];
        if state.is_empty() {
            "Unknown".to_string()
        } else {
            state.to_string()
        }
    } else {
        "Unknown".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_to_last_segment_is_the_state() {
        assert_eq!(
            extract_state("123 Main St, Springfield, Illinois, 62704"),
            "Illinois"
        );
        assert_eq!(
            extract_state("12 MG Road, Bengaluru, Karnataka, 560001"),
            "Karnataka"
        );
    }

    #[test]
    fn two_segments_take_the_first() {
        assert_eq!(extract_state("Karnataka, 560001"), "Karnataka");
    }

    #[test]
    fn short_or_malformed_addresses_fall_back_to_unknown() {
        assert_eq!(extract_state("Bengaluru"), "Unknown");
        assert_eq!(extract_state(""), "Unknown");
        assert_eq!(extract_state(", 560001"), "Unknown");
    }

    #[test]
    fn segments_are_trimmed() {
        assert_eq!(extract_state("12 MG Road ,  Bengaluru ,  Karnataka , 560001"), "Karnataka");
    }
}
