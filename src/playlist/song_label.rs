//! Song row labels: `🎵 <title> — <artist> (<duration>)`.

const SONG_LABEL_PREFIX: &str = "🎵 ";
const SONG_LABEL_SEPARATOR: &str = " — ";

pub fn format_song_label(title: &str, artist: &str, duration: &str) -> String {
    format!("{SONG_LABEL_PREFIX}{title}{SONG_LABEL_SEPARATOR}{artist} ({duration})")
}

/// Recovers the title from a label built by [`format_song_label`].
///
/// A title that itself contains `" — "` is cut at its first separator, so the
/// round trip only holds for titles without it.
pub fn parse_song_title(label: &str) -> String {
    let body = label.strip_prefix(SONG_LABEL_PREFIX).unwrap_or(label);
    body.split(SONG_LABEL_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_song_label, parse_song_title};

    #[test]
    fn test_format_song_label_matches_list_row_layout() {
        assert_eq!(
            format_song_label("Yesterday", "Beatles", "2:05"),
            "🎵 Yesterday — Beatles (2:05)"
        );
        assert_eq!(format_song_label("Intro", "", ""), "🎵 Intro —  ()");
    }

    #[test]
    fn test_parse_song_title_inverts_formatting() {
        for title in ["Yesterday", "Help!", "Don't Stop Me Now", "A-ha (live)", "🎵 Echo"] {
            let label = format_song_label(title, "Someone", "3:00");
            assert_eq!(parse_song_title(&label), title, "label was {label:?}");
        }
    }

    #[test]
    fn test_parse_song_title_ignores_empty_artist_and_duration() {
        let label = format_song_label("Intro", "", "");
        assert_eq!(parse_song_title(&label), "Intro");
    }

    #[test]
    fn test_title_containing_separator_breaks_round_trip() {
        let title = "Live — Remastered";
        let label = format_song_label(title, "Band", "4:10");
        let parsed = parse_song_title(&label);

        assert_ne!(parsed, title);
        assert_eq!(parsed, "Live");
    }

    #[test]
    fn test_parse_song_title_accepts_unprefixed_text() {
        assert_eq!(parse_song_title("Plain — Artist (1:00)"), "Plain");
        assert_eq!(parse_song_title(""), "");
    }
}
