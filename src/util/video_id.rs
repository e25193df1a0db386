//! YouTube video id extraction from links and message text.

const WATCH_MARKER: &str = "watch?v=";
const SHORTS_MARKER: &str = "/shorts/";

/// Extracts the video id from a feed entry link.
///
/// Watch links yield the `v` parameter up to the next `&`, shorts links yield the
/// segment after `/shorts/` up to any query. Any other link yields its final path
/// segment.
pub fn video_id_from_link(link: &str) -> String {
    if let Some(id) = marked_video_id(link) {
        return id;
    }

    let path = link
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or(link);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
        .to_string()
}

/// Extracts the video id from free text containing a watch or shorts link.
///
/// Used when scanning channel history; text without either marker yields `None`.
/// When several links are present the last one wins.
pub fn video_id_from_message(content: &str) -> Option<String> {
    marked_video_id(content)
}

fn marked_video_id(text: &str) -> Option<String> {
    let (rest, terminators): (&str, &[char]) = if let Some(pos) = text.rfind(WATCH_MARKER) {
        (&text[pos + WATCH_MARKER.len()..], &['&', '#'])
    } else if let Some(pos) = text.rfind(SHORTS_MARKER) {
        (&text[pos + SHORTS_MARKER.len()..], &['?', '/', '#'])
    } else {
        return None;
    };

    let id: String = rest
        .chars()
        .take_while(|c| !c.is_whitespace() && !terminators.contains(c))
        .collect();

    (!id.is_empty()).then_some(id)
}
