use sstv_playlist_lib::api::token_from_body;
use sstv_playlist_lib::channels;
use sstv_playlist_lib::playlist::{self, PLAYLIST_FILENAME};

fn extinf_numbers(text: &str) -> Vec<u32> {
    text.lines()
        .filter_map(|line| line.strip_prefix("#EXTINF:-1, "))
        .filter_map(|rest| rest.split(' ').next())
        .filter_map(|num| num.parse().ok())
        .collect()
}

#[test]
fn test_entries_in_ascending_numeric_order() {
    let text = playlist::generate("dnaw", "abc123");
    let numbers = extinf_numbers(&text);
    assert_eq!(numbers.len(), channels::CHANNELS.len());
    for pair in numbers.windows(2) {
        assert!(pair[0] < pair[1], "{} should precede {}", pair[0], pair[1]);
    }
}

#[test]
fn test_every_channel_gets_a_url_line() {
    let text = playlist::generate("dnaw", "abc123");
    let url_lines = text.lines().filter(|l| l.starts_with("http://")).count();
    assert_eq!(url_lines, channels::CHANNELS.len());
}

#[test]
fn test_every_url_carries_the_exact_token() {
    let token = "sig+nature/with=padding==";
    let text = playlist::generate("deu.uk", token);
    for line in text.lines().filter(|l| l.starts_with("http://")) {
        assert!(line.ends_with(&format!("?wmsAuthSign={token}")), "{line}");
    }
}

#[test]
fn test_header_is_first_line() {
    let text = playlist::generate("dsg", "tok");
    assert_eq!(text.lines().next(), Some("#EXTM3U"));
}

#[test]
fn test_unrecognized_code_still_renders_into_host() {
    // warn-and-continue policy builds with whatever the user typed
    let text = playlist::generate("bogus", "tok");
    assert!(text.contains("http://bogus.smoothstreams.tv:9100/"));
}

#[test]
fn test_written_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(PLAYLIST_FILENAME);
    let text = playlist::generate("dnaw", "abc123");
    let written = playlist::write_playlist(&path, &text).unwrap();
    assert_eq!(std::fs::read_to_string(written).unwrap(), text);
}

#[test]
fn test_auth_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(PLAYLIST_FILENAME);
    let result = token_from_body("{}")
        .map(|token| playlist::write_playlist(&path, &playlist::generate("dnaw", token.as_str())));
    assert!(result.is_err());
    assert!(!path.exists());
}
