use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::channels;
use crate::errors::SstvError;

pub const PLAYLIST_FILENAME: &str = "SmoothStreamsTV.m3u8";
pub const STREAM_HOST: &str = "smoothstreams.tv";
pub const STREAM_PORT: u16 = 9100;
pub const STREAM_PATH: &str = "viewstvn";

/// Render playlist text for an arbitrary entry set. Pure and
/// deterministic; entries are emitted in the order given.
pub fn render(entries: &[(u32, &str)], server_code: &str, token: &str) -> String {
    let mut m3u8 = String::from("#EXTM3U\n");
    for (number, name) in entries {
        let _ = writeln!(m3u8, "#EXTINF:-1, {number} {name}");
        let _ = writeln!(
            m3u8,
            "http://{server_code}.{STREAM_HOST}:{STREAM_PORT}/{STREAM_PATH}/ch{number}q1.stream/playlist.m3u8?wmsAuthSign={token}"
        );
    }
    m3u8
}

/// Build the full playlist from the bundled channel table, in ascending
/// numeric channel order.
pub fn generate(server_code: &str, token: &str) -> String {
    render(&channels::ORDERED, server_code, token)
}

/// Write the playlist, creating or truncating the file. The handle is
/// flushed and synced before success is reported, and the returned path
/// is absolute.
pub fn write_playlist(path: &Path, text: &str) -> Result<PathBuf, SstvError> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(path.canonicalize()?)
}
