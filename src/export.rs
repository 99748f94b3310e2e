//! CSV export of generated playlists.
//!
//! One file per successful generation, written to the working directory and
//! overwritten when it already exists. The format is deliberately plain:
//! a fixed header row, one row per track, minimal quoting (only fields
//! containing commas, quotes or newlines are wrapped).

use std::path::PathBuf;

use crate::{types::Track, utils};

pub const EXPORT_HEADER: &str = "Track Name,Artists,Spotify URL";

/// One row of the export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub name: String,
    pub artists: String,
    pub url: String,
}

impl ExportRecord {
    pub fn from_track(track: &Track) -> ExportRecord {
        ExportRecord {
            name: track.name.clone(),
            artists: utils::join_artists(&track.artists),
            url: track.url.clone(),
        }
    }
}

/// Quotes a CSV field when its content requires it, doubling inner quotes.
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders the header plus one line per record.
pub fn render_csv(records: &[ExportRecord]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "{},{},{}\n",
            csv_field(&record.name),
            csv_field(&record.artists),
            csv_field(&record.url)
        ));
    }
    out
}

/// Writes the export file for a playlist and returns its path.
///
/// The file name derives from the playlist name via
/// [`utils::export_filename`] and lands in the working directory.
pub async fn write_export(playlist_name: &str, tracks: &[Track]) -> Result<PathBuf, std::io::Error> {
    let records: Vec<ExportRecord> = tracks.iter().map(ExportRecord::from_track).collect();
    let path = PathBuf::from(utils::export_filename(playlist_name));
    async_fs::write(&path, render_csv(&records)).await?;
    Ok(path)
}
