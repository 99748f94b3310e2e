use juno::export::*;
use juno::types::Track;

fn make_track(name: &str, artists: &[&str], url: &str) -> Track {
    Track {
        id: "id".to_string(),
        uri: "spotify:track:id".to_string(),
        name: name.to_string(),
        artists: artists.iter().map(|a| a.to_string()).collect(),
        url: url.to_string(),
        art_url: None,
    }
}

#[test]
fn test_csv_field_quotes_only_when_needed() {
    assert_eq!(csv_field("plain"), "plain");
    assert_eq!(csv_field("has, comma"), "\"has, comma\"");
    assert_eq!(csv_field("has \"quote\""), "\"has \"\"quote\"\"\"");
    assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
}

#[test]
fn test_render_csv_header_and_rows() {
    let tracks = vec![
        make_track("One", &["A"], "https://open.spotify.com/track/1"),
        make_track("Two", &["A", "B"], "https://open.spotify.com/track/2"),
    ];
    let records: Vec<ExportRecord> = tracks.iter().map(ExportRecord::from_track).collect();

    let csv = render_csv(&records);
    let lines: Vec<&str> = csv.lines().collect();

    // exactly one row per record plus the header
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], EXPORT_HEADER);
    assert_eq!(lines[1], "One,A,https://open.spotify.com/track/1");

    // the joined artist list contains a comma and must be quoted
    assert_eq!(lines[2], "Two,\"A, B\",https://open.spotify.com/track/2");
}

#[test]
fn test_render_csv_empty_track_list() {
    let csv = render_csv(&[]);
    assert_eq!(csv, format!("{}\n", EXPORT_HEADER));
}

#[tokio::test]
async fn test_write_export_roundtrip_and_overwrite() {
    let tracks = vec![
        make_track("Alpha", &["Artist"], "https://open.spotify.com/track/a"),
        make_track("Beta", &["X", "Y"], "https://open.spotify.com/track/b"),
    ];

    let path = write_export("Juno Export Probe", &tracks)
        .await
        .expect("export should write");
    assert_eq!(path.to_string_lossy(), "Juno_Export_Probe.csv");

    let content = async_fs::read_to_string(&path).await.expect("file exists");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], EXPORT_HEADER);

    // a second run with fewer tracks replaces the file instead of appending
    let shorter = vec![make_track(
        "Gamma",
        &["Solo"],
        "https://open.spotify.com/track/c",
    )];
    let path = write_export("Juno Export Probe", &shorter)
        .await
        .expect("export should overwrite");
    let content = async_fs::read_to_string(&path).await.expect("file exists");
    assert_eq!(content.lines().count(), 2);

    async_fs::remove_file(&path).await.ok();
}
