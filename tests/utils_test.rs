use juno::utils::*;
use juno::youtube::extract_first_video_id;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_parse_tuning_accepts_values_in_range() {
    assert_eq!(parse_tuning("0.3"), 0.3);
    assert_eq!(parse_tuning("0"), 0.0);
    assert_eq!(parse_tuning("1"), 1.0);
    assert_eq!(parse_tuning(" 0.25 "), 0.25);
}

#[test]
fn test_parse_tuning_falls_back_on_bad_input() {
    // non-numeric input
    assert_eq!(parse_tuning("abc"), TUNING_DEFAULT);

    // out of range on either side
    assert_eq!(parse_tuning("-1"), TUNING_DEFAULT);
    assert_eq!(parse_tuning("1.5"), TUNING_DEFAULT);

    // empty input
    assert_eq!(parse_tuning(""), TUNING_DEFAULT);
}

#[test]
fn test_export_filename_replaces_spaces() {
    assert_eq!(export_filename("My Mix 1"), "My_Mix_1.csv");
    assert_eq!(export_filename("NoSpaces"), "NoSpaces.csv");

    // consecutive spaces each become an underscore, nothing else changes
    assert_eq!(export_filename("a  b"), "a__b.csv");
    assert_eq!(export_filename("lo-fi/chill"), "lo-fi/chill.csv");
}

#[test]
fn test_join_artists() {
    assert_eq!(join_artists(&[]), "");
    assert_eq!(join_artists(&["Solo".to_string()]), "Solo");
    assert_eq!(
        join_artists(&["First".to_string(), "Second".to_string()]),
        "First, Second"
    );
}

#[test]
fn test_video_query_shape() {
    assert_eq!(
        video_query("Song", &["Artist A".to_string(), "Artist B".to_string()]),
        "Song Artist A, Artist B audio"
    );

    // no artists collapses cleanly
    assert_eq!(video_query("Song", &[]), "Song audio");
}

#[test]
fn test_cap_track_batch_never_exceeds_limit() {
    let uris: Vec<String> = (0..250).map(|i| format!("spotify:track:{}", i)).collect();
    let batch = cap_track_batch(&uris);
    assert_eq!(batch.len(), PLAYLIST_ADD_LIMIT);

    // the cap keeps the leading entries in order
    assert_eq!(batch[0], "spotify:track:0");
    assert_eq!(batch[PLAYLIST_ADD_LIMIT - 1], "spotify:track:99");
}

#[test]
fn test_cap_track_batch_passes_small_batches_through() {
    let uris: Vec<String> = (0..7).map(|i| format!("spotify:track:{}", i)).collect();
    assert_eq!(cap_track_batch(&uris).len(), 7);

    let exact: Vec<String> = (0..100).map(|i| format!("spotify:track:{}", i)).collect();
    assert_eq!(cap_track_batch(&exact).len(), 100);

    let empty: Vec<String> = Vec::new();
    assert!(cap_track_batch(&empty).is_empty());
}

#[test]
fn test_extract_first_video_id() {
    let body = r#"{"videoRenderer":{"videoId":"dQw4w9WgXcQ","thumbnail":{}}}"#;
    assert_eq!(
        extract_first_video_id(body),
        Some("dQw4w9WgXcQ".to_string())
    );

    // the first occurrence wins
    let body = r#""videoId":"first_id_01" ... "videoId":"second_id_2""#;
    assert_eq!(extract_first_video_id(body), Some("first_id_01".to_string()));
}

#[test]
fn test_extract_first_video_id_absent_or_malformed() {
    // no marker at all
    assert_eq!(extract_first_video_id("<html>no results</html>"), None);

    // empty id
    assert_eq!(extract_first_video_id(r#""videoId":"""#), None);

    // id containing characters a video id never has
    assert_eq!(
        extract_first_video_id(r#""videoId":"not a video id""#),
        None
    );

    // marker with an unterminated value
    assert_eq!(extract_first_video_id(r#""videoId":"abc"#), None);
}
