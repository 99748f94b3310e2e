use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub images: Vec<Image>,
}

/// A track as the Web API returns it, in the fields this program consumes.
///
/// `id` and `uri` are optional because playlist listings may contain local
/// or unavailable entries that carry neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub uri: Option<String>,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub external_urls: ExternalUrls,
    pub album: Option<AlbumRef>,
}

/// The resolved, non-optional track shape the rest of the program works with.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub artists: Vec<String>,
    pub url: String,
    pub art_url: Option<String>,
}

impl Track {
    /// Converts a wire track into the domain shape.
    ///
    /// Returns `None` for entries without an id (local files, removed
    /// tracks); listings skip these instead of failing. The art URL picks
    /// the second image when present (Spotify orders images largest first,
    /// so index 1 is the medium rendition) and falls back to whatever is
    /// there.
    pub fn from_object(obj: TrackObject) -> Option<Track> {
        let id = obj.id?;
        let uri = obj
            .uri
            .unwrap_or_else(|| format!("spotify:track:{}", id));
        let art_url = obj.album.and_then(|album| {
            album
                .images
                .get(1)
                .or_else(|| album.images.first())
                .map(|i| i.url.clone())
        });
        let url = obj
            .external_urls
            .spotify
            .unwrap_or_else(|| format!("https://open.spotify.com/track/{}", id));

        Some(Track {
            id,
            uri,
            name: obj.name,
            artists: obj.artists.into_iter().map(|a| a.name).collect(),
            url,
            art_url,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPlaylistsResponse {
    pub items: Vec<PlaylistObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistObject {
    pub id: String,
    pub name: String,
    pub images: Option<Vec<Image>>,
    pub tracks: PlaylistTracksRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<TrackObject>,
}

/// One playlist in the browsing grid or the `playlists` table.
#[derive(Debug, Clone)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub cover_url: Option<String>,
    pub total_tracks: u64,
}

impl PlaylistSummary {
    pub fn from_object(obj: PlaylistObject) -> PlaylistSummary {
        let cover_url = obj
            .images
            .unwrap_or_default()
            .first()
            .map(|i| i.url.clone());
        PlaylistSummary {
            id: obj.id,
            name: obj.name,
            cover_url,
            total_tracks: obj.tracks.total,
        }
    }
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: u64,
    pub cover: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub nr: usize,
    pub title: String,
    pub artists: String,
    pub url: String,
}
