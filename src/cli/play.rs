use crate::{
    error, info,
    management::{GENRE_SEARCH_LIMIT, TOP_TRACKS_LIMIT, TokenManager},
    spotify, types::Track, utils, warning, youtube,
};

pub async fn play(genre: Option<String>, track_id: Option<String>) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run juno auth\n Error: {}",
                e
            );
        }
    };
    let token = token_mgr.get_valid_token().await;

    let track: Option<Track> = if let Some(id) = track_id {
        match spotify::track::get_track(&token, &id).await {
            Ok(t) => Some(t),
            Err(e) => {
                warning!("Failed to load track {}. Err: {}", id, e);
                None
            }
        }
    } else if let Some(genre) = genre {
        match first_track_for_genre(&token, &genre).await {
            Ok(t) => t,
            Err(e) => {
                warning!("Failed to search tracks. Err: {}", e);
                None
            }
        }
    } else {
        warning!("Pass either --genre or --track.");
        None
    };

    let Some(track) = track else {
        return;
    };

    match youtube::resolve_track(&track).await {
        Ok(Some(url)) => {
            info!("Opening {}", url);
            if webbrowser::open(&url).is_err() {
                warning!("Failed to open browser for {}", url);
            }
        }
        Ok(None) => {
            info!(
                "No YouTube result found for: {}",
                utils::video_query(&track.name, &track.artists)
            );
        }
        Err(e) => warning!("Video search failed. Err: {}", e),
    }
}

// genre search first, top tracks as the fallback, same as generation
async fn first_track_for_genre(
    token: &str,
    genre: &str,
) -> Result<Option<Track>, reqwest::Error> {
    let found = spotify::search::tracks_by_genre(token, genre, GENRE_SEARCH_LIMIT).await?;
    if let Some(track) = found.into_iter().next() {
        return Ok(Some(track));
    }

    let top = spotify::search::top_tracks(token, TOP_TRACKS_LIMIT).await?;
    Ok(top.into_iter().next())
}
