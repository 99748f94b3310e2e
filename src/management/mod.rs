mod auth;
mod generate;

pub use auth::TokenManager;
pub use generate::{
    GENRE_SEARCH_LIMIT, GeneratePhase, GenerateRequest, GenerateOutcome, TOP_TRACKS_LIMIT, generate,
};
