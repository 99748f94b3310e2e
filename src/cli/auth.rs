use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{info, management::TokenManager, spotify, types::PkceToken};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    spotify::auth::auth(shared_state).await;

    if let Ok(mut token_mgr) = TokenManager::load().await {
        let token = token_mgr.get_valid_token().await;
        if let Ok(user) = spotify::user::current_user(&token).await {
            info!("Authenticated as {}", user.display_name.unwrap_or(user.id));
        }
    }
}
