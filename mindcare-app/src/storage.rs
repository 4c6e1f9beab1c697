const TOKEN_KEY: &str = "mindcare_token";

fn parse_token(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

pub(crate) fn load_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(TOKEN_KEY).ok()??;
    parse_token(&raw)
}

pub(crate) fn save_token(token: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let storage = window
        .local_storage()
        .map_err(|_| "failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())?;

    storage
        .set_item(TOKEN_KEY, token)
        .map_err(|_| "failed to save token".to_string())
}

pub(crate) fn clear_token() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let storage = window
        .local_storage()
        .map_err(|_| "failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())?;

    storage
        .remove_item(TOKEN_KEY)
        .map_err(|_| "failed to clear token".to_string())
}
