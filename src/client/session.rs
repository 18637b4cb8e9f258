use std::fs;
use std::path::PathBuf;

fn token_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stayhub").join("token"))
}

pub fn load_token() -> Option<String> {
    let path = token_path()?;
    let raw = fs::read_to_string(path).ok()?;
    let token = raw.trim().to_string();
    (!token.is_empty()).then_some(token)
}

pub fn save_token(token: &str) {
    let Some(path) = token_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::write(path, token);
}

pub fn clear_token() {
    if let Some(path) = token_path() {
        let _ = fs::remove_file(path);
    }
}
