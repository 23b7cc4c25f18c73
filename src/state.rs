use crate::activities::Directory;
use crate::config::AppConfig;

use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub directory: Arc<Mutex<Directory>>,
}
