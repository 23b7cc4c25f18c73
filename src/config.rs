use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub activities_file: Option<PathBuf>,
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            activities_file: None,
        }
    }
}
