use crate::models::AppData;
use crate::storage::{load_data, resolve_data_path};
use std::{path::PathBuf, sync::Arc};
use tokio::{fs, sync::Mutex};

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    /// Resolves the data path, prepares its directory and loads the
    /// persisted snapshot.
    pub async fn init() -> Result<Self, std::io::Error> {
        let data_path = resolve_data_path();
        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let data = load_data(&data_path).await;
        Ok(Self::new(data_path, data))
    }
}
