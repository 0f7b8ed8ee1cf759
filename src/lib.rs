pub mod dispatcher;
pub mod model;
pub mod web;

use std::collections::HashMap;
use std::sync::Mutex;

use tera::Tera;
use uuid::Uuid;

use dispatcher::IdeaDispatcher;
use model::GeminiClient;

// App state structure
pub struct AppState {
    pub tera: Tera,
    pub dispatcher: IdeaDispatcher<GeminiClient>,
    /// Per-session idea batches. Each generate action overwrites the
    /// session's batch wholesale; nothing survives the process.
    pub sessions: Mutex<HashMap<Uuid, Vec<String>>>,
}

impl AppState {
    pub fn new(tera: Tera, client: GeminiClient) -> Self {
        Self {
            tera,
            dispatcher: IdeaDispatcher::new(client),
            sessions: Mutex::new(HashMap::new()),
        }
    }
}
