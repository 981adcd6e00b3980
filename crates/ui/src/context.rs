use std::sync::Arc;

use services::GameLoopService;

pub trait UiApp: Send + Sync {
    fn game_loop(&self) -> Arc<GameLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    game_loop: Arc<GameLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let game_loop = app.game_loop();

        Self { game_loop }
    }

    #[must_use]
    pub fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
