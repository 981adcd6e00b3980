use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::GameSettings;
use quiz_core::time::fixed_clock;
use services::GameLoopService;

use super::game::GameTestHandles;
use crate::context::{UiApp, build_app_context};
use crate::views::GameView;
use crate::vm::{GameIntent, GamePhase, GameVm};

#[derive(Clone)]
struct TestApp {
    game_loop: Arc<GameLoopService>,
}

impl UiApp for TestApp {
    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: GameTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn GameViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { GameView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: GameTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dispatch(&mut self, intent: GameIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn phase(&self) -> Option<GamePhase> {
        let vm = self.handles.vm();
        self.dom
            .in_runtime(|| vm.read().as_ref().ok().map(GameVm::phase))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness around a real `GameView` with a seeded, zero-delay game so the
/// reveal timer resolves on the next drive.
pub fn setup_view_harness(seed: u64) -> ViewHarness {
    let settings = GameSettings::classic()
        .with_reveal_delay_ms(0)
        .expect("zero reveal delay is valid");
    let game_loop = Arc::new(GameLoopService::new(fixed_clock(), settings).with_seed(seed));
    let handles = GameTestHandles::default();

    let app = Arc::new(TestApp { game_loop });
    let dom = VirtualDom::new_with_props(
        GameViewHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
