use dioxus::prelude::*;

use quiz_core::model::Country;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{GameIntent, GamePhase, GameVm, flag_glyph, format_elapsed, map_result_feedback};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let game_loop = ctx.game_loop();

    let error = use_signal(|| None::<ViewError>);
    let vm = {
        let game_loop = game_loop.clone();
        use_signal(move || GameVm::start(&game_loop))
    };

    let dispatch_intent = {
        let game_loop = game_loop.clone();
        use_callback(move |intent: GameIntent| {
            let mut error = error;
            let mut vm = vm;

            match intent {
                GameIntent::Tap(choice) => {
                    let delay_ms = u64::from(game_loop.settings().reveal_delay_ms());
                    let tapped = {
                        let mut guard = vm.write();
                        match guard.as_mut() {
                            Ok(value) => value.tap(&game_loop, choice),
                            Err(_) => Ok(None),
                        }
                    };
                    match tapped {
                        Ok(Some(epoch)) => {
                            error.set(None);
                            spawn(async move {
                                tokio::time::sleep(std::time::Duration::from_millis(delay_ms))
                                    .await;
                                if let Ok(value) = vm.write().as_mut() {
                                    value.reveal(epoch);
                                }
                            });
                        }
                        Ok(None) => {}
                        Err(err) => error.set(Some(err)),
                    }
                }
                GameIntent::Continue => {
                    let advanced = match vm.write().as_mut() {
                        Ok(value) => value.advance(&game_loop),
                        Err(_) => Ok(()),
                    };
                    match advanced {
                        Ok(()) => error.set(None),
                        Err(err) => error.set(Some(err)),
                    }
                }
                GameIntent::Reset => {
                    let reset = match vm.write().as_mut() {
                        Ok(value) => value.reset_game(&game_loop),
                        Err(_) => Ok(()),
                    };
                    match reset {
                        Ok(()) => error.set(None),
                        Err(err) => error.set(Some(err)),
                    }
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_retry = {
        let game_loop = game_loop.clone();
        use_callback(move |()| {
            let mut vm = vm;
            vm.set(GameVm::start(&game_loop));
        })
    };

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let key = evt.data.key().to_string();
        match key.as_str() {
            "1" | "2" | "3" => {
                evt.prevent_default();
                let choice = match key.as_str() {
                    "1" => 0,
                    "2" => 1,
                    _ => 2,
                };
                dispatch_intent.call(GameIntent::Tap(choice));
            }
            "Enter" => {
                let can_continue = vm.read().as_ref().is_ok_and(|value| {
                    matches!(value.phase(), GamePhase::Reveal { .. }) && !value.is_over()
                });
                if can_continue {
                    evt.prevent_default();
                    dispatch_intent.call(GameIntent::Continue);
                }
            }
            "Escape" => {
                evt.prevent_default();
                dispatch_intent.call(GameIntent::Reset);
            }
            _ => {}
        }
    });

    let vm_guard = vm.read();
    let body = match vm_guard.as_ref() {
        Err(err) => rsx! {
            div { class: "game-error-panel",
                p { "{err.message()}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        },
        Ok(value) => {
            let options = value.options();
            let target = value.target();
            let picked = value.picked();
            let score_label = format!("Score: {}", value.score());
            let turns_label = format!("Turns left: {}", value.turns_remaining());
            let panel = matches!(value.phase(), GamePhase::Reveal { .. })
                .then(|| value.report().map(map_result_feedback))
                .flatten();
            let game_over_stats = value.game_over_summary(&game_loop).map(|summary| {
                (
                    format!("Correct: {} · Wrong: {}", summary.correct(), summary.wrong()),
                    format!("Time: {}", format_elapsed(summary.elapsed())),
                )
            });

            rsx! {
                header { class: "game-header",
                    h1 { class: "game-title", "Fun with Flags" }
                    p { class: "game-prompt",
                        "Tap the flag of "
                        span { class: "game-target", "{target}" }
                    }
                }
                div { class: "game-board",
                    for (index, country) in options.into_iter().enumerate() {
                        FlagButton {
                            index,
                            country,
                            picked,
                            on_intent: dispatch_intent,
                        }
                    }
                }
                footer { class: "game-footer",
                    span { class: "game-footer__item", "{score_label}" }
                    span { class: "game-footer__item", "{turns_label}" }
                }
                if let Some(err) = *error.read() {
                    p { class: "game-error", "{err.message()}" }
                }
                if let Some(feedback) = panel {
                    div { class: "game-overlay",
                        div {
                            class: "game-modal",
                            role: "dialog",
                            aria_modal: "true",
                            aria_labelledby: "game-modal-title",
                            h2 { class: "game-modal__title", id: "game-modal-title", "{feedback.title}" }
                            if let Some(note) = feedback.game_over_note.as_deref() {
                                p { class: "game-modal__note", "{note}" }
                            }
                            div { class: "game-modal__body",
                                for line in feedback.body_lines.iter() {
                                    p { "{line}" }
                                }
                                if let Some((counts_line, time_line)) = game_over_stats.as_ref() {
                                    p { class: "game-modal__stats", "{counts_line}" }
                                    p { class: "game-modal__stats", "{time_line}" }
                                }
                            }
                            div { class: "game-modal__actions",
                                if feedback.show_continue {
                                    button {
                                        class: "btn btn-primary",
                                        id: "game-continue",
                                        r#type: "button",
                                        onclick: move |_| dispatch_intent.call(GameIntent::Continue),
                                        "Continue"
                                    }
                                }
                                button {
                                    class: "btn btn-danger",
                                    id: "game-reset",
                                    r#type: "button",
                                    onclick: move |_| dispatch_intent.call(GameIntent::Reset),
                                    "Reset Game"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page game-page", id: "game-root", tabindex: "0", onkeydown: on_key,
            {body}
        }
    }
}

#[component]
fn FlagButton(
    index: usize,
    country: Country,
    picked: Option<usize>,
    on_intent: EventHandler<GameIntent>,
) -> Element {
    let selected = picked == Some(index);
    let dimmed = picked.is_some() && !selected;
    let class = if selected {
        "flag-btn flag-btn--selected"
    } else if dimmed {
        "flag-btn flag-btn--dimmed"
    } else {
        "flag-btn"
    };
    let slot = index + 1;
    let glyph = flag_glyph(country);
    let name = country.name();

    rsx! {
        button {
            class: "{class}",
            id: "flag-option-{slot}",
            r#type: "button",
            aria_label: "{name}",
            onclick: move |_| on_intent.call(GameIntent::Tap(index)),
            span { class: "flag-btn__glyph", "{glyph}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Result<GameVm, ViewError>>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<GameIntent>,
        vm: Signal<Result<GameVm, ViewError>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Result<GameVm, ViewError>> {
        (*self.vm.borrow()).expect("game vm registered")
    }
}
