use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::state::app_state::AppState;
use crate::widgets::traits::InteractionResult;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, command: Command) -> Vec<Effect> {
        if state.has_alert() {
            return match command {
                Command::Exit => {
                    state.request_exit();
                    vec![Effect::RequestRender]
                }
                Command::Tick | Command::Noop => vec![],
                // The alert swallows whatever key dismissed it.
                _ => {
                    state.dismiss_alert();
                    vec![Effect::RequestRender]
                }
            };
        }

        match command {
            Command::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Command::Next => {
                state.handle_next();
                vec![Effect::RequestRender]
            }
            Command::Previous => {
                state.handle_previous();
                vec![Effect::RequestRender]
            }
            Command::Submit => {
                state.handle_submit();
                vec![Effect::RequestRender]
            }
            Command::NextFocus => {
                state.focus_next();
                vec![Effect::RequestRender]
            }
            Command::PrevFocus => {
                state.focus_prev();
                vec![Effect::RequestRender]
            }
            Command::InputKey(key) => collect_effects(state.dispatch_key_to_focused(key)),
            Command::TextAction(action) => {
                collect_effects(state.dispatch_text_action_to_focused(action))
            }
            Command::Tick | Command::Noop => vec![],
        }
    }
}

fn collect_effects(result: InteractionResult) -> Vec<Effect> {
    let mut effects: Vec<Effect> = result.actions.into_iter().map(Effect::Action).collect();
    if result.request_render {
        effects.push(Effect::RequestRender);
    }
    effects
}
