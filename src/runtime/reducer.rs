use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::state::AppState;
use crate::terminal::KeyCode;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, command: Command) -> Vec<Effect> {
        match command {
            Command::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Command::Submit => submit(state),
            Command::NextFocus => {
                state.focus_next();
                vec![Effect::RequestRender]
            }
            Command::PrevFocus => {
                state.focus_prev();
                vec![Effect::RequestRender]
            }
            Command::InputKey(key) => {
                let result = state.dispatch_key_to_focused(key);
                if result.submit_requested {
                    return submit(state);
                }
                if result.handled {
                    return vec![Effect::RequestRender];
                }
                // Up/Down move between fields unless the widget used them.
                match key.code {
                    KeyCode::Down => Self::reduce(state, Command::NextFocus),
                    KeyCode::Up => Self::reduce(state, Command::PrevFocus),
                    _ => vec![],
                }
            }
            Command::Tick => vec![],
        }
    }
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    match state.submit() {
        Some(data) => vec![Effect::Submit(data), Effect::RequestRender],
        None => vec![Effect::RequestRender],
    }
}
