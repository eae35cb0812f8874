use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::state::AppState;
use crate::submit::{SubmitExecutor, Submitter};
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    submitter: Submitter,
    executor: SubmitExecutor,
    key_bindings: KeyBindings,
    renderer: Renderer,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal, submitter: Submitter) -> Self {
        Self {
            state,
            terminal,
            submitter,
            executor: SubmitExecutor::new(),
            key_bindings: KeyBindings::new(),
            renderer: Renderer::default(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;

            while !self.state.should_exit() {
                self.process_completions()?;
                let event = self.terminal.poll_event(POLL_INTERVAL)?;
                self.dispatch_terminal_event(event)?;
            }

            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn process_completions(&mut self) -> io::Result<()> {
        let mut render_requested = false;
        for completion in self.executor.drain_ready() {
            log::debug!(
                "submission run {} completed: {}",
                completion.run_id,
                completion.outcome.kind()
            );
            render_requested |= self.state.apply_outcome(completion.outcome);
        }
        if render_requested {
            self.render()?;
        }
        Ok(())
    }

    fn dispatch_terminal_event(&mut self, event: TerminalEvent) -> io::Result<()> {
        match event {
            TerminalEvent::Resize(size) => {
                self.terminal.set_size(size);
                self.render()
            }
            TerminalEvent::Key(key) => {
                let command = self
                    .key_bindings
                    .resolve(key)
                    .unwrap_or(Command::InputKey(key));
                self.process_command(command)
            }
            TerminalEvent::Tick => self.process_command(Command::Tick),
        }
    }

    fn process_command(&mut self, command: Command) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, command);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::Submit(data) => {
                    let submitter = self.submitter.clone();
                    let run_id = self.executor.spawn(move || submitter.submit(&data));
                    log::debug!("submission run {run_id} started");
                }
                Effect::RequestRender => {
                    render_requested = true;
                }
            }
        }

        if render_requested {
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.renderer.render(&self.state, self.terminal.size());
        self.terminal.render(&frame.lines, frame.cursor)
    }
}
