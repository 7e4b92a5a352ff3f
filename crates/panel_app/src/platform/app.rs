use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use panel_core::{update, Msg, PanelPhase, PanelState, PanelViewModel};
use panel_engine::load_selected_file;
use panel_logging::{panel_info, panel_warn};

use super::effects::EffectRunner;
use super::input::{parse_line, InputCommand};
use super::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the panel state and routes input, effects and renders.
pub struct Panel<W: Write> {
    state: PanelState,
    runner: EffectRunner,
    surface: ui::render::TerminalSurface<W>,
}

impl<W: Write> Panel<W> {
    pub fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: PanelState::new(),
            runner,
            surface: ui::render::TerminalSurface::new(out),
        }
    }

    pub fn view(&self) -> PanelViewModel {
        self.state.view()
    }

    pub fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let rejected = self.runner.enqueue(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            let commands = ui::render::render(&self.state.view());
            self.surface.apply(&commands)?;
        }
        for msg in rejected {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    pub fn handle_input(&mut self, command: InputCommand) -> io::Result<Flow> {
        match command {
            InputCommand::SetImageUrl(value) => self.dispatch(Msg::ImageUrlChanged(value))?,
            InputCommand::SetOutputUrl(value) => self.dispatch(Msg::OutputUrlChanged(value))?,
            InputCommand::PickFile(path) => match load_selected_file(&path) {
                Ok(file) => self.dispatch(Msg::FileSelected(file))?,
                Err(err) => self.report_load_error(&err)?,
            },
            // Only the first dropped path is read; the rest are never held.
            InputCommand::DropFiles(paths) => {
                if let Some(path) = paths.first() {
                    match load_selected_file(path) {
                        Ok(file) => self.dispatch(Msg::FilesDropped(vec![file]))?,
                        Err(err) => self.report_load_error(&err)?,
                    }
                }
            }
            InputCommand::Submit => self.dispatch(Msg::SubmitClicked)?,
            InputCommand::Show => {
                let commands = ui::render::render(&self.state.view());
                self.surface.apply_all(&commands)?;
            }
            InputCommand::Help => {
                for line in ui::layout::surface_help() {
                    self.surface.note(&line)?;
                }
            }
            InputCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Wait up to `timeout` for engine completions and apply all that arrived.
    pub fn pump(&mut self, timeout: Duration) -> io::Result<()> {
        if let Some(msg) = self.runner.wait_next(timeout) {
            self.dispatch(msg)?;
        }
        while let Some(msg) = self.runner.try_next() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    /// Blocks until no submission is in flight. There is no timeout.
    pub fn wait_until_idle(&mut self) -> io::Result<()> {
        while self.state.phase() == PanelPhase::Submitting {
            self.pump(POLL_INTERVAL)?;
        }
        Ok(())
    }

    fn report_load_error(&mut self, err: &panel_engine::LoadError) -> io::Result<()> {
        panel_warn!("File selection failed: {}", err);
        self.surface.note(&format!("! {err}"))
    }
}

/// Interactive loop: stdin lines in, surface updates out.
///
/// On end of input the loop waits for in-flight submissions; `quit` does not.
pub fn run_interactive(runner: EffectRunner) -> anyhow::Result<()> {
    let mut panel = Panel::new(runner, io::stdout());
    for line in ui::layout::surface_help() {
        panel.surface.note(&line)?;
    }

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    loop {
        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match parse_line(&line) {
                Ok(Some(command)) => {
                    if panel.handle_input(command)? == Flow::Quit {
                        panel_info!("Quit requested");
                        panel.runner.stop();
                        return Ok(());
                    }
                }
                Ok(None) => {}
                Err(message) => panel.surface.note(&format!("? {message}"))?,
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
        panel.pump(Duration::ZERO)?;
    }

    panel.wait_until_idle()?;
    Ok(())
}
