use std::io::{stdout, Stdout};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use reno_core::{update, AppState, FileHandle, Msg, StepId};
use reno_engine::{scan_media_dir, MediaFile};
use reno_logging::{reno_info, reno_warn};

use crate::effects::EffectRunner;
use crate::ui::{self, Focus, UiContext};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run(media_dir: &Path) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    stdout()
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    install_panic_hook();

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut app = App::new(media_dir);
    let result = app.run_loop(&mut terminal);

    restore_terminal();
    result
}

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        original(info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

struct App {
    state: AppState,
    /// Shell-side edit buffer; the core receives full replacements.
    prompt_draft: String,
    media_dir: PathBuf,
    browser_files: Vec<MediaFile>,
    browser_index: usize,
    selection_index: usize,
    focus: Focus,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    needs_render: bool,
    should_quit: bool,
}

impl App {
    fn new(media_dir: &Path) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(msg_tx);

        let browser_files = match scan_media_dir(media_dir) {
            Ok(files) => {
                reno_info!(
                    "media browser loaded {} file(s) from {}",
                    files.len(),
                    media_dir.display()
                );
                files
            }
            Err(err) => {
                // An empty browser is fine; the wizard itself still works.
                reno_warn!("media scan failed for {}: {err}", media_dir.display());
                Vec::new()
            }
        };

        Self {
            state: AppState::new(),
            prompt_draft: String::new(),
            media_dir: media_dir.to_path_buf(),
            browser_files,
            browser_index: 0,
            selection_index: 0,
            focus: Focus::Prompt,
            runner,
            msg_rx,
            needs_render: true,
            should_quit: false,
        }
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            if self.needs_render {
                let view = self.state.view();
                let ctx = UiContext {
                    focus: self.focus,
                    media_dir: &self.media_dir,
                    browser: &self.browser_files,
                    browser_index: self.browser_index,
                    selection_index: self.selection_index,
                };
                terminal.draw(|frame| ui::render::draw(frame, &view, &ctx))?;
                self.needs_render = false;
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => self.needs_render = true,
                    _ => {}
                }
            }

            self.drain_messages();
        }

        self.runner.shutdown();
        Ok(())
    }

    /// Applies engine-originated messages queued since the last pass.
    fn drain_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_render = true;
        }
        self.state = state;
        self.runner.enqueue(effects);
        self.clamp_cursors();
    }

    fn clamp_cursors(&mut self) {
        let selected = self.state.view().files.len();
        if self.selection_index >= selected {
            self.selection_index = selected.saturating_sub(1);
        }
        if self.browser_index >= self.browser_files.len() {
            self.browser_index = self.browser_files.len().saturating_sub(1);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // The analysis overlay swallows all input until the timer fires.
        if self.state.is_analyzing() {
            return;
        }
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.state.step() {
            StepId::Upload => self.handle_upload_key(key),
            _ => self.handle_nav_key(key),
        }
    }

    /// Steps 2 through 5: pure navigation plus selection edits on Confirm.
    fn handle_nav_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Right | KeyCode::Enter => self.dispatch(Msg::NextPressed),
            KeyCode::Char('b') | KeyCode::Left => self.dispatch(Msg::BackPressed),
            KeyCode::Up | KeyCode::Char('k') if self.state.step() == StepId::Confirm => {
                self.selection_index = self.selection_index.saturating_sub(1);
                self.needs_render = true;
            }
            KeyCode::Down | KeyCode::Char('j') if self.state.step() == StepId::Confirm => {
                let len = self.state.view().files.len();
                if self.selection_index + 1 < len {
                    self.selection_index += 1;
                    self.needs_render = true;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete if self.state.step() == StepId::Confirm => {
                self.remove_selected();
            }
            _ => {}
        }
    }

    /// Step 1: focus cycles between the prompt, the browser and the
    /// selection; printable keys only reach the prompt when it has focus.
    fn handle_upload_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Tab {
            self.focus = self.focus.next();
            self.needs_render = true;
            return;
        }

        match self.focus {
            Focus::Prompt => match key.code {
                KeyCode::Char(ch) => {
                    self.prompt_draft.push(ch);
                    let draft = self.prompt_draft.clone();
                    self.dispatch(Msg::PromptChanged(draft));
                }
                KeyCode::Backspace => {
                    self.prompt_draft.pop();
                    let draft = self.prompt_draft.clone();
                    self.dispatch(Msg::PromptChanged(draft));
                }
                KeyCode::Enter => {
                    self.focus = Focus::Browser;
                    self.needs_render = true;
                }
                _ => {}
            },
            Focus::Browser => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.browser_index = self.browser_index.saturating_sub(1);
                    self.needs_render = true;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.browser_index + 1 < self.browser_files.len() {
                        self.browser_index += 1;
                        self.needs_render = true;
                    }
                }
                KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char(' ') => self.add_highlighted(),
                KeyCode::Char('r') => self.rescan_media(),
                KeyCode::Char('n') => self.dispatch(Msg::NextPressed),
                _ => {}
            },
            Focus::Selection => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selection_index = self.selection_index.saturating_sub(1);
                    self.needs_render = true;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let len = self.state.view().files.len();
                    if self.selection_index + 1 < len {
                        self.selection_index += 1;
                        self.needs_render = true;
                    }
                }
                KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
                    self.remove_selected();
                }
                KeyCode::Char('n') => self.dispatch(Msg::NextPressed),
                _ => {}
            },
        }
    }

    fn add_highlighted(&mut self) {
        let Some(file) = self.browser_files.get(self.browser_index) else {
            return;
        };
        let handle = FileHandle {
            path: file.path.clone(),
            display_name: file.display_name.clone(),
            size_bytes: file.size_bytes,
        };
        self.dispatch(Msg::FilesAdded(vec![handle]));
    }

    fn remove_selected(&mut self) {
        if self.state.view().files.is_empty() {
            return;
        }
        let index = self.selection_index;
        self.dispatch(Msg::FileRemoved { index });
    }

    fn rescan_media(&mut self) {
        match scan_media_dir(&self.media_dir) {
            Ok(files) => {
                reno_info!("media browser rescanned, {} file(s)", files.len());
                self.browser_files = files;
            }
            Err(err) => {
                reno_warn!("media rescan failed: {err}");
                self.browser_files = Vec::new();
            }
        }
        self.clamp_cursors();
        self.needs_render = true;
    }
}
