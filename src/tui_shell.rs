//! Interactive three-pane shell: description top-left, test/submission
//! result bottom-left, code in a full-height right column.

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::actions::{self, SolutionAction};
use crate::flows;
use crate::panes::Pane;
use crate::remote::RemoteClient;
use crate::session::Session;
use crate::store::ClientStore;
use crate::tool::ToolRunner;
use crate::workspace::ExerciseCache;

mod picker;
use picker::{Picker, PickerKind};

mod shell_panes;
use shell_panes::PaneShell;

mod view;

pub fn run() -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("the praxis shell requires an interactive terminal (TTY)");
    }

    let mut app = App::load()?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

struct App {
    session: Session,
    cache: ExerciseCache,
    remote: RemoteClient,
    panes: PaneShell,
    focus: Pane,
    picker: Option<Picker>,
    status: String,
    quit: bool,
}

impl App {
    fn load() -> Result<Self> {
        let store = ClientStore::open(ClientStore::default_dir()?);
        let settings = store.read_settings()?;
        let remote = RemoteClient::new(settings.api_base_url(), Some(settings.token.clone()))?;
        let cache = ExerciseCache::new(
            settings.workspace.clone(),
            ToolRunner::new(settings.tool_program()),
        );
        let session = Session::load(store, settings.workspace.clone())?;

        let mut panes = PaneShell::new();
        // The shell always establishes the fixed frame before first use.
        panes.layout();

        let status = match session.track() {
            Some(track) => format!("track: {track} (press E to pick an exercise)"),
            None => "no track selected (press T to pick one)".to_string(),
        };

        Ok(Self {
            session,
            cache,
            remote,
            panes,
            focus: Pane::Code,
            picker: None,
            status,
            quit: false,
        })
    }

    fn report(&mut self, result: crate::Result<impl Into<String>>) {
        match result {
            Ok(msg) => self.status = msg.into(),
            Err(err) => self.status = format!("error: {err}"),
        }
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| view::render(frame, app))?;

        if !event::poll(Duration::from_millis(250)).context("poll events")? {
            continue;
        }
        if let Event::Key(key) = event::read().context("read event")? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
        if app.quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit = true;
        return;
    }

    if app.picker.is_some() {
        picker::handle_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('T') => open_track_picker(app),
        KeyCode::Char('E') => open_exercise_picker(app),
        KeyCode::Char('o') => {
            let res = flows::open_current(&app.session, &app.cache, &mut app.panes);
            app.report(res.map(|()| "opened exercise".to_string()));
        }
        KeyCode::Char('v') => {
            let res = flows::show_tests(&app.session, &app.cache, &mut app.panes);
            app.report(res.map(|()| "showing tests".to_string()));
        }
        KeyCode::Char('t') => {
            app.status = "running tests...".to_string();
            let res = flows::run_tests(&app.session, &app.cache, &mut app.panes);
            app.report(res.map(|()| "tests finished".to_string()));
        }
        KeyCode::Char('s') => {
            app.status = "submitting...".to_string();
            let res = flows::submit(&app.session, &app.cache, &mut app.panes);
            app.report(res.map(|()| "submitted".to_string()));
        }
        KeyCode::Char('c') => run_action(app, SolutionAction::Complete),
        KeyCode::Char('p') => run_action(app, SolutionAction::Publish),
        KeyCode::Char('u') => run_action(app, SolutionAction::Unpublish),
        KeyCode::Tab => app.focus = next_pane(app.focus),
        KeyCode::Up => app.panes.scroll(app.focus, -1),
        KeyCode::Down => app.panes.scroll(app.focus, 1),
        KeyCode::PageUp => app.panes.scroll(app.focus, -10),
        KeyCode::PageDown => app.panes.scroll(app.focus, 10),
        _ => {}
    }
}

fn next_pane(pane: Pane) -> Pane {
    match pane {
        Pane::Description => Pane::Result,
        Pane::Result => Pane::Code,
        Pane::Code => Pane::Description,
    }
}

fn run_action(app: &mut App, action: SolutionAction) {
    let res = actions::dispatch(&app.session, &app.remote, action);
    app.report(res);
}

fn open_track_picker(app: &mut App) {
    match app.remote.list_tracks() {
        Ok(tracks) => {
            app.picker = Some(Picker::tracks(tracks));
        }
        Err(err) => app.status = format!("error: {err}"),
    }
}

fn open_exercise_picker(app: &mut App) {
    let track = match app.session.require_track() {
        Ok(track) => track.to_string(),
        Err(err) => {
            app.status = format!("error: {err}");
            return;
        }
    };
    match app.remote.list_exercises(&track) {
        Ok(exercises) => {
            app.picker = Some(Picker::exercises(&track, exercises));
        }
        Err(err) => app.status = format!("error: {err}"),
    }
}

/// Shared by the picker: completes a selection and reports the outcome.
/// Selection failures leave the session where it was; the status line
/// carries the error and the shell stays up.
fn apply_selection(app: &mut App, kind: PickerKind, slug: &str) {
    match kind {
        PickerKind::Track => {
            let res = flows::choose_track(&mut app.session, &app.cache, slug);
            app.report(res.map(|()| format!("track set to {slug} (press E to pick an exercise)")));
        }
        PickerKind::Exercise => {
            match flows::choose_exercise(&mut app.session, &app.cache, slug) {
                Ok(_) => {
                    let res: crate::Result<()> =
                        flows::open_current(&app.session, &app.cache, &mut app.panes);
                    app.report(res.map(|()| {
                        format!("exercise set to {slug}; t=test s=submit c=complete p=publish")
                    }));
                }
                Err(err) => app.status = format!("error: {err}"),
            }
        }
    }
}
