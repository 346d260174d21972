use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use showcase_core::{update, Msg, Post, ShowcaseState};
use showcase_logging::{showcase_debug, showcase_info};

use super::cli::AppOptions;
use super::effects::EffectRunner;
use super::ui;
use super::ui::input::{parse_command, Command};
use super::ui::layout::Viewport;
use super::ui::render::Frame;

/// Input delivered by the stdin reader thread.
#[derive(Debug)]
pub enum HostEvent {
    Line(String),
    InputClosed,
}

pub fn run_app(posts: Vec<Post>, options: &AppOptions) -> anyhow::Result<()> {
    let source: Arc<[Post]> = posts.into();
    let (event_tx, event_rx) = mpsc::channel::<HostEvent>();

    let (state, effects) = ShowcaseState::new(source, options.view, options.support)?;
    let mut host = Host::new(options.viewport_rows);
    let mut out = io::stdout().lock();

    spawn_input_reader(event_tx);
    host.run_effects(effects);

    let state = host.event_loop(state, &event_rx, &mut out)?;

    let (_state, effects) = update(state, Msg::Teardown);
    host.run_effects(effects);
    showcase_info!(
        "Showcase closed (anchor observer active: {})",
        host.runner.observer_mut().is_observing()
    );
    Ok(())
}

fn spawn_input_reader(events: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if events.send(HostEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = events.send(HostEvent::InputClosed);
    });
}

struct Host {
    /// Presentation feedback (anchor mounting and visibility), handled
    /// before the next input line.
    pending: VecDeque<Msg>,
    runner: EffectRunner,
    viewport: Viewport,
    frame: Frame,
    /// Row of the anchor as last reported to the core.
    anchor_row: Option<usize>,
    notices: Vec<String>,
    needs_paint: bool,
}

impl Host {
    fn new(viewport_rows: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            runner: EffectRunner::new(),
            viewport: Viewport::new(viewport_rows),
            frame: Frame::default(),
            anchor_row: None,
            notices: Vec::new(),
            needs_paint: true,
        }
    }

    fn event_loop(
        &mut self,
        mut state: ShowcaseState,
        inbox: &mpsc::Receiver<HostEvent>,
        out: &mut impl Write,
    ) -> anyhow::Result<ShowcaseState> {
        self.refresh(&mut state, out)?;
        loop {
            let msg = match self.pending.pop_front() {
                Some(msg) => msg,
                None => match inbox.recv() {
                    Ok(HostEvent::Line(line)) => match parse_command(&line) {
                        Command::Msg(msg) => msg,
                        Command::Quit => break,
                        other => {
                            self.handle_local(other, out)?;
                            Msg::NoOp
                        }
                    },
                    Ok(HostEvent::InputClosed) | Err(_) => break,
                },
            };
            state = self.dispatch(state, msg);
            self.refresh(&mut state, out)?;
        }
        Ok(state)
    }

    fn dispatch(&mut self, state: ShowcaseState, msg: Msg) -> ShowcaseState {
        showcase_debug!("Dispatch {:?}", msg);
        let (state, effects) = update(state, msg);
        self.run_effects(effects);
        state
    }

    fn run_effects(&mut self, effects: Vec<showcase_core::Effect>) {
        let notices = self.runner.run(effects);
        if !notices.is_empty() {
            self.needs_paint = true;
        }
        self.notices.extend(notices);
    }

    /// Commands that only move the viewport or print help.
    fn handle_local(&mut self, command: Command, out: &mut impl Write) -> io::Result<()> {
        match command {
            Command::Down(rows) => self.viewport.scroll_down(rows, &self.frame),
            Command::Up(rows) => self.viewport.scroll_up(rows),
            Command::Top => self.viewport.scroll_to_top(),
            Command::Help => writeln!(out, "{}", ui::constants::HELP_TEXT)?,
            Command::Unknown(line) => {
                self.notices.push(format!("unknown command {line:?}, try \"help\""));
            }
            Command::Msg(_) | Command::Quit => {}
        }
        self.needs_paint = true;
        Ok(())
    }

    /// Re-renders when needed, then queues anchor mounting and visibility
    /// feedback for the current frame.
    fn refresh(&mut self, state: &mut ShowcaseState, out: &mut impl Write) -> io::Result<()> {
        if state.consume_dirty() {
            self.frame = ui::render::render(&state.view());
            self.viewport.clamp(&self.frame);
            self.needs_paint = true;
        }
        if std::mem::take(&mut self.needs_paint) {
            self.paint(out)?;
        }

        // An anchor pushed to a new row by a re-render is a fresh element, so
        // a page that still leaves it on screen starts a new observation.
        match (self.anchor_row, self.frame.anchor_row) {
            (None, Some(_)) => self.pending.push_back(Msg::AnchorAttached),
            (Some(_), None) => self.pending.push_back(Msg::AnchorDetached),
            (Some(before), Some(now)) if before != now => {
                self.pending.push_back(Msg::AnchorDetached);
                self.pending.push_back(Msg::AnchorAttached);
            }
            _ => {}
        }
        self.anchor_row = self.frame.anchor_row;
        let visibility = self.viewport.anchor_visibility(&self.frame);
        if let Some(report) = self.runner.observer_mut().on_layout(visibility) {
            self.pending.push_back(report);
        }
        Ok(())
    }

    fn paint(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", "-".repeat(60))?;
        for line in self.viewport.window(&self.frame) {
            writeln!(out, "{line}")?;
        }
        let shown = self.viewport.window(&self.frame).len();
        writeln!(
            out,
            "-- rows {}-{} of {} --",
            self.viewport.top() + usize::from(shown > 0),
            self.viewport.top() + shown,
            self.frame.len()
        )?;
        for notice in self.notices.drain(..) {
            writeln!(out, "! {notice}")?;
        }
        out.flush()
    }
}
