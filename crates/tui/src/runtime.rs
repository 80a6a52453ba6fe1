//! Application runtime and event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use shoplist_core::ListStore;
use tracing::{debug, info};

use crate::App;
use crate::app::ListOutcome;

/// Construct an [`App`] around the store and run it to completion.
pub fn run(store: ListStore) -> Result<ListOutcome> {
	let mut app = App::new(store);
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user leaves the list.
	pub fn run(&mut self) -> Result<ListOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear().context("failed to clear the terminal")?;
		info!(items = self.state().len(), "list screen opened");

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<ListOutcome> = 'event_loop: loop {
			if let Err(err) = terminal
				.draw(|frame| self.draw(frame))
				.context("failed to draw the list screen")
			{
				break Err(err);
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(width, height)) => debug!(width, height, "terminal resized"),
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& let Some(outcome) = self.handle_key(key)
				{
					break 'event_loop Ok(outcome);
				}
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(outcome) = &result {
			info!(items = outcome.items.len(), "list screen closed");
		}
		result
	}
}
