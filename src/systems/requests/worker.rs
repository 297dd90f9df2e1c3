use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::thread;

use leetex_core::{Action, ProblemService, RequestId};

use super::commands::RequestCommand;

/// Dispatcher for one kind of request.
///
/// Every command runs on its own thread as soon as it is sent, so a new
/// request never waits for an older one of the same kind to finish. Both
/// responses are forwarded; the explorer decides which one is stale.
pub(crate) struct Lane {
	name: &'static str,
	service: Arc<dyn ProblemService>,
	result_tx: Sender<Action>,
	latest_id: Arc<AtomicU64>,
	closed: Arc<AtomicBool>,
}

impl Lane {
	pub(crate) fn new(
		name: &'static str,
		service: Arc<dyn ProblemService>,
		result_tx: Sender<Action>,
	) -> Self {
		Self {
			name,
			service,
			result_tx,
			latest_id: Arc::new(AtomicU64::new(0)),
			closed: Arc::new(AtomicBool::new(false)),
		}
	}

	/// Start `command`, marking it as the newest request on this lane.
	pub(crate) fn send(&self, command: RequestCommand) {
		self.latest_id.store(command.id().get(), Ordering::Release);
		self.spawn(command);
	}

	/// Stop starting commands. Calls already in flight run to completion.
	pub(crate) fn shutdown(&self) {
		self.closed.store(true, Ordering::Release);
	}

	fn spawn(&self, command: RequestCommand) {
		let name = self.name;
		let service = Arc::clone(&self.service);
		let result_tx = self.result_tx.clone();
		let latest_id = Arc::clone(&self.latest_id);
		let closed = Arc::clone(&self.closed);

		let spawned = thread::Builder::new()
			.name(format!("leetex-{name}"))
			.spawn(move || {
				if closed.load(Ordering::Acquire) {
					return;
				}
				run_command(name, service.as_ref(), &result_tx, &latest_id, command);
			});
		if let Err(err) = spawned {
			tracing::warn!(lane = name, error = %err, "failed to start request thread");
		}
	}
}

fn run_command(
	name: &'static str,
	service: &dyn ProblemService,
	result_tx: &Sender<Action>,
	latest_id: &AtomicU64,
	command: RequestCommand,
) {
	let id = command.id();
	if is_superseded(id, latest_id) {
		tracing::debug!(lane = name, request = id.get(), "skipping superseded request");
		return;
	}

	let action = match command {
		RequestCommand::Search { id, query, offset } => Action::SearchCompleted {
			id,
			result: service.search(&query, offset),
		},
		RequestCommand::Generate { id, problem_id } => Action::GenerationCompleted {
			id,
			result: service.generate(problem_id),
		},
	};
	if result_tx.send(action).is_err() {
		tracing::debug!(lane = name, request = id.get(), "explorer is gone; dropping response");
	}
}

/// A command is superseded when a newer one was sent before it started.
fn is_superseded(id: RequestId, latest_id: &AtomicU64) -> bool {
	id.get() != latest_id.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::sync::mpsc::{self, Receiver};
	use std::time::Duration;

	use leetex_core::{Difficulty, Problem, RequestError};

	use super::*;

	/// Records every call. The first generation blocks until `release`
	/// fires; `started` reports each generation as it begins.
	#[derive(Default)]
	struct FakeService {
		searches: Mutex<Vec<(String, usize)>>,
		release: Mutex<Option<Receiver<()>>>,
		started: Mutex<Option<Sender<u64>>>,
	}

	impl ProblemService for FakeService {
		fn search(&self, query: &str, offset: usize) -> Result<Vec<Problem>, RequestError> {
			self.searches
				.lock()
				.expect("lock")
				.push((query.to_string(), offset));
			Ok(vec![Problem::new(1, query, Difficulty::Easy)])
		}

		fn generate(&self, problem_id: u64) -> Result<String, RequestError> {
			let release = self.release.lock().expect("lock").take();
			if let Some(started) = self.started.lock().expect("lock").as_ref() {
				let _ = started.send(problem_id);
			}
			if let Some(release) = release {
				let _ = release.recv();
			}
			Err(RequestError::NotFound(format!("nothing for {problem_id}")))
		}
	}

	fn generation_id(action: &Action) -> Option<RequestId> {
		match action {
			Action::GenerationCompleted { id, .. } => Some(*id),
			_ => None,
		}
	}

	#[test]
	fn completed_search_is_forwarded() {
		let service = Arc::new(FakeService::default());
		let (result_tx, result_rx) = mpsc::channel();
		let lane = Lane::new("search", service, result_tx);
		lane.send(RequestCommand::Search {
			id: RequestId::new(1),
			query: "graph".into(),
			offset: 0,
		});

		let action = result_rx
			.recv_timeout(Duration::from_secs(1))
			.expect("search result");
		assert!(matches!(
			action,
			Action::SearchCompleted { id, result: Ok(ref problems) }
				if id == RequestId::new(1) && problems.len() == 1
		));
		lane.shutdown();
	}

	#[test]
	fn superseded_commands_are_skipped() {
		let service = Arc::new(FakeService::default());
		let (result_tx, result_rx) = mpsc::channel();
		let lane = Lane::new("search", Arc::clone(&service) as Arc<dyn ProblemService>, result_tx);

		// A newer request was issued before the older one started.
		lane.latest_id.store(2, Ordering::Release);
		lane.spawn(RequestCommand::Search {
			id: RequestId::new(1),
			query: "old".into(),
			offset: 0,
		});
		assert!(result_rx.recv_timeout(Duration::from_millis(100)).is_err());

		lane.send(RequestCommand::Search {
			id: RequestId::new(2),
			query: "new".into(),
			offset: 10,
		});
		let action = result_rx
			.recv_timeout(Duration::from_secs(1))
			.expect("search result");
		assert!(matches!(action, Action::SearchCompleted { id, .. } if id == RequestId::new(2)));
		assert_eq!(
			*service.searches.lock().expect("lock"),
			vec![("new".to_string(), 10)]
		);
	}

	#[test]
	fn second_generation_starts_while_the_first_is_in_flight() {
		let (release_tx, release_rx) = mpsc::channel();
		let (started_tx, started_rx) = mpsc::channel();
		let service: Arc<dyn ProblemService> = Arc::new(FakeService {
			release: Mutex::new(Some(release_rx)),
			started: Mutex::new(Some(started_tx)),
			..FakeService::default()
		});
		let (result_tx, result_rx) = mpsc::channel();
		let lane = Lane::new("generation", service, result_tx);

		lane.send(RequestCommand::Generate {
			id: RequestId::new(1),
			problem_id: 261,
		});
		assert_eq!(started_rx.recv_timeout(Duration::from_secs(1)), Ok(261));

		lane.send(RequestCommand::Generate {
			id: RequestId::new(2),
			problem_id: 133,
		});
		assert_eq!(started_rx.recv_timeout(Duration::from_secs(1)), Ok(133));
		let first = result_rx
			.recv_timeout(Duration::from_secs(1))
			.expect("newer generation result");
		assert_eq!(generation_id(&first), Some(RequestId::new(2)));

		// The older call still reports back once it finishes.
		release_tx.send(()).expect("release");
		let late = result_rx
			.recv_timeout(Duration::from_secs(1))
			.expect("older generation result");
		assert_eq!(generation_id(&late), Some(RequestId::new(1)));
	}

	#[test]
	fn slow_generation_does_not_block_search() {
		let (release_tx, release_rx) = mpsc::channel();
		let service: Arc<dyn ProblemService> = Arc::new(FakeService {
			release: Mutex::new(Some(release_rx)),
			..FakeService::default()
		});
		let (result_tx, result_rx) = mpsc::channel();
		let generation = Lane::new("generation", Arc::clone(&service), result_tx.clone());
		let search = Lane::new("search", service, result_tx);

		generation.send(RequestCommand::Generate {
			id: RequestId::new(1),
			problem_id: 7,
		});
		search.send(RequestCommand::Search {
			id: RequestId::new(2),
			query: "tree".into(),
			offset: 0,
		});

		let first = result_rx
			.recv_timeout(Duration::from_secs(1))
			.expect("search result");
		assert!(matches!(first, Action::SearchCompleted { .. }));

		release_tx.send(()).expect("release");
		let second = result_rx
			.recv_timeout(Duration::from_secs(1))
			.expect("generation result");
		assert!(matches!(
			second,
			Action::GenerationCompleted { result: Err(RequestError::NotFound(_)), .. }
		));
	}

	#[test]
	fn nothing_starts_after_shutdown() {
		let service = Arc::new(FakeService::default());
		let (result_tx, result_rx) = mpsc::channel();
		let lane = Lane::new("search", Arc::clone(&service) as Arc<dyn ProblemService>, result_tx);
		lane.shutdown();
		lane.send(RequestCommand::Search {
			id: RequestId::new(1),
			query: "graph".into(),
			offset: 0,
		});
		assert!(result_rx.recv_timeout(Duration::from_millis(100)).is_err());
		assert!(service.searches.lock().expect("lock").is_empty());
	}
}
