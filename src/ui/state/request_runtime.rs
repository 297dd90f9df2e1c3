use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use leetex_core::{Action, Effect, ProblemService};

use crate::systems::requests::{Lane, RequestCommand};

/// Request lanes for both kinds and the channel their completions arrive on.
pub(crate) struct RequestRuntime {
	search: Lane,
	generation: Lane,
	rx: Receiver<Action>,
}

impl RequestRuntime {
	pub(crate) fn new(service: Arc<dyn ProblemService>) -> Self {
		let (result_tx, rx) = mpsc::channel();
		let search = Lane::new("search", Arc::clone(&service), result_tx.clone());
		let generation = Lane::new("generation", service, result_tx);
		Self {
			search,
			generation,
			rx,
		}
	}

	pub(crate) fn dispatch(&self, effect: Effect) {
		let lane = match effect {
			Effect::Search { .. } => &self.search,
			Effect::Generate { .. } => &self.generation,
		};
		lane.send(RequestCommand::from(effect));
	}

	pub(crate) fn try_recv(&self) -> Result<Action, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn shutdown(&self) {
		self.search.shutdown();
		self.generation.shutdown();
	}
}
