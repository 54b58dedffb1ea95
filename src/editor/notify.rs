use std::sync::Mutex;

use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	Success,
	Error,
}

/// A transient message shown to the author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Notification {
	pub level: Level,
	pub message: String,
}

impl Notification {
	pub fn success(message: impl Into<String>) -> Self {
		Self {
			level: Level::Success,
			message: message.into(),
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			level: Level::Error,
			message: message.into(),
		}
	}
}

/// The channel notifications are delivered through.
pub trait Notifier: Send + Sync {
	fn notify(&self, notification: Notification);
}

/// Moves the author to another page.
pub trait Navigator: Send + Sync {
	fn push(&self, path: &str);
}

/// Something observable the editor did, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	Notify(Notification),
	Navigate(String),
}

/// Records notifications and navigation for a single request.
#[derive(Debug, Default)]
pub struct Outbox {
	effects: Mutex<Vec<Effect>>,
}

impl Outbox {
	pub fn new() -> Self {
		Self::default()
	}

	fn record(&self, effect: Effect) {
		// A poisoned outbox still holds every effect recorded before the panic.
		let mut effects = self
			.effects
			.lock()
			.unwrap_or_else(std::sync::PoisonError::into_inner);

		effects.push(effect);
	}

	/// Every effect so far, oldest first.
	pub fn effects(&self) -> Vec<Effect> {
		self.effects
			.lock()
			.unwrap_or_else(std::sync::PoisonError::into_inner)
			.clone()
	}

	pub fn notifications(&self) -> Vec<Notification> {
		self.effects()
			.into_iter()
			.filter_map(|effect| match effect {
				Effect::Notify(notification) => Some(notification),
				Effect::Navigate(..) => None,
			})
			.collect()
	}

	/// The most recent navigation target.
	pub fn redirect(&self) -> Option<String> {
		self.effects()
			.into_iter()
			.rev()
			.find_map(|effect| match effect {
				Effect::Navigate(path) => Some(path),
				Effect::Notify(..) => None,
			})
	}
}

impl Notifier for Outbox {
	fn notify(&self, notification: Notification) {
		self.record(Effect::Notify(notification));
	}
}

impl Navigator for Outbox {
	fn push(&self, path: &str) {
		self.record(Effect::Navigate(path.into()));
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_outbox_keeps_order() {
		let outbox = Outbox::new();

		outbox.push("/admin/posts");
		outbox.notify(Notification::success("done"));

		assert_eq!(
			outbox.effects(),
			vec![
				Effect::Navigate("/admin/posts".into()),
				Effect::Notify(Notification::success("done")),
			]
		);
		assert_eq!(outbox.redirect().as_deref(), Some("/admin/posts"));
		assert_eq!(outbox.notifications(), vec![Notification::success("done")]);
	}

	#[test]
	fn test_empty_outbox() {
		let outbox = Outbox::new();

		assert!(outbox.notifications().is_empty());
		assert_eq!(outbox.redirect(), None);
	}
}
