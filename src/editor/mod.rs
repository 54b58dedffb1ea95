//! The post editor: loads a post, holds the working copy and submits it.

mod notify;

pub use notify::{Navigator, Notification, Notifier, Outbox};

use std::sync::{
	atomic::{AtomicU64, Ordering},
	Arc,
};

use chrono::{DateTime, Datelike, Utc};
use tokio::sync::Mutex;

use crate::{
	model::{Post, PostId, PostInputs, DEFAULT_USER_ID},
	store::{self, PostService},
};

pub const LISTING_PATH: &str = "/admin/posts";
pub const INSERTED: &str = "Post inserted successfully";
pub const UPDATED: &str = "Post updated successfully";

/// Whether the editor creates a new post or edits an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorMode {
	#[default]
	Create,
	Edit(PostId),
}

impl EditorMode {
	/// Builds the mode from the optional path segments after the editor route.
	///
	/// Only the first segment is the id. No segments, or an empty first
	/// segment, means create mode.
	pub fn from_segments<I, S>(segments: Option<I>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		segments
			.and_then(|segments| segments.into_iter().next())
			.map(|id| id.as_ref().trim().to_string())
			.filter(|id| !id.is_empty())
			.map_or(Self::Create, |id| Self::Edit(PostId(id)))
	}

	/// Parses a wildcard path capture such as `abc` or `abc/extra`.
	pub fn from_path(path: Option<&str>) -> Self {
		Self::from_segments(path.map(|path| path.trim_start_matches('/').split('/')))
	}

	pub fn id(&self) -> Option<&PostId> {
		match self {
			Self::Create => None,
			Self::Edit(id) => Some(id),
		}
	}
}

/// The result of [`PostEditor::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
	/// Nothing to fetch: create mode, or the post is already loaded.
	Skipped,
	Loaded,
	/// A newer initialize superseded this one, so its result was dropped.
	Stale,
	Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
	pub mode: EditorMode,
	/// Advisory only, submissions are never rejected while loading.
	pub is_loading: bool,
	pub post: Post,
	/// Shown in place of the form when the post could not be fetched.
	pub load_error: Option<String>,
}

/// The day-of-month marker stored in [`Post::date`].
pub fn date_marker(now: DateTime<Utc>) -> String {
	now.day().to_string()
}

/// Mediates between the editor form, the post service and the author.
pub struct PostEditor {
	service: Arc<dyn PostService>,
	notifier: Arc<dyn Notifier>,
	navigator: Arc<dyn Navigator>,
	state: Mutex<EditorState>,
	generation: AtomicU64,
}

impl PostEditor {
	pub fn new(
		service: Arc<dyn PostService>,
		notifier: Arc<dyn Notifier>,
		navigator: Arc<dyn Navigator>,
	) -> Self {
		Self {
			service,
			notifier,
			navigator,
			state: Mutex::new(EditorState::default()),
			generation: AtomicU64::new(0),
		}
	}

	/// Sets the mode without fetching anything, for submitting straight away.
	#[must_use]
	pub fn with_mode(mut self, mode: EditorMode) -> Self {
		self.state.get_mut().mode = mode;
		self
	}

	pub async fn state(&self) -> EditorState {
		self.state.lock().await.clone()
	}

	/// Points the editor at `mode`, fetching the post when editing.
	///
	/// Only a call that fetches supersedes earlier ones, so only the latest
	/// fetch can replace the working copy. The working copy always holds
	/// either the skeleton or the post `mode` names.
	#[tracing::instrument(skip(self))]
	pub async fn initialize(&self, mode: EditorMode) -> LoadOutcome {
		let (id, generation) = {
			let mut state = self.state.lock().await;

			if let EditorMode::Edit(id) = &mode {
				if state.load_error.is_none() && state.post.id.as_ref() == Some(id) {
					state.mode = mode;
					return LoadOutcome::Skipped;
				}
			}

			let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

			state.mode = mode.clone();
			state.load_error = None;
			state.post = Post::default();

			match mode {
				EditorMode::Create => return LoadOutcome::Skipped,
				EditorMode::Edit(id) => (id, generation),
			}
		};

		let result = self.service.show(&id).await;
		let mut state = self.state.lock().await;

		if self.generation.load(Ordering::SeqCst) != generation {
			tracing::debug!(%id, "discarding stale post load");
			return LoadOutcome::Stale;
		}

		match result {
			Ok(post) => {
				state.post = post;
				LoadOutcome::Loaded
			}
			Err(error) => {
				tracing::warn!(%id, %error, "failed to load post");
				state.load_error = Some(error.to_string());
				LoadOutcome::Failed
			}
		}
	}

	/// Builds the post to save from the form values and the current mode.
	pub fn candidate(mode: &EditorMode, values: PostInputs, now: DateTime<Utc>) -> Post {
		Post {
			id: mode.id().cloned(),
			user_id: DEFAULT_USER_ID.into(),
			title: values.title,
			description: values.description,
			content: values.content,
			date: date_marker(now),
			image: String::new(),
			is_featured: false,
		}
	}

	/// Saves the form values, creating or updating depending on the mode.
	///
	/// Service errors are reported to the author and never returned.
	#[tracing::instrument(skip_all)]
	pub async fn submit(&self, values: PostInputs) {
		let mode = {
			let mut state = self.state.lock().await;

			state.is_loading = true;
			state.mode.clone()
		};

		let post = Self::candidate(&mode, values, Utc::now());
		let result = match mode {
			EditorMode::Edit(..) => self.update(post).await,
			EditorMode::Create => self.create(post).await,
		};

		if let Err(error) = result {
			tracing::error!(%error, "failed to save post");
			self.notifier.notify(Notification::error(error.to_string()));
		}

		self.state.lock().await.is_loading = false;
	}

	/// Stores a new post, then leaves for the listing.
	pub async fn create(&self, post: Post) -> Result<(), store::Error> {
		self.service.store(post).await?;
		self.navigator.push(LISTING_PATH);
		self.notifier.notify(Notification::success(INSERTED));

		Ok(())
	}

	/// Updates the post in place; the author stays on the page.
	pub async fn update(&self, post: Post) -> Result<(), store::Error> {
		self.service.update(post).await?;
		self.notifier.notify(Notification::success(UPDATED));

		Ok(())
	}
}
