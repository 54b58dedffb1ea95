use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// These can be removed when [`serde`] supports
/// literal defaults: <https://github.com/serde-rs/serde/issues/368>
#[inline]
fn one() -> usize {
	1
}

#[inline]
fn ten() -> usize {
	10
}

#[derive(Deserialize, Validate, JsonSchema)]
pub struct Paginate {
	/// The page number to return (1-indexed).
	#[validate(range(min = 1, max = 100))]
	#[serde(default = "one")]
	pub page: usize,
	/// The number of items to return per page.
	#[validate(range(min = 1, max = 100))]
	#[serde(default = "ten")]
	pub size: usize,
}

impl Paginate {
	pub fn offset(&self) -> usize {
		(self.page.saturating_sub(1)) * self.size
	}

	pub fn limit(&self) -> usize {
		self.size
	}

	/// Applies the page to an already ordered list.
	pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
		items
			.into_iter()
			.skip(self.offset())
			.take(self.limit())
			.collect()
	}
}
