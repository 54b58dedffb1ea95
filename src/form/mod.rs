//! Declarative form fields and the registry that validates them.

mod field;
mod post;
mod rules;

pub use field::{FieldConfig, FieldView};
pub use post::post_form;
pub use rules::RuleSet;

use validator::ValidationErrors;

use crate::model::PostInputs;

/// Anything that can supply raw field values by name.
pub trait FormValues {
	fn value(&self, name: &str) -> Option<&str>;
}

impl FormValues for PostInputs {
	fn value(&self, name: &str) -> Option<&str> {
		match name {
			"title" => Some(&self.title),
			"description" => Some(&self.description),
			"content" => Some(&self.content),
			_ => None,
		}
	}
}

/// Holds every registered field and is the authority on validation.
///
/// Fields keep their rule sets exactly as registered.
#[derive(Debug, Clone, Default)]
pub struct FormRegistry {
	fields: Vec<FieldConfig>,
}

impl FormRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a field, replacing any field with the same name.
	pub fn register(&mut self, field: FieldConfig) -> &mut Self {
		match self.fields.iter_mut().find(|existing| existing.name == field.name) {
			Some(existing) => *existing = field,
			None => self.fields.push(field),
		}

		self
	}

	#[must_use]
	pub fn with(mut self, field: FieldConfig) -> Self {
		self.register(field);
		self
	}

	/// Validates every registered field. Missing values count as empty.
	pub fn validate(&self, values: &impl FormValues) -> Result<(), ValidationErrors> {
		let mut errors = ValidationErrors::new();
		let mut valid = true;

		for field in &self.fields {
			let value = values.value(field.name).unwrap_or_default();

			if let Err(error) = field.rules.check(value) {
				errors.add(field.name, error);
				valid = false;
			}
		}

		if valid {
			Ok(())
		} else {
			Err(errors)
		}
	}

	/// Replaces the default value of every field `values` has a value for.
	pub fn seed(&mut self, values: &impl FormValues) -> &mut Self {
		for field in &mut self.fields {
			if let Some(value) = values.value(field.name) {
				field.default_value = value.into();
			}
		}

		self
	}

	/// Renders every field with the errors that apply to it.
	pub fn render(&self, errors: Option<&ValidationErrors>) -> Vec<FieldView> {
		let field_errors = errors.map(ValidationErrors::field_errors);

		self.fields
			.iter()
			.map(|field| {
				let errors = field_errors
					.as_ref()
					.and_then(|errors| errors.get(field.name))
					.map(|errors| errors.as_slice());

				field.render(errors)
			})
			.collect()
	}
}

#[cfg(test)]
impl FormRegistry {
	pub fn fields(&self) -> &[FieldConfig] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&FieldConfig> {
		self.fields.iter().find(|field| field.name == name)
	}
}

#[cfg(test)]
impl FormValues for std::collections::HashMap<String, String> {
	fn value(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

/// Returns the first error for `field`, if any.
#[cfg(test)]
pub fn first_error<'a>(
	errors: &'a ValidationErrors,
	field: &str,
) -> Option<&'a validator::ValidationError> {
	errors
		.field_errors()
		.get(field)
		.copied()
		.and_then(|errors| errors.first())
}
