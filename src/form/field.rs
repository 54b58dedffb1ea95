use std::borrow::Cow;

use schemars::JsonSchema;
use serde::Serialize;
use validator::ValidationError;

use super::RuleSet;

/// Which control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "control", rename_all = "lowercase")]
pub enum FieldKind {
	Text {
		/// The `type` attribute of the input, such as `text` or `email`.
		#[serde(rename = "type")]
		input_type: &'static str,
	},
	TextArea,
}

/// The configuration of a single form control.
///
/// Fields are uncontrolled: they only carry a default value, and the
/// submitted values are owned by the enclosing form.
#[derive(Debug, Clone)]
pub struct FieldConfig {
	/// The form-state key, also used as the element id.
	pub name: &'static str,
	/// Display text only.
	pub label: Cow<'static, str>,
	pub default_value: String,
	pub kind: FieldKind,
	pub disabled: bool,
	pub rules: RuleSet,
}

impl FieldConfig {
	pub fn text(name: &'static str, label: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name,
			label: label.into(),
			default_value: String::new(),
			kind: FieldKind::Text { input_type: "text" },
			disabled: false,
			rules: RuleSet::default(),
		}
	}

	pub fn text_area(name: &'static str, label: impl Into<Cow<'static, str>>) -> Self {
		Self {
			kind: FieldKind::TextArea,
			..Self::text(name, label)
		}
	}

	#[must_use]
	pub fn rules(mut self, rules: RuleSet) -> Self {
		self.rules = rules;
		self
	}

	/// Renders the control with its default value and current errors.
	pub fn render(&self, errors: Option<&[ValidationError]>) -> FieldView {
		let error = errors
			.and_then(<[ValidationError]>::first)
			.map(|error| {
				error
					.message
					.as_deref()
					.unwrap_or(error.code.as_ref())
					.to_string()
			});

		FieldView {
			id: self.name.into(),
			name: self.name.into(),
			label: self.label.to_string(),
			kind: self.kind,
			default_value: self.default_value.clone(),
			disabled: self.disabled,
			required: self.rules.required.is_some(),
			min_length: self.rules.min_length.as_ref().map(|rule| rule.value),
			max_length: self.rules.max_length.as_ref().map(|rule| rule.value),
			aria_invalid: error.is_some(),
			error,
		}
	}
}

/// A rendered form control.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
	pub id: String,
	pub name: String,
	pub label: String,
	#[serde(flatten)]
	pub kind: FieldKind,
	pub default_value: String,
	pub disabled: bool,
	pub required: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_length: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_length: Option<usize>,
	#[serde(rename = "aria-invalid")]
	pub aria_invalid: bool,
	/// The first error for this field, rendered in an alert.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_render_without_errors() {
		let field = FieldConfig {
			default_value: "Hello".into(),
			..FieldConfig::text("title", "Title")
				.rules(RuleSet::default().required("The title is required"))
		};

		let view = field.render(None);

		assert_eq!(view.id, "title");
		assert_eq!(view.name, "title");
		assert_eq!(view.label, "Title");
		assert_eq!(view.default_value, "Hello");
		assert!(view.required);
		assert!(!view.aria_invalid);
		assert_eq!(view.error, None);
	}

	#[test]
	fn test_render_shows_first_error() {
		let field = FieldConfig::text_area("content", "Content");
		let mut first = ValidationError::new("min_length");

		first.message = Some("At least 200 characters are required".into());

		let errors = [first, ValidationError::new("other")];
		let view = field.render(Some(&errors));

		assert!(view.aria_invalid);
		assert_eq!(
			view.error.as_deref(),
			Some("At least 200 characters are required")
		);
	}

	#[test]
	fn test_error_without_message_falls_back_to_code() {
		let field = FieldConfig::text("slug", "Slug");
		let errors = [ValidationError::new("no_spaces")];

		assert_eq!(field.render(Some(&errors)).error.as_deref(), Some("no_spaces"));
	}

	#[test]
	fn test_view_serializes_control_and_accessibility_flag() {
		let field = FieldConfig {
			kind: FieldKind::Text {
				input_type: "email",
			},
			disabled: true,
			..FieldConfig::text("email", "Email")
		};
		let value = serde_json::to_value(field.render(None)).unwrap();

		assert_eq!(value["aria-invalid"], false);
		assert_eq!(value["control"], "text");
		assert_eq!(value["type"], "email");
		assert_eq!(value["disabled"], true);

		let value = serde_json::to_value(FieldConfig::text_area("body", "Body").render(None)).unwrap();

		assert_eq!(value["control"], "textarea");
		assert!(value.get("type").is_none());
	}
}
