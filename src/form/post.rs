use super::{FieldConfig, FormRegistry, RuleSet};

pub const DESCRIPTION_MIN: usize = 40;
pub const DESCRIPTION_MAX: usize = 120;
pub const CONTENT_MIN: usize = 200;

/// The fields of the post editor, in display order.
pub fn post_form() -> FormRegistry {
	FormRegistry::new()
		.with(
			FieldConfig::text("title", "Title")
				.rules(RuleSet::default().required("The title is required")),
		)
		.with(
			FieldConfig::text_area("description", "Description").rules(
				RuleSet::default()
					.required("The description is required")
					.min_length(DESCRIPTION_MIN, "At least 40 characters are required")
					.max_length(DESCRIPTION_MAX, "A maximum of 120 characters is allowed"),
			),
		)
		.with(
			FieldConfig::text_area("content", "Content").rules(
				RuleSet::default()
					.required("The content is required")
					.min_length(CONTENT_MIN, "At least 200 characters are required"),
			),
		)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{form::first_error, model::PostInputs};

	fn inputs(description: usize, content: usize) -> PostInputs {
		PostInputs {
			title: "A".into(),
			description: "d".repeat(description),
			content: "c".repeat(content),
		}
	}

	fn message(inputs: &PostInputs, field: &str) -> Option<String> {
		let errors = post_form().validate(inputs).err()?;

		first_error(&errors, field)
			.and_then(|error| error.message.clone())
			.map(|message| message.into_owned())
	}

	#[test]
	fn test_description_bounds() {
		assert_eq!(
			message(&inputs(39, 200), "description").as_deref(),
			Some("At least 40 characters are required")
		);
		assert_eq!(message(&inputs(40, 200), "description"), None);
		assert_eq!(message(&inputs(120, 200), "description"), None);
		assert_eq!(
			message(&inputs(121, 200), "description").as_deref(),
			Some("A maximum of 120 characters is allowed")
		);
	}

	#[test]
	fn test_content_minimum() {
		assert_eq!(
			message(&inputs(40, 199), "content").as_deref(),
			Some("At least 200 characters are required")
		);
		assert!(post_form().validate(&inputs(40, 200)).is_ok());
	}

	#[test]
	fn test_required_fields() {
		let errors = post_form().validate(&PostInputs::default()).unwrap_err();

		assert_eq!(
			first_error(&errors, "title").unwrap().message.as_deref(),
			Some("The title is required")
		);
		assert_eq!(
			first_error(&errors, "description").unwrap().message.as_deref(),
			Some("The description is required")
		);
		assert_eq!(
			first_error(&errors, "content").unwrap().message.as_deref(),
			Some("The content is required")
		);
	}

	#[test]
	fn test_field_names_are_explicit() {
		let names = post_form()
			.fields()
			.iter()
			.map(|field| field.name)
			.collect::<Vec<_>>();

		assert_eq!(names, ["title", "description", "content"]);
	}
}
