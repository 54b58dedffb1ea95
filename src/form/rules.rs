use std::borrow::Cow;

use regex::Regex;
use validator::ValidationError;

/// A custom predicate over the raw field value.
pub type Predicate = fn(&str) -> Result<(), ValidationError>;

/// A rule parameter paired with the message shown when it is violated.
#[derive(Debug, Clone)]
pub struct Rule<T> {
	pub value: T,
	pub message: Cow<'static, str>,
}

impl<T> Rule<T> {
	pub fn new(value: T, message: impl Into<Cow<'static, str>>) -> Self {
		Self {
			value,
			message: message.into(),
		}
	}
}

/// The declarative validation rules attached to a single field.
///
/// Rules are evaluated in a fixed order (required, numeric bounds, length,
/// pattern, then the custom predicate) and evaluation stops at the first
/// failure, so a field reports at most one error.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
	/// The message shown when the field is left empty.
	pub required: Option<Cow<'static, str>>,
	pub pattern: Option<Rule<Regex>>,
	pub min_length: Option<Rule<usize>>,
	pub max_length: Option<Rule<usize>>,
	pub min: Option<Rule<f64>>,
	pub max: Option<Rule<f64>>,
	pub validate: Option<Predicate>,
}

fn failure(code: &'static str, message: &Cow<'static, str>) -> ValidationError {
	let mut error = ValidationError::new(code);

	error.message = Some(message.clone());
	error
}

impl RuleSet {
	#[must_use]
	pub fn required(mut self, message: impl Into<Cow<'static, str>>) -> Self {
		self.required = Some(message.into());
		self
	}

	#[must_use]
	pub fn min_length(mut self, value: usize, message: impl Into<Cow<'static, str>>) -> Self {
		self.min_length = Some(Rule::new(value, message));
		self
	}

	#[must_use]
	pub fn max_length(mut self, value: usize, message: impl Into<Cow<'static, str>>) -> Self {
		self.max_length = Some(Rule::new(value, message));
		self
	}

	/// Checks `value` against every rule, returning the first violation.
	///
	/// An empty value that is not required skips the remaining rules.
	pub fn check(&self, value: &str) -> Result<(), ValidationError> {
		if value.is_empty() {
			return match &self.required {
				Some(message) => Err(failure("required", message)),
				None => Ok(()),
			};
		}

		if self.min.is_some() || self.max.is_some() {
			// Non-numeric input is below any minimum and above any maximum.
			let number = value.trim().parse::<f64>().ok();

			if let Some(rule) = &self.max {
				if !number.is_some_and(|number| number <= rule.value) {
					return Err(failure("max", &rule.message));
				}
			}

			if let Some(rule) = &self.min {
				if !number.is_some_and(|number| number >= rule.value) {
					return Err(failure("min", &rule.message));
				}
			}
		}

		let length = value.chars().count();

		if let Some(rule) = &self.max_length {
			if length > rule.value {
				return Err(failure("max_length", &rule.message));
			}
		}

		if let Some(rule) = &self.min_length {
			if length < rule.value {
				return Err(failure("min_length", &rule.message));
			}
		}

		if let Some(rule) = &self.pattern {
			if !rule.value.is_match(value) {
				return Err(failure("pattern", &rule.message));
			}
		}

		match self.validate {
			Some(predicate) => predicate(value),
			None => Ok(()),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn no_spaces(value: &str) -> Result<(), ValidationError> {
		if value.contains(' ') {
			return Err(ValidationError::new("no_spaces"));
		}

		Ok(())
	}

	fn code(result: Result<(), ValidationError>) -> String {
		result.unwrap_err().code.into_owned()
	}

	fn pattern(pattern: &str, message: &'static str) -> RuleSet {
		RuleSet {
			pattern: Some(Rule::new(Regex::new(pattern).unwrap(), message)),
			..RuleSet::default()
		}
	}

	#[test]
	fn test_required_only_fails_on_empty() {
		let rules = RuleSet::default().required("The title is required");

		let error = rules.check("").unwrap_err();

		assert_eq!(error.code, "required");
		assert_eq!(error.message.unwrap(), "The title is required");
		assert!(rules.check("A").is_ok());
	}

	#[test]
	fn test_optional_empty_value_skips_rules() {
		let rules = RuleSet::default().min_length(3, "too short");

		assert!(rules.check("").is_ok());
		assert_eq!(code(rules.check("ab")), "min_length");
	}

	#[test]
	fn test_length_counts_chars() {
		let rules = RuleSet::default().max_length(3, "too long");

		assert!(rules.check("äöü").is_ok());
		assert_eq!(code(rules.check("äöüß")), "max_length");
	}

	#[test]
	fn test_pattern() {
		let rules = pattern(r"^[a-z-]+$", "lowercase only");

		assert!(rules.check("hello-world").is_ok());
		assert_eq!(code(rules.check("Hello")), "pattern");
	}

	#[test]
	fn test_numeric_bounds() {
		let rules = RuleSet {
			min: Some(Rule::new(1.0, "too small")),
			max: Some(Rule::new(10.0, "too big")),
			..RuleSet::default()
		};

		assert!(rules.check("1").is_ok());
		assert!(rules.check(" 10 ").is_ok());
		assert_eq!(code(rules.check("0")), "min");
		assert_eq!(code(rules.check("11")), "max");
		assert_eq!(code(rules.check("ten")), "max");
	}

	#[test]
	fn test_rule_order() {
		let rules = RuleSet {
			min: Some(Rule::new(100.0, "too small")),
			..pattern(r"^\d+$", "digits only").max_length(2, "too long")
		};

		// Bounds come before length, length before pattern.
		assert_eq!(code(rules.check("7")), "min");
		assert_eq!(code(rules.check("1000")), "max_length");

		let rules = pattern(r"^\d+$", "digits only")
			.min_length(3, "too short")
			.max_length(4, "too long");

		assert_eq!(code(rules.check("a")), "min_length");
		assert_eq!(code(rules.check("abcde")), "max_length");
		assert_eq!(code(rules.check("abc")), "pattern");
	}

	#[test]
	fn test_custom_predicate_runs_last() {
		let rules = RuleSet {
			validate: Some(no_spaces),
			..pattern(r"^[a-z ]+$", "letters only")
		}
		.max_length(5, "too long");

		assert_eq!(code(rules.check("a b")), "no_spaces");
		assert_eq!(code(rules.check("a b c d")), "max_length");
		assert_eq!(code(rules.check("A B")), "pattern");
	}
}
