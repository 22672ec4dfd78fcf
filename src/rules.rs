//! The lint rules, one module each, plus the registry a host enumerates.

pub mod aligned_assignments;
pub mod computed_property_spacing;
pub mod constructor_spacing;
pub mod invisible_characters;
pub mod space_in_parens;

/// How a rule's fixes may touch the file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FixClass {
	/// Edits only ever add or remove whitespace.
	Whitespace,
	/// Edits may rewrite non-whitespace text.
	Code,
}

/// Registry descriptor for one rule.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
	/// Stable rule identifier.
	pub id: &'static str,
	/// Fix class of the rule's edits.
	pub fixable: FixClass,
}

/// Every rule this crate implements, in registration order.
pub const RULES: [RuleMeta; 5] = [
	RuleMeta { id: space_in_parens::RULE_ID, fixable: FixClass::Whitespace },
	RuleMeta { id: computed_property_spacing::RULE_ID, fixable: FixClass::Whitespace },
	RuleMeta { id: aligned_assignments::RULE_ID, fixable: FixClass::Whitespace },
	RuleMeta { id: constructor_spacing::RULE_ID, fixable: FixClass::Code },
	RuleMeta { id: invisible_characters::RULE_ID, fixable: FixClass::Code },
];

/// Rule identifiers alone, for hosts that key on ids.
pub fn rule_ids() -> [&'static str; 5] {
	RULES.map(|rule| rule.id)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn registry_ids_are_unique() {
		let ids = rule_ids();

		for (index, id) in ids.iter().enumerate() {
			assert!(!ids[index + 1..].contains(id));
		}
	}
}
