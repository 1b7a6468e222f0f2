use serde::Serialize;
use std::collections::BTreeMap;

use super::fields::FieldName;
use super::options::{ChoiceOption, City, Country, Nationality, Street, Supplement};

/// Data kind a control accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "options")]
pub enum FieldKind {
    Text,
    /// Calendar date entered as `YYYY-MM-DD`.
    Date,
    Choice(&'static [&'static str]),
}

/// Constraints attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    pub required: bool,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_len: Option<usize>,
}

impl FieldRule {
    const fn new(kind: FieldKind) -> Self {
        Self {
            required: false,
            kind,
            min_len: None,
            max_len: None,
        }
    }

    pub const fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    pub const fn date() -> Self {
        Self::new(FieldKind::Date)
    }

    pub const fn choice<T: ChoiceOption>() -> Self {
        Self::new(FieldKind::Choice(T::LABELS))
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn min(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    pub const fn max(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Choice(options) => options,
            FieldKind::Text | FieldKind::Date => &[],
        }
    }
}

/// Which rule set is in force, selected by the "contract start differs from
/// first day of work" toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVariant {
    SameDayStart,
    DifferingStart,
}

impl SchemaVariant {
    pub const fn from_differs(differs: bool) -> Self {
        if differs {
            Self::DifferingStart
        } else {
            Self::SameDayStart
        }
    }

    pub const fn differs(self) -> bool {
        matches!(self, Self::DifferingStart)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SameDayStart => "same-day start",
            Self::DifferingStart => "differing start",
        }
    }

    pub fn schema(self) -> FieldRules {
        let mut rules = BTreeMap::new();
        for field in FieldName::ALL {
            rules.insert(field, base_rule(field));
        }
        if self.differs() {
            rules.insert(FieldName::FirstDate, FieldRule::date().required());
        }

        FieldRules {
            variant: self,
            rules,
        }
    }
}

/// Rule shared by both variants; `firstDate` is optional here.
fn base_rule(field: FieldName) -> FieldRule {
    match field {
        FieldName::ContractStart => FieldRule::date().required(),
        FieldName::FirstDate => FieldRule::date(),
        FieldName::FirstName | FieldName::LastName => FieldRule::text().min(4).required(),
        FieldName::BirthName => FieldRule::text().min(4),
        FieldName::SocialId => FieldRule::text(),
        FieldName::City | FieldName::AddressCity => FieldRule::choice::<City>().min(4).required(),
        FieldName::Country | FieldName::AddressCountry => {
            FieldRule::choice::<Country>().min(4).required()
        }
        FieldName::BirthDate => FieldRule::date().required(),
        FieldName::Nationality => FieldRule::choice::<Nationality>().required(),
        FieldName::AddressStreet => FieldRule::choice::<Street>().min(4).required(),
        FieldName::AddressHouse => FieldRule::text().max(3).required(),
        FieldName::AddressSupplement => FieldRule::choice::<Supplement>(),
        FieldName::AddressPostCode => FieldRule::text().min(3).max(10).required(),
    }
}

/// Build the active rule set for the toggle state.
pub fn build_schema(differs: bool) -> FieldRules {
    SchemaVariant::from_differs(differs).schema()
}

/// Complete rule set: one rule for each of the sixteen fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRules {
    variant: SchemaVariant,
    rules: BTreeMap<FieldName, FieldRule>,
}

impl FieldRules {
    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    pub fn rule(&self, field: FieldName) -> FieldRule {
        // Every constructor inserts all sixteen fields.
        self.rules
            .get(&field)
            .copied()
            .unwrap_or_else(|| base_rule(field))
    }

    pub fn is_required(&self, field: FieldName) -> bool {
        self.rule(field).required
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldRule)> + '_ {
        self.rules.iter().map(|(field, rule)| (*field, *rule))
    }

    pub fn required_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.iter()
            .filter(|(_, rule)| rule.required)
            .map(|(field, _)| field)
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        build_schema(false)
    }
}
