use serde::{Deserialize, Serialize};

/// Closed set of values offered by a choice control.
pub trait ChoiceOption: Sized + Copy + 'static {
    /// Every option, in the order the control lists them.
    const ALL: &'static [Self];
    /// Labels matching `ALL`, used by schema rules and renderers.
    const LABELS: &'static [&'static str];

    fn label(self) -> &'static str;

    /// Exact label match; choice controls never submit anything else.
    fn from_label(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.label() == value)
    }

    /// Option a select control shows before the user touches it.
    fn preselected() -> Self {
        Self::ALL[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Kyiv,
    Berlin,
    London,
}

impl ChoiceOption for City {
    const ALL: &'static [Self] = &[Self::Kyiv, Self::Berlin, Self::London];
    const LABELS: &'static [&'static str] = &["Kyiv", "Berlin", "London"];

    fn label(self) -> &'static str {
        match self {
            Self::Kyiv => "Kyiv",
            Self::Berlin => "Berlin",
            Self::London => "London",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Ukraine,
    Germany,
    England,
}

impl ChoiceOption for Country {
    const ALL: &'static [Self] = &[Self::Ukraine, Self::Germany, Self::England];
    const LABELS: &'static [&'static str] = &["Ukraine", "Germany", "England"];

    fn label(self) -> &'static str {
        match self {
            Self::Ukraine => "Ukraine",
            Self::Germany => "Germany",
            Self::England => "England",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nationality {
    Ukrainian,
    German,
    English,
}

impl ChoiceOption for Nationality {
    const ALL: &'static [Self] = &[Self::Ukrainian, Self::German, Self::English];
    const LABELS: &'static [&'static str] = &["Ukrainian", "German", "English"];

    fn label(self) -> &'static str {
        match self {
            Self::Ukrainian => "Ukrainian",
            Self::German => "German",
            Self::English => "English",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Street {
    UkrainianStreet,
    GermanyStreet,
    EnglishStreet,
}

impl ChoiceOption for Street {
    const ALL: &'static [Self] = &[Self::UkrainianStreet, Self::GermanyStreet, Self::EnglishStreet];
    const LABELS: &'static [&'static str] =
        &["Ukrainian street", "Germany street", "English street"];

    fn label(self) -> &'static str {
        match self {
            Self::UkrainianStreet => "Ukrainian street",
            Self::GermanyStreet => "Germany street",
            Self::EnglishStreet => "English street",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Supplement {
    UkrainianSupplement,
    GermanySupplement,
    EnglishSupplement,
}

impl ChoiceOption for Supplement {
    const ALL: &'static [Self] = &[
        Self::UkrainianSupplement,
        Self::GermanySupplement,
        Self::EnglishSupplement,
    ];
    const LABELS: &'static [&'static str] = &[
        "Ukrainian supplement",
        "Germany supplement",
        "English supplement",
    ];

    fn label(self) -> &'static str {
        match self {
            Self::UkrainianSupplement => "Ukrainian supplement",
            Self::GermanySupplement => "Germany supplement",
            Self::EnglishSupplement => "English supplement",
        }
    }
}
