use serde::{Deserialize, Serialize};

use crate::value::NumberLocale;

/// Date component order to use when parsing ambiguous numeric dates like `1/2/2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    /// Month-Day-Year (`1/2/2024` -> Jan 2, 2024).
    Mdy,
    /// Day-Month-Year (`1/2/2024` -> Feb 1, 2024).
    Dmy,
}

/// Locale configuration used when coercing literal *values* (text -> number/date/time).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueLocaleConfig {
    pub decimal_separator: char,
    pub group_separator: char,
    pub date_order: DateOrder,
}

impl Default for ValueLocaleConfig {
    fn default() -> Self {
        Self::en_us()
    }
}

impl ValueLocaleConfig {
    #[must_use]
    pub const fn new(
        decimal_separator: char,
        group_separator: char,
        date_order: DateOrder,
    ) -> Self {
        Self {
            decimal_separator,
            group_separator,
            date_order,
        }
    }

    #[must_use]
    pub const fn en_us() -> Self {
        Self::new('.', ',', DateOrder::Mdy)
    }

    /// Same separators as `en-US`, but ambiguous numeric dates read day first.
    #[must_use]
    pub const fn en_gb() -> Self {
        Self::new('.', ',', DateOrder::Dmy)
    }

    #[must_use]
    pub const fn de_de() -> Self {
        Self::new(',', '.', DateOrder::Dmy)
    }

    #[must_use]
    pub fn for_locale_id(id: &str) -> Option<Self> {
        let normalized = id.trim().replace('_', "-").to_ascii_lowercase();
        let mut parts = normalized.split('-');
        let lang = parts.next().filter(|s| !s.is_empty())?;
        let region = parts.next();
        match lang {
            "en" => match region {
                Some("gb") | Some("uk") => Some(Self::en_gb()),
                _ => Some(Self::en_us()),
            },
            "de" => Some(Self::de_de()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn number_locale(&self) -> NumberLocale {
        NumberLocale::new(self.decimal_separator, Some(self.group_separator))
    }
}
