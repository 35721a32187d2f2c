use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

const YMD_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date in `YYYY-MM-DD` form, the granularity of daily close data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDate(Date);

impl TradingDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), YMD_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub const fn from_date(value: Date) -> Self {
        Self(value)
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }

    pub const fn year(self) -> i32 {
        self.0.year()
    }

    /// Whole days from `earlier` to `self`; negative when `self` precedes it.
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).whole_days()
    }

    pub fn format_ymd(self) -> String {
        self.0
            .format(YMD_FORMAT)
            .expect("TradingDate must be YYYY-MM-DD formattable")
    }
}

impl Display for TradingDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_ymd())
    }
}

impl Serialize for TradingDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_ymd())
    }
}

impl<'de> Deserialize<'de> for TradingDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
