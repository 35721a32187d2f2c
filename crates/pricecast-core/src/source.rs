use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier for a price-history provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    Fmp,
}

impl ProviderId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fmp => "fmp",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
