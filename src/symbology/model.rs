use std::collections::HashMap;

use chrono::NaiveDate;
use databento::dbn::SType;
use serde::{Deserialize, Serialize};

use crate::core::models::symbols_param;
use crate::core::{DateRange, wire};

/// Parameters for [`HistClient::symbology_resolve`](crate::HistClient::symbology_resolve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveParams {
    pub dataset: String,
    /// Symbols to resolve; empty means all symbols.
    pub symbols: Vec<String>,
    pub stype_in: SType,
    pub stype_out: SType,
    /// Day-granular: `start` and `end` are truncated to their UTC dates, so an
    /// end within the start's day yields an empty range.
    pub date_range: DateRange,
}

impl ResolveParams {
    /// Creates parameters resolving raw symbols to instrument IDs.
    pub fn new(
        dataset: impl Into<String>,
        symbols: impl IntoIterator<Item = impl Into<String>>,
        date_range: DateRange,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
            stype_in: SType::RawSymbol,
            stype_out: SType::InstrumentId,
            date_range,
        }
    }

    #[must_use]
    pub const fn stype_in(mut self, stype_in: SType) -> Self {
        self.stype_in = stype_in;
        self
    }

    #[must_use]
    pub const fn stype_out(mut self, stype_out: SType) -> Self {
        self.stype_out = stype_out;
        self
    }

    pub(crate) fn form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("dataset", self.dataset.clone()),
            ("symbols", symbols_param(&self.symbols)),
            ("stype_in", self.stype_in.to_string()),
            ("stype_out", self.stype_out.to_string()),
        ];
        form.extend(self.date_range.date_params());
        form
    }
}

/// One resolved identifier, valid over `[start_date, end_date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingInterval {
    #[serde(rename = "d0", deserialize_with = "wire::de_date")]
    pub start_date: NaiveDate,
    #[serde(rename = "d1", deserialize_with = "wire::de_date")]
    pub end_date: NaiveDate,
    /// The symbol in the output symbology.
    #[serde(rename = "s")]
    pub symbol: String,
}

/// The outcome of a symbology resolution request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Input symbol to its mapping intervals.
    #[serde(rename = "result", default)]
    pub mappings: HashMap<String, Vec<MappingInterval>>,
    /// Input symbols that resolved for only part of the requested range.
    #[serde(default)]
    pub partial: Vec<String>,
    /// Input symbols that did not resolve at all.
    #[serde(default)]
    pub not_found: Vec<String>,
    #[serde(default)]
    pub message: String,
    /// Gateway status: `0` complete, `1` partial, `2` not found.
    #[serde(default)]
    pub status: i32,
}

impl Resolution {
    /// The output symbol for `input` on `date`, if one was resolved.
    pub fn resolve_on(&self, input: &str, date: NaiveDate) -> Option<&str> {
        self.mappings
            .get(input)?
            .iter()
            .find(|m| m.start_date <= date && date < m.end_date)
            .map(|m| m.symbol.as_str())
    }
}
