//! Closed vocabularies used to classify a quote.
//!
//! Both enumerations decode strictly: the wire string must match one of the
//! known literals exactly (case-sensitive). Anything else is reported as
//! [`SchemaError::UnrecognizedClassification`] so upstream drift stays visible.
use std::str::FromStr;

use bincode::{Decode, Encode};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::error::SchemaError;

/// Which vocabulary a classification string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ClassificationKind {
    /// The `quoteType` field.
    #[strum(to_string = "instrument type")]
    InstrumentType,
    /// The `marketState` field.
    #[strum(to_string = "market state")]
    MarketState,
}

/// Asset class of a tradable symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    ValueEnum,
    Display,
    AsRefStr,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[clap(rename_all = "lower")]
pub enum InstrumentType {
    /// Common stock.
    Equity,
    /// Market index; not directly tradeable.
    Index,
    /// Option contract.
    Option,
    /// Forex pair, sent as `CURRENCY` on the wire.
    #[serde(rename = "CURRENCY")]
    #[strum(to_string = "CURRENCY")]
    #[value(name = "currency")]
    ForexPair,
    /// Futures contract.
    Future,
    /// Exchange traded fund.
    Etf,
    /// Mutual fund.
    MutualFund,
}

impl InstrumentType {
    /// The exact literal used on the wire.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            InstrumentType::Equity => "EQUITY",
            InstrumentType::Index => "INDEX",
            InstrumentType::Option => "OPTION",
            InstrumentType::ForexPair => "CURRENCY",
            InstrumentType::Future => "FUTURE",
            InstrumentType::Etf => "ETF",
            InstrumentType::MutualFund => "MUTUALFUND",
        }
    }

    /// Decodes a wire string, rejecting anything outside the closed set.
    pub fn parse_wire(raw: &str) -> Result<Self, SchemaError> {
        Self::iter()
            .find(|known| known.as_wire_str() == raw)
            .ok_or_else(|| SchemaError::UnrecognizedClassification {
                kind: ClassificationKind::InstrumentType,
                value: raw.to_string(),
            })
    }

    /// Earnings, dividend and valuation fields carry data for this type.
    ///
    /// Funds report a subset of them (market cap, yields), so they count too.
    pub fn has_equity_fields(&self) -> bool {
        matches!(
            self,
            InstrumentType::Equity | InstrumentType::Etf | InstrumentType::MutualFund
        )
    }

    /// Fund return fields carry data for this type.
    pub fn has_fund_fields(&self) -> bool {
        matches!(self, InstrumentType::Etf | InstrumentType::MutualFund)
    }

    /// Contract fields (underlying, strike, expiry) carry data for this type.
    pub fn has_derivative_fields(&self) -> bool {
        matches!(self, InstrumentType::Option | InstrumentType::Future)
    }
}

impl FromStr for InstrumentType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

impl TryFrom<&str> for InstrumentType {
    type Error = SchemaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_wire(value)
    }
}

/// Session phase of the exchange an instrument trades on.
///
/// Describes the external market; nothing in this crate transitions through it.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Encode,
    Decode,
    Display,
    AsRefStr,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum MarketState {
    /// Early pre-market.
    PrePre,
    /// Pre-market.
    Pre,
    /// Regular trading session.
    Regular,
    /// Post-market.
    Post,
    /// Late post-market.
    PostPost,
    /// Exchange closed.
    Closed,
}

impl MarketState {
    /// The exact literal used on the wire.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            MarketState::PrePre => "PREPRE",
            MarketState::Pre => "PRE",
            MarketState::Regular => "REGULAR",
            MarketState::Post => "POST",
            MarketState::PostPost => "POSTPOST",
            MarketState::Closed => "CLOSED",
        }
    }

    /// Decodes a wire string, rejecting anything outside the closed set.
    pub fn parse_wire(raw: &str) -> Result<Self, SchemaError> {
        Self::iter()
            .find(|known| known.as_wire_str() == raw)
            .ok_or_else(|| SchemaError::UnrecognizedClassification {
                kind: ClassificationKind::MarketState,
                value: raw.to_string(),
            })
    }

    /// Pre-market fields are current.
    pub fn is_pre_market(&self) -> bool {
        matches!(self, MarketState::Pre | MarketState::PrePre)
    }

    /// Post-market fields are current.
    pub fn is_post_market(&self) -> bool {
        matches!(self, MarketState::Post | MarketState::PostPost)
    }

    /// Regular session is running.
    pub fn is_open(&self) -> bool {
        matches!(self, MarketState::Regular)
    }
}

impl FromStr for MarketState {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_wire(s)
    }
}

impl TryFrom<&str> for MarketState {
    type Error = SchemaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_wire(value)
    }
}
