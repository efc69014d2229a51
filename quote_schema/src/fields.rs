//! Field groups of a quote.
//!
//! Each group flattens into the quote document, so the wire keys below are
//! top-level keys of the JSON object. Missing keys decode to zero or empty,
//! which is also how "not reported" looks on the wire.
use bincode::{Decode, Encode};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Epoch seconds to UTC; `0` means the provider did not report a time.
pub(crate) fn epoch_to_utc(secs: i64) -> Option<DateTime<Utc>> {
    if secs == 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

/// Regular session pricing and volume.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default)]
pub struct RegularSession {
    #[serde(rename = "regularMarketChangePercent")]
    pub change_percent: f64,
    #[serde(rename = "regularMarketPreviousClose")]
    pub previous_close: f64,
    #[serde(rename = "regularMarketPrice")]
    pub price: f64,
    /// Epoch seconds of the last regular-session trade.
    #[serde(rename = "regularMarketTime")]
    pub time: i64,
    #[serde(rename = "regularMarketChange")]
    pub change: f64,
    #[serde(rename = "regularMarketOpen")]
    pub open: f64,
    #[serde(rename = "regularMarketDayHigh")]
    pub day_high: f64,
    #[serde(rename = "regularMarketDayLow")]
    pub day_low: f64,
    #[serde(rename = "regularMarketVolume")]
    pub volume: u64,
}

impl RegularSession {
    /// Time of the last regular-session trade.
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.time)
    }
}

/// Top of book.
///
/// `ask >= bid` is the usual case but books can cross briefly, so nothing
/// here enforces it.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default, rename_all = "camelCase")]
pub struct Depth {
    pub bid: f64,
    pub ask: f64,
    pub bid_size: u64,
    pub ask_size: u64,
}

impl Depth {
    /// `ask - bid` when both sides are quoted.
    pub fn spread(&self) -> Option<f64> {
        (self.bid > 0.0 && self.ask > 0.0).then(|| self.ask - self.bid)
    }
}

/// Pre-market pricing; current only while the market is in PRE or PREPRE.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default)]
pub struct PreMarketSession {
    #[serde(rename = "preMarketPrice")]
    pub price: f64,
    #[serde(rename = "preMarketChange")]
    pub change: f64,
    #[serde(rename = "preMarketChangePercent")]
    pub change_percent: f64,
    #[serde(rename = "preMarketTime")]
    pub time: i64,
}

impl PreMarketSession {
    /// Time of the last pre-market trade.
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.time)
    }

    pub(crate) fn is_reported(&self) -> bool {
        self.price != 0.0 && self.time != 0
    }
}

/// Post-market pricing; current only while the market is in POST or POSTPOST.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default)]
pub struct PostMarketSession {
    #[serde(rename = "postMarketPrice")]
    pub price: f64,
    #[serde(rename = "postMarketChange")]
    pub change: f64,
    #[serde(rename = "postMarketChangePercent")]
    pub change_percent: f64,
    #[serde(rename = "postMarketTime")]
    pub time: i64,
}

impl PostMarketSession {
    /// Time of the last post-market trade.
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.time)
    }

    pub(crate) fn is_reported(&self) -> bool {
        self.price != 0.0 && self.time != 0
    }
}

/// 52 week range and the distance of the current price from both ends.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default)]
pub struct FiftyTwoWeekRange {
    #[serde(rename = "fiftyTwoWeekLowChange")]
    pub low_change: f64,
    #[serde(rename = "fiftyTwoWeekLowChangePercent")]
    pub low_change_percent: f64,
    #[serde(rename = "fiftyTwoWeekHighChange")]
    pub high_change: f64,
    #[serde(rename = "fiftyTwoWeekHighChangePercent")]
    pub high_change_percent: f64,
    #[serde(rename = "fiftyTwoWeekLow")]
    pub low: f64,
    #[serde(rename = "fiftyTwoWeekHigh")]
    pub high: f64,
}

/// 50 and 200 day moving averages.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default, rename_all = "camelCase")]
pub struct MovingAverages {
    pub fifty_day_average: f64,
    pub fifty_day_average_change: f64,
    pub fifty_day_average_change_percent: f64,
    pub two_hundred_day_average: f64,
    pub two_hundred_day_average_change: f64,
    pub two_hundred_day_average_change_percent: f64,
}

/// Average daily volumes.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default)]
pub struct VolumeStats {
    #[serde(rename = "averageDailyVolume3Month")]
    pub average_daily_volume_3_month: u64,
    #[serde(rename = "averageDailyVolume10Day")]
    pub average_daily_volume_10_day: u64,
}

/// Descriptive exchange and source metadata.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default)]
pub struct ExchangeMeta {
    #[serde(rename = "quoteSourceName")]
    pub quote_source: String,
    /// Currency code the prices are quoted in.
    pub currency: String,
    pub tradeable: bool,
    /// Minutes the exchange feed lags real time.
    #[serde(rename = "exchangeDataDelayedBy")]
    pub data_delay: i64,
    #[serde(rename = "fullExchangeName")]
    pub full_exchange_name: String,
    #[serde(rename = "sourceInterval")]
    pub source_interval: i64,
    #[serde(rename = "exchangeTimezoneName")]
    pub exchange_timezone_name: String,
    #[serde(rename = "exchangeTimezoneShortName")]
    pub exchange_timezone_short_name: String,
    #[serde(rename = "gmtOffSetMilliseconds")]
    pub gmt_offset_millis: i64,
    /// Market id, e.g. `us_market`.
    pub market: String,
    /// Exchange id, e.g. `NMS`.
    pub exchange: String,
}

impl ExchangeMeta {
    /// Exchange offset from UTC, `None` if out of range.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        let secs = i32::try_from(self.gmt_offset_millis / 1000).ok()?;
        FixedOffset::east_opt(secs)
    }
}

/// Earnings, dividend and valuation data.
///
/// Complete for equities; funds report part of it.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default, rename_all = "camelCase")]
pub struct EquityFundamentals {
    pub eps_trailing_twelve_months: f64,
    pub eps_forward: f64,
    pub earnings_timestamp: i64,
    pub earnings_timestamp_start: i64,
    pub earnings_timestamp_end: i64,
    pub trailing_annual_dividend_rate: f64,
    pub dividend_date: i64,
    pub trailing_annual_dividend_yield: f64,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: f64,
    #[serde(rename = "forwardPE")]
    pub forward_pe: f64,
    pub book_value: f64,
    pub price_to_book: f64,
    pub shares_outstanding: u64,
    pub market_cap: u64,
}

impl EquityFundamentals {
    /// Next (or last) earnings announcement.
    pub fn earnings_time_utc(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.earnings_timestamp)
    }

    /// Dividend payment date.
    pub fn dividend_date_utc(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.dividend_date)
    }
}

/// Fund return figures (ETF and mutual fund).
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default, rename_all = "camelCase")]
pub struct FundPerformance {
    pub ytd_return: f64,
    pub trailing_three_month_returns: f64,
    pub trailing_three_month_nav_returns: f64,
}

/// Contract terms of an option or future.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(default, rename_all = "camelCase")]
pub struct DerivativeContract {
    pub underlying_symbol: String,
    pub open_interest: u64,
    /// Expiry as epoch seconds.
    pub expire_date: i64,
    pub strike: f64,
    pub underlying_exchange_symbol: String,
    #[serde(rename = "headSymbolAsString")]
    pub head_symbol: String,
    #[serde(rename = "contractSymbol")]
    pub is_contract_symbol: bool,
}

impl DerivativeContract {
    /// Contract expiry.
    pub fn expiry_utc(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.expire_date)
    }
}
