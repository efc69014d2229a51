//! Quote record, its builder and its encodings.
//!
//! A `Quote` is a snapshot of one instrument as of a fetch. It is immutable:
//! fields are private, accessors hand out shared references, and a new fetch
//! produces a new value. Every field group is kept on the record regardless of
//! instrument type; the gated accessors (`equity`, `fund`, `derivative`,
//! `extended_session`) return `None` where a group carries no meaning.
//!
//! Decoding is strict on the two classification keys. `Quote::from_json_*`
//! checks `quoteType` and `marketState` before the rest of the document, so an
//! unknown value comes back as [`SchemaError::UnrecognizedClassification`]
//! rather than a generic JSON error.
use bincode::{Decode, Encode};
use chrono::{DateTime, FixedOffset};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::classification::{InstrumentType, MarketState};
use crate::error::SchemaError;
use crate::fields::{
    DerivativeContract, Depth, EquityFundamentals, ExchangeMeta, FiftyTwoWeekRange,
    FundPerformance, MovingAverages, PostMarketSession, PreMarketSession, RegularSession,
    VolumeStats,
};

/// Wire key of the symbol.
pub const SYMBOL_KEY: &str = "symbol";
/// Wire key of the instrument type.
pub const QUOTE_TYPE_KEY: &str = "quoteType";
/// Wire key of the market state.
pub const MARKET_STATE_KEY: &str = "marketState";

/// Snapshot of one instrument's pricing, volume and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Quote {
    symbol: String,
    #[serde(rename = "marketState")]
    market_state: MarketState,
    #[serde(rename = "quoteType")]
    instrument_type: InstrumentType,
    #[serde(rename = "shortName", default)]
    short_name: String,
    #[serde(rename = "longName", default)]
    long_name: String,
    #[serde(flatten)]
    regular: RegularSession,
    #[serde(flatten)]
    depth: Depth,
    #[serde(flatten)]
    pre_market: PreMarketSession,
    #[serde(flatten)]
    post_market: PostMarketSession,
    #[serde(flatten)]
    fifty_two_week: FiftyTwoWeekRange,
    #[serde(flatten)]
    averages: MovingAverages,
    #[serde(flatten)]
    volume: VolumeStats,
    #[serde(flatten)]
    meta: ExchangeMeta,
    #[serde(flatten)]
    equity: EquityFundamentals,
    #[serde(flatten)]
    fund: FundPerformance,
    #[serde(flatten)]
    derivative: DerivativeContract,
}

/// Extended-hours pricing that is current for the quote's market state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtendedSession<'a> {
    /// Market is in PRE or PREPRE.
    Pre(&'a PreMarketSession),
    /// Market is in POST or POSTPOST.
    Post(&'a PostMarketSession),
}

impl ExtendedSession<'_> {
    /// Last extended-hours price.
    pub fn price(&self) -> f64 {
        match self {
            ExtendedSession::Pre(s) => s.price,
            ExtendedSession::Post(s) => s.price,
        }
    }

    /// Change against the regular close.
    pub fn change(&self) -> f64 {
        match self {
            ExtendedSession::Pre(s) => s.change,
            ExtendedSession::Post(s) => s.change,
        }
    }

    /// Change against the regular close, in percent.
    pub fn change_percent(&self) -> f64 {
        match self {
            ExtendedSession::Pre(s) => s.change_percent,
            ExtendedSession::Post(s) => s.change_percent,
        }
    }

    /// Epoch seconds of the last extended-hours trade.
    pub fn time(&self) -> i64 {
        match self {
            ExtendedSession::Pre(s) => s.time,
            ExtendedSession::Post(s) => s.time,
        }
    }
}

/// Borrowed view of the type-specific groups, keyed by instrument type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InstrumentDetails<'a> {
    /// EQUITY.
    Equity(&'a EquityFundamentals),
    /// ETF or MUTUALFUND.
    Fund {
        /// Valuation fields funds share with equities.
        fundamentals: &'a EquityFundamentals,
        /// Fund returns.
        performance: &'a FundPerformance,
    },
    /// OPTION or FUTURE.
    Derivative(&'a DerivativeContract),
    /// INDEX or CURRENCY: no type-specific fields.
    Plain,
}

impl Quote {
    /// Starts a quote for `symbol` with every group zeroed.
    pub fn builder(
        symbol: impl Into<String>,
        instrument_type: InstrumentType,
        market_state: MarketState,
    ) -> QuoteBuilder {
        QuoteBuilder {
            quote: Quote {
                symbol: symbol.into(),
                market_state,
                instrument_type,
                short_name: String::new(),
                long_name: String::new(),
                regular: RegularSession::default(),
                depth: Depth::default(),
                pre_market: PreMarketSession::default(),
                post_market: PostMarketSession::default(),
                fifty_two_week: FiftyTwoWeekRange::default(),
                averages: MovingAverages::default(),
                volume: VolumeStats::default(),
                meta: ExchangeMeta::default(),
                equity: EquityFundamentals::default(),
                fund: FundPerformance::default(),
                derivative: DerivativeContract::default(),
            },
        }
    }

    /// Primary identifying key.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Session phase of the instrument's exchange.
    pub fn market_state(&self) -> MarketState {
        self.market_state
    }

    /// Asset class; decides which conditional groups are meaningful.
    pub fn instrument_type(&self) -> InstrumentType {
        self.instrument_type
    }

    /// Short display name.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Long display name.
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Best available human-readable name, falling back to the symbol.
    pub fn display_name(&self) -> &str {
        [self.long_name.as_str(), self.short_name.as_str()]
            .into_iter()
            .find(|name| !name.is_empty())
            .unwrap_or(self.symbol.as_str())
    }

    /// Regular session pricing.
    pub fn regular(&self) -> &RegularSession {
        &self.regular
    }

    /// Top of book.
    pub fn depth(&self) -> &Depth {
        &self.depth
    }

    /// Pre-market fields, whatever the market state.
    pub fn pre_market_fields(&self) -> &PreMarketSession {
        &self.pre_market
    }

    /// Post-market fields, whatever the market state.
    pub fn post_market_fields(&self) -> &PostMarketSession {
        &self.post_market
    }

    /// 52 week range.
    pub fn fifty_two_week(&self) -> &FiftyTwoWeekRange {
        &self.fifty_two_week
    }

    /// Moving averages.
    pub fn moving_averages(&self) -> &MovingAverages {
        &self.averages
    }

    /// Average volumes.
    pub fn volume_stats(&self) -> &VolumeStats {
        &self.volume
    }

    /// Exchange and source metadata.
    pub fn meta(&self) -> &ExchangeMeta {
        &self.meta
    }

    /// Equity fields, whatever the instrument type.
    pub fn equity_fields(&self) -> &EquityFundamentals {
        &self.equity
    }

    /// Fund fields, whatever the instrument type.
    pub fn fund_fields(&self) -> &FundPerformance {
        &self.fund
    }

    /// Contract fields, whatever the instrument type.
    pub fn derivative_fields(&self) -> &DerivativeContract {
        &self.derivative
    }

    /// Equity fields when the instrument type carries them.
    pub fn equity(&self) -> Option<&EquityFundamentals> {
        self.instrument_type
            .has_equity_fields()
            .then_some(&self.equity)
    }

    /// Fund fields for ETF and MUTUALFUND.
    pub fn fund(&self) -> Option<&FundPerformance> {
        self.instrument_type.has_fund_fields().then_some(&self.fund)
    }

    /// Contract fields for OPTION and FUTURE.
    pub fn derivative(&self) -> Option<&DerivativeContract> {
        self.instrument_type
            .has_derivative_fields()
            .then_some(&self.derivative)
    }

    /// Pre- or post-market pricing current for the market state, if any.
    pub fn extended_session(&self) -> Option<ExtendedSession<'_>> {
        if self.market_state.is_pre_market() {
            Some(ExtendedSession::Pre(&self.pre_market))
        } else if self.market_state.is_post_market() {
            Some(ExtendedSession::Post(&self.post_market))
        } else {
            None
        }
    }

    /// Type-specific groups as a tagged union.
    pub fn details(&self) -> InstrumentDetails<'_> {
        match self.instrument_type {
            InstrumentType::Equity => InstrumentDetails::Equity(&self.equity),
            InstrumentType::Etf | InstrumentType::MutualFund => InstrumentDetails::Fund {
                fundamentals: &self.equity,
                performance: &self.fund,
            },
            InstrumentType::Option | InstrumentType::Future => {
                InstrumentDetails::Derivative(&self.derivative)
            }
            InstrumentType::Index | InstrumentType::ForexPair => InstrumentDetails::Plain,
        }
    }

    /// Regular market time in the exchange's own offset.
    pub fn regular_market_local_time(&self) -> Option<DateTime<FixedOffset>> {
        let offset = self.meta.utc_offset()?;
        self.regular.time_utc().map(|t| t.with_timezone(&offset))
    }

    /// Decodes a quote from a JSON document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_json_value(value)
    }

    /// Decodes a quote from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    /// Decodes a quote from an already parsed JSON object.
    pub fn from_json_value(value: Value) -> Result<Self, SchemaError> {
        let object = value.as_object().ok_or_else(|| {
            SchemaError::Format(format!("quote must be a JSON object, got {value}"))
        })?;

        if !object.contains_key(SYMBOL_KEY) {
            return Err(SchemaError::MissingField(SYMBOL_KEY));
        }
        let instrument_type =
            InstrumentType::parse_wire(classification_str(object, QUOTE_TYPE_KEY)?)?;
        let market_state = MarketState::parse_wire(classification_str(object, MARKET_STATE_KEY)?)?;

        let quote: Quote = serde_json::from_value(value)?;
        debug!(
            "Decoded {} quote for {} ({})",
            instrument_type, quote.symbol, market_state
        );
        Ok(quote)
    }

    /// Encodes the quote to its JSON wire shape.
    ///
    /// Fails with [`SchemaError::Format`] when a numeric field is NaN or
    /// infinite, since JSON has no literal for it.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, SchemaError> {
        let json = serde_json::to_vec(&self.to_json_value()?)?;
        Ok(json)
    }

    /// Encodes the quote to a JSON object.
    ///
    /// Same finiteness rule as [`Quote::to_json_vec`].
    pub fn to_json_value(&self) -> Result<Value, SchemaError> {
        let value = serde_json::to_value(self)?;
        ensure_finite(&value)?;
        Ok(value)
    }

    /// Encodes the quote as a compact `bincode` snapshot.
    pub fn to_snapshot_bytes(&self) -> Result<Vec<u8>, SchemaError> {
        let bytes = bincode::encode_to_vec(self, bincode::config::standard())?;
        Ok(bytes)
    }

    /// Decodes a snapshot written by [`Quote::to_snapshot_bytes`].
    pub fn from_snapshot_bytes(bytes: &[u8]) -> Result<Self, SchemaError> {
        decode_snapshot_exact(bytes)
    }
}

/// Decodes a JSON array of quotes, or a single quote object.
///
/// Stops at the first quote that fails to decode.
pub fn decode_quotes(bytes: &[u8]) -> Result<Vec<Quote>, SchemaError> {
    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::Array(items) => items.into_iter().map(Quote::from_json_value).collect(),
        other => Ok(vec![Quote::from_json_value(other)?]),
    }
}

/// Encodes several quotes into one `bincode` snapshot.
pub fn encode_snapshots(quotes: &[Quote]) -> Result<Vec<u8>, SchemaError> {
    let bytes = bincode::encode_to_vec(quotes, bincode::config::standard())?;
    Ok(bytes)
}

/// Decodes a snapshot written by [`encode_snapshots`].
pub fn decode_snapshots(bytes: &[u8]) -> Result<Vec<Quote>, SchemaError> {
    let quotes: Vec<Quote> = decode_snapshot_exact(bytes)?;
    debug!("Decoded snapshot of {} quotes", quotes.len());
    Ok(quotes)
}

/// Upper bound on what a snapshot decode may allocate.
pub const SNAPSHOT_DECODE_LIMIT: usize = 64 * 1024 * 1024;

fn decode_snapshot_exact<T: Decode<()>>(bytes: &[u8]) -> Result<T, SchemaError> {
    let config = bincode::config::standard().with_limit::<SNAPSHOT_DECODE_LIMIT>();
    let (decoded, read): (T, usize) = bincode::decode_from_slice(bytes, config)?;
    if read != bytes.len() {
        return Err(SchemaError::Format(format!(
            "snapshot has {} trailing bytes",
            bytes.len() - read
        )));
    }
    Ok(decoded)
}

// No quote field is nullable, so a null in the encoded object can only come
// from serde_json writing a NaN or infinite f64.
fn ensure_finite(value: &Value) -> Result<(), SchemaError> {
    if let Some((key, _)) = value
        .as_object()
        .and_then(|object| object.iter().find(|(_, field)| field.is_null()))
    {
        return Err(SchemaError::Format(format!(
            "{key} is not a finite number"
        )));
    }
    Ok(())
}

fn classification_str<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a str, SchemaError> {
    match object.get(key) {
        None | Some(Value::Null) => Err(SchemaError::MissingField(key)),
        Some(Value::String(raw)) => Ok(raw),
        Some(other) => Err(SchemaError::Format(format!(
            "{key} must be a string, got {other}"
        ))),
    }
}

/// Assembles a [`Quote`] group by group.
///
/// Groups left unset stay zeroed. `build` does not judge plausibility.
#[derive(Debug, Clone)]
pub struct QuoteBuilder {
    quote: Quote,
}

impl QuoteBuilder {
    /// Sets the short display name.
    pub fn short_name(mut self, name: impl Into<String>) -> Self {
        self.quote.short_name = name.into();
        self
    }

    /// Sets the long display name.
    pub fn long_name(mut self, name: impl Into<String>) -> Self {
        self.quote.long_name = name.into();
        self
    }

    /// Sets regular session pricing.
    pub fn regular(mut self, regular: RegularSession) -> Self {
        self.quote.regular = regular;
        self
    }

    /// Sets top of book.
    pub fn depth(mut self, depth: Depth) -> Self {
        self.quote.depth = depth;
        self
    }

    /// Sets pre-market pricing.
    pub fn pre_market(mut self, pre_market: PreMarketSession) -> Self {
        self.quote.pre_market = pre_market;
        self
    }

    /// Sets post-market pricing.
    pub fn post_market(mut self, post_market: PostMarketSession) -> Self {
        self.quote.post_market = post_market;
        self
    }

    /// Sets the 52 week range.
    pub fn fifty_two_week(mut self, range: FiftyTwoWeekRange) -> Self {
        self.quote.fifty_two_week = range;
        self
    }

    /// Sets moving averages.
    pub fn moving_averages(mut self, averages: MovingAverages) -> Self {
        self.quote.averages = averages;
        self
    }

    /// Sets average volumes.
    pub fn volume_stats(mut self, volume: VolumeStats) -> Self {
        self.quote.volume = volume;
        self
    }

    /// Sets exchange metadata.
    pub fn meta(mut self, meta: ExchangeMeta) -> Self {
        self.quote.meta = meta;
        self
    }

    /// Sets equity fundamentals.
    pub fn equity(mut self, equity: EquityFundamentals) -> Self {
        self.quote.equity = equity;
        self
    }

    /// Sets fund returns.
    pub fn fund(mut self, fund: FundPerformance) -> Self {
        self.quote.fund = fund;
        self
    }

    /// Sets contract terms.
    pub fn derivative(mut self, derivative: DerivativeContract) -> Self {
        self.quote.derivative = derivative;
        self
    }

    /// Finishes the quote.
    pub fn build(self) -> Quote {
        self.quote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn equity_quote() -> Quote {
        Quote::builder("AAPL", InstrumentType::Equity, MarketState::Pre)
            .short_name("Apple Inc.")
            .regular(RegularSession {
                price: 189.84,
                time: 1_700_000_000,
                day_high: 190.5,
                day_low: 187.2,
                volume: 51_000_000,
                ..Default::default()
            })
            .pre_market(PreMarketSession {
                price: 190.1,
                change: 0.26,
                change_percent: 0.14,
                time: 1_700_030_000,
            })
            .meta(ExchangeMeta {
                currency: "USD".to_string(),
                gmt_offset_millis: -18_000_000,
                exchange: "NMS".to_string(),
                ..Default::default()
            })
            .equity(EquityFundamentals {
                trailing_pe: 15.2,
                market_cap: 2_950_000_000_000,
                ..Default::default()
            })
            .build()
    }

    #[test]
    fn builder_keeps_groups() {
        let quote = equity_quote();
        assert_eq!(quote.symbol(), "AAPL");
        assert_eq!(quote.display_name(), "Apple Inc.");
        assert_eq!(quote.regular().volume, 51_000_000);
        assert_eq!(quote.equity().map(|e| e.trailing_pe), Some(15.2));
        assert!(quote.derivative().is_none());
        assert!(quote.fund().is_none());
    }

    #[test]
    fn display_name_falls_back_to_symbol() {
        let quote = Quote::builder("EURUSD=X", InstrumentType::ForexPair, MarketState::Regular)
            .build();
        assert_eq!(quote.display_name(), "EURUSD=X");
        assert_eq!(quote.details(), InstrumentDetails::Plain);
    }

    #[test]
    fn extended_session_follows_market_state() {
        let quote = equity_quote();
        let session = quote.extended_session().expect("pre-market is current");
        assert!(matches!(session, ExtendedSession::Pre(_)));
        assert_eq!(session.price(), 190.1);
        assert_eq!(session.time(), 1_700_030_000);

        let closed = Quote::builder("AAPL", InstrumentType::Equity, MarketState::Closed).build();
        assert!(closed.extended_session().is_none());

        let post = Quote::builder("AAPL", InstrumentType::Equity, MarketState::PostPost)
            .post_market(PostMarketSession {
                change: -1.5,
                ..Default::default()
            })
            .build();
        assert_eq!(post.extended_session().map(|s| s.change()), Some(-1.5));
    }

    #[test]
    fn details_are_keyed_by_type() {
        let option = Quote::builder(
            "AAPL240119C00190000",
            InstrumentType::Option,
            MarketState::Regular,
        )
        .derivative(DerivativeContract {
            underlying_symbol: "AAPL".to_string(),
            strike: 190.0,
            ..Default::default()
        })
        .build();
        match option.details() {
            InstrumentDetails::Derivative(contract) => {
                assert_eq!(contract.underlying_symbol, "AAPL");
                assert_eq!(contract.strike, 190.0);
            }
            other => panic!("unexpected details: {other:?}"),
        }

        let fund = Quote::builder("VFIAX", InstrumentType::MutualFund, MarketState::Closed)
            .fund(FundPerformance {
                ytd_return: 12.5,
                ..Default::default()
            })
            .build();
        assert!(matches!(
            fund.details(),
            InstrumentDetails::Fund { performance, .. } if performance.ytd_return == 12.5
        ));
    }

    #[test]
    fn local_time_uses_exchange_offset() {
        let quote = equity_quote();
        let local = quote.regular_market_local_time().expect("time and offset");
        assert_eq!(local.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(local.timestamp(), 1_700_000_000);
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let quote = equity_quote();
        let bytes = quote.to_json_vec().expect("encode");
        let decoded = Quote::from_json_slice(&bytes).expect("decode");
        assert_eq!(decoded, quote);
    }

    #[test]
    fn encodes_wire_keys() {
        let value = equity_quote().to_json_value().expect("encode");
        assert_eq!(value["quoteType"], "EQUITY");
        assert_eq!(value["marketState"], "PRE");
        assert_eq!(value["regularMarketPrice"], 189.84);
        assert_eq!(value["preMarketPrice"], 190.1);
        assert_eq!(value["trailingPE"], 15.2);
        assert_eq!(value["gmtOffSetMilliseconds"], -18_000_000);
        assert!(value.get("regular").is_none());
    }

    #[test]
    fn snapshot_round_trip_is_lossless() {
        let quote = equity_quote();
        let bytes = quote.to_snapshot_bytes().expect("encode");
        let decoded = Quote::from_snapshot_bytes(&bytes).expect("decode");
        assert_eq!(decoded, quote);
    }

    #[test]
    fn snapshot_rejects_trailing_bytes() {
        let mut bytes = equity_quote().to_snapshot_bytes().expect("encode");
        bytes.push(0);
        let err = Quote::from_snapshot_bytes(&bytes).expect_err("must fail");
        assert!(matches!(err, SchemaError::Format(_)));
    }

    #[test]
    fn decode_reports_unknown_market_state() {
        let doc = json!({"symbol": "AAPL", "quoteType": "EQUITY", "marketState": "BOGUS"});
        let err = Quote::from_json_value(doc).expect_err("must fail");
        assert!(err.is_unrecognized_classification());
    }

    #[test]
    fn decode_reports_missing_classification() {
        let doc = json!({"symbol": "AAPL", "marketState": "REGULAR"});
        let err = Quote::from_json_value(doc).expect_err("must fail");
        assert!(matches!(err, SchemaError::MissingField("quoteType")));

        let doc = json!({"quoteType": "EQUITY", "marketState": "REGULAR"});
        let err = Quote::from_json_value(doc).expect_err("must fail");
        assert!(matches!(err, SchemaError::MissingField("symbol")));
    }

    #[test]
    fn decode_rejects_non_string_classification() {
        let doc = json!({"symbol": "AAPL", "quoteType": 1, "marketState": "REGULAR"});
        let err = Quote::from_json_value(doc).expect_err("must fail");
        assert!(matches!(err, SchemaError::Format(_)));
    }

    #[test]
    fn decode_rejects_non_object() {
        let err = Quote::from_json_str("[1, 2]").expect_err("must fail");
        assert!(matches!(err, SchemaError::Format(_)));
    }

    #[test]
    fn decode_quotes_accepts_array_and_object() {
        let single = br#"{"symbol":"SPY","quoteType":"ETF","marketState":"REGULAR"}"#;
        assert_eq!(decode_quotes(single).expect("object").len(), 1);

        let many = br#"[
            {"symbol":"SPY","quoteType":"ETF","marketState":"REGULAR"},
            {"symbol":"^GSPC","quoteType":"INDEX","marketState":"CLOSED"}
        ]"#;
        let quotes = decode_quotes(many).expect("array");
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[1].instrument_type(), InstrumentType::Index);
    }

    #[test]
    fn multi_quote_snapshot() {
        let quotes = vec![
            equity_quote(),
            Quote::builder("^GSPC", InstrumentType::Index, MarketState::Closed).build(),
        ];
        let bytes = encode_snapshots(&quotes).expect("encode");
        assert_eq!(decode_snapshots(&bytes).expect("decode"), quotes);
    }

    #[test]
    fn multi_quote_snapshot_rejects_trailing_bytes() {
        let mut bytes = encode_snapshots(&[equity_quote()]).expect("encode");
        bytes.extend_from_slice(&[1, 2, 3, 4]);
        let err = decode_snapshots(&bytes).expect_err("must fail");
        assert!(matches!(err, SchemaError::Format(_)));
    }

    #[test]
    fn snapshot_with_oversized_length_is_rejected() {
        // Varint marker for a u64 length of 2^40 quotes.
        let bytes = [0xFD, 0, 0, 0, 0, 0, 1, 0, 0];
        let err = decode_snapshots(&bytes).expect_err("must fail");
        assert!(matches!(err, SchemaError::BincodeDecode(_)));
    }

    #[test]
    fn encode_rejects_non_finite_numbers() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let quote = Quote::builder("AAPL", InstrumentType::Equity, MarketState::Regular)
                .regular(RegularSession {
                    price,
                    ..Default::default()
                })
                .build();
            let err = quote.to_json_vec().expect_err("must fail");
            assert!(
                matches!(&err, SchemaError::Format(msg) if msg.contains("regularMarketPrice")),
                "unexpected error: {err}"
            );
            assert!(quote.to_json_value().is_err());
        }
    }
}
