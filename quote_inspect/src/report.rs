//! One-line human-readable summaries of decoded quotes.
use quote_schema::{InstrumentDetails, Quote};

/// Formats `quote` as a single log line.
///
/// The time is shown in the exchange offset when the quote carries one,
/// otherwise in UTC.
pub fn summary_line(quote: &Quote) -> String {
    let regular = quote.regular();
    let mut line = format!(
        "{} [{}/{}] {} price={:.2}",
        quote.symbol(),
        quote.instrument_type(),
        quote.market_state(),
        quote.display_name(),
        regular.price,
    );

    let currency = &quote.meta().currency;
    if !currency.is_empty() {
        line.push(' ');
        line.push_str(currency);
    }
    line.push_str(&format!(
        " change={:+.2} ({:+.2}%) volume={}",
        regular.change, regular.change_percent, regular.volume
    ));

    if let Some(local) = quote.regular_market_local_time() {
        line.push_str(&format!(" time={}", local.to_rfc3339()));
    } else if let Some(utc) = regular.time_utc() {
        line.push_str(&format!(" time={}", utc.to_rfc3339()));
    }

    if let Some(session) = quote.extended_session() {
        line.push_str(&format!(
            " ext={:.2} ({:+.2}%)",
            session.price(),
            session.change_percent()
        ));
    }

    match quote.details() {
        InstrumentDetails::Equity(equity) => {
            line.push_str(&format!(" pe={:.2} cap={}", equity.trailing_pe, equity.market_cap));
        }
        InstrumentDetails::Fund { performance, .. } => {
            line.push_str(&format!(" ytd={:.2}%", performance.ytd_return));
        }
        InstrumentDetails::Derivative(contract) => {
            line.push_str(&format!(
                " underlying={} strike={:.2} oi={}",
                contract.underlying_symbol, contract.strike, contract.open_interest
            ));
        }
        InstrumentDetails::Plain => {}
    }

    line
}
