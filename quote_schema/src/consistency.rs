//! Cross-field checks on a decoded quote.
//!
//! The schema accepts whatever the provider sends; these checks only report.
//! Zero means "not reported", so a range with a zero end is never flagged.
use std::fmt;

use crate::quote::Quote;

/// A cross-field relationship the quote does not satisfy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inconsistency {
    /// Regular session day high below day low.
    InvertedDayRange {
        /// Reported day high.
        high: f64,
        /// Reported day low.
        low: f64,
    },
    /// 52 week high below 52 week low.
    InvertedFiftyTwoWeekRange {
        /// Reported 52 week high.
        high: f64,
        /// Reported 52 week low.
        low: f64,
    },
    /// Ask below bid. Markets cross transiently, so this is informational.
    CrossedBook {
        /// Best bid.
        bid: f64,
        /// Best ask.
        ask: f64,
    },
    /// Extended-hours fields for a phase the market is not in.
    ExtendedSessionOutOfPhase,
}

impl Inconsistency {
    /// Price ranges that cannot be right, as opposed to transient market conditions.
    pub fn is_range_violation(&self) -> bool {
        matches!(
            self,
            Inconsistency::InvertedDayRange { .. } | Inconsistency::InvertedFiftyTwoWeekRange { .. }
        )
    }
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::InvertedDayRange { high, low } => {
                write!(f, "day high {high} below day low {low}")
            }
            Inconsistency::InvertedFiftyTwoWeekRange { high, low } => {
                write!(f, "52 week high {high} below 52 week low {low}")
            }
            Inconsistency::CrossedBook { bid, ask } => write!(f, "ask {ask} below bid {bid}"),
            Inconsistency::ExtendedSessionOutOfPhase => {
                f.write_str("extended session fields outside their market phase")
            }
        }
    }
}

fn inverted(high: f64, low: f64) -> bool {
    high != 0.0 && low != 0.0 && high < low
}

impl Quote {
    /// Every cross-field relationship this quote breaks, in field-group order.
    pub fn inconsistencies(&self) -> Vec<Inconsistency> {
        let mut found = Vec::new();

        let regular = self.regular();
        if inverted(regular.day_high, regular.day_low) {
            found.push(Inconsistency::InvertedDayRange {
                high: regular.day_high,
                low: regular.day_low,
            });
        }

        let depth = self.depth();
        if inverted(depth.ask, depth.bid) {
            found.push(Inconsistency::CrossedBook {
                bid: depth.bid,
                ask: depth.ask,
            });
        }

        let state = self.market_state();
        let stray_pre = self.pre_market_fields().is_reported() && !state.is_pre_market();
        let stray_post = self.post_market_fields().is_reported() && !state.is_post_market();
        if stray_pre || stray_post {
            found.push(Inconsistency::ExtendedSessionOutOfPhase);
        }

        let range = self.fifty_two_week();
        if inverted(range.high, range.low) {
            found.push(Inconsistency::InvertedFiftyTwoWeekRange {
                high: range.high,
                low: range.low,
            });
        }

        found
    }
}
