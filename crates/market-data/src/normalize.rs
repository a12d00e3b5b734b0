//! Normalization of provider payloads into [`CompanyData`].
//!
//! Pure mappings, no I/O. Whatever the source shape, the output carries
//! identical field semantics: prices in quote currency, ratios as decimal
//! fractions. Downstream scoring never needs to know which provider
//! answered.

use crate::models::{CompanyData, DataSource, FundamentalMetrics};
use crate::provider::fmp::FmpCompanyInfo;
use crate::provider::yahoo::YahooCompanyInfo;

/// Map a Yahoo payload into the canonical schema.
///
/// Price prefers the explicit current price, then the regular-market
/// price, then the chart last-price fallback. Return on capital prefers
/// capital employed, then invested capital, then equity.
pub fn normalize_yahoo(ticker: &str, info: YahooCompanyInfo) -> CompanyData {
    let name = info
        .long_name
        .or(info.short_name)
        .or_else(|| Some(ticker.to_uppercase()));

    let price = info
        .current_price
        .or(info.regular_market_price)
        .or(info.last_price);

    let roic = info
        .return_on_capital_employed
        .or(info.return_on_invested_capital)
        .or(info.return_on_equity);

    CompanyData {
        source: DataSource::Yahoo,
        name,
        price,
        market_cap: info.market_cap,
        cik: info.cik,
        metrics: FundamentalMetrics {
            forward_pe: info.forward_pe,
            trailing_pe: info.trailing_pe,
            forward_peg: info.peg_ratio,
            gross_margin: info.gross_margins,
            operating_margin: info.operating_margins,
            revenue_growth: info.revenue_growth,
            eps_growth: info.earnings_growth,
            roic,
            debt_to_equity: info.debt_to_equity,
        },
    }
}

/// Map an FMP payload into the canonical schema.
///
/// The trailing P/E ratio fills the forward-P/E slot, the closest figure
/// FMP discloses. Forward PEG stays absent.
pub fn normalize_fmp(ticker: &str, info: FmpCompanyInfo) -> CompanyData {
    let name = info
        .company_name
        .or(info.symbol)
        .or_else(|| Some(ticker.to_uppercase()));

    let roic = info
        .return_on_capital_employed
        .or(info.return_on_invested_capital)
        .or(info.return_on_equity);

    CompanyData {
        source: DataSource::Fmp,
        name,
        price: info.price,
        market_cap: info.market_cap,
        cik: info.cik,
        metrics: FundamentalMetrics {
            forward_pe: info.price_earnings_ratio,
            trailing_pe: None,
            forward_peg: None,
            gross_margin: info.gross_margin,
            operating_margin: info.operating_margin,
            revenue_growth: info.revenue_growth,
            eps_growth: info.eps_growth,
            roic,
            debt_to_equity: info.debt_to_equity,
        },
    }
}
