use serde::{Deserialize, Serialize};

/// Canonical fundamental metrics, provider-agnostic.
///
/// Every field is optional: the providers disclose different subsets, and
/// the scorer treats absence as "no contribution", never as an error.
/// Ratio fields are decimal fractions (0.15 = 15%); the normalizer is
/// responsible for making that true regardless of the source.
///
/// Serde names are the snapshot wire keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalMetrics {
    /// Forward price-to-earnings ratio.
    #[serde(rename = "pe_fwd")]
    pub forward_pe: Option<f64>,

    /// Trailing price-to-earnings ratio.
    #[serde(rename = "pe")]
    pub trailing_pe: Option<f64>,

    /// Forward PEG ratio. The fallback provider never supplies this and
    /// no derivation from growth data is attempted.
    #[serde(rename = "peg_fwd")]
    pub forward_peg: Option<f64>,

    /// Gross margin.
    pub gross_margin: Option<f64>,

    /// Operating margin.
    #[serde(rename = "op_margin")]
    pub operating_margin: Option<f64>,

    /// Revenue growth, year over year.
    #[serde(rename = "rev_yoy")]
    pub revenue_growth: Option<f64>,

    /// EPS growth, year over year.
    #[serde(rename = "eps_yoy")]
    pub eps_growth: Option<f64>,

    /// Return on invested capital, degraded to return on equity when the
    /// provider discloses nothing better.
    pub roic: Option<f64>,

    /// Debt-to-equity ratio.
    #[serde(rename = "de_ratio")]
    pub debt_to_equity: Option<f64>,
}
