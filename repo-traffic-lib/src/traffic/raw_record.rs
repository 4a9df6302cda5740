use super::{DailyMetric, RepoKey, TaggedDailyMetric};
use crate::Result;
use chrono::{DateTime, NaiveDate, Utc};
use ohno::{EnrichableExt, IntoAppError, bail};
use serde::{Deserialize, Serialize};

/// A daily record exactly as served by the stats API.
///
/// Every field is optional on the wire. Validation happens when converting into
/// [`DailyMetric`] or [`TaggedDailyMetric`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub uniques: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_name: Option<String>,
}

impl RawRecord {
    /// Validate into a per-repository metric.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is missing or malformed. Missing counters are zero.
    pub fn to_metric(&self) -> Result<DailyMetric> {
        let Some(text) = self.date.as_deref() else {
            bail!("record has no date");
        };

        let date = parse_date(text).into_app_err_with(|| format!("record has an invalid date '{text}'"))?;

        Ok(DailyMetric::new(date, self.views.unwrap_or(0), self.uniques.unwrap_or(0)))
    }

    /// Validate into a metric tagged with its account and repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is missing or malformed, or if the account or
    /// repository name is missing.
    pub fn to_tagged_metric(&self) -> Result<TaggedDailyMetric> {
        let metric = self.to_metric()?;

        let Some(account) = self.account.as_deref() else {
            bail!("record for {} has no account", metric.date);
        };

        let Some(repo_name) = self.repo_name.as_deref() else {
            bail!("record for {} in account '{account}' has no repo_name", metric.date);
        };

        Ok(TaggedDailyMetric::new(RepoKey::new(account, repo_name), metric))
    }
}

/// Parse a calendar day written as `YYYY-MM-DD`.
///
/// Full RFC 3339 timestamps are also accepted and reduced to their UTC date.
#[must_use]
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.with_timezone(&Utc).date_naive()))
}

/// Validate a batch of per-repository records, preserving their order.
///
/// # Errors
///
/// Fails on the first record with a missing or malformed date.
pub fn parse_metrics(records: &[RawRecord]) -> Result<Vec<DailyMetric>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| record.to_metric().map_err(|e| e.enrich_with(|| format!("validating record #{index}"))))
        .collect()
}

/// Validate a batch of flat, cross-repository records, preserving their order.
///
/// # Errors
///
/// Fails on the first record with a missing or malformed date, or without an
/// account or repository name.
pub fn parse_tagged_metrics(records: &[RawRecord]) -> Result<Vec<TaggedDailyMetric>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .to_tagged_metric()
                .map_err(|e| e.enrich_with(|| format!("validating record #{index}")))
        })
        .collect()
}
