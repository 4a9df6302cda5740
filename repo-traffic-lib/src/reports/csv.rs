use crate::Result;
use crate::traffic::{DateBounds, SummaryRow};
use std::io::Write;
use strum::IntoEnumIterator;

/// Columns of the summary export, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::IntoStaticStr)]
pub enum SummaryColumn {
    #[strum(serialize = "GitHub Account")]
    Account,

    #[strum(serialize = "Repository")]
    Repository,

    #[strum(serialize = "Date Range")]
    DateRange,

    #[strum(serialize = "Total Views")]
    TotalViews,

    #[strum(serialize = "Total Unique Visitors")]
    TotalUniques,
}

impl SummaryColumn {
    #[must_use]
    pub fn title(self) -> &'static str {
        self.into()
    }

    fn value(self, row: &SummaryRow) -> String {
        match self {
            Self::Account => row.account().to_string(),
            Self::Repository => row.repo_name().to_string(),
            Self::DateRange => row.date_range_label.clone(),
            Self::TotalViews => row.total_views.to_string(),
            Self::TotalUniques => row.total_uniques.to_string(),
        }
    }
}

/// Write the summary rows as CSV with a header line.
pub fn generate<W: Write>(rows: &[SummaryRow], writer: W) -> Result<()> {
    let mut out = ::csv::Writer::from_writer(writer);

    out.write_record(SummaryColumn::iter().map(SummaryColumn::title))?;
    for row in rows {
        out.write_record(SummaryColumn::iter().map(|column| column.value(row)))?;
    }

    out.flush()?;
    Ok(())
}

/// Name of the export file when the user does not pick one.
#[must_use]
pub fn default_file_name(bounds: DateBounds) -> String {
    let (start, end) = bounds.sides("start", "end");
    format!("github-repo-summary_{start}_to_{end}.csv")
}
