//! Machine-readable renderings of an analysis run.

use std::io::Write;

use chrono::{SecondsFormat, Utc};
use roster_model::{AnalysisRun, CombinedAnalysis, PlayerAnalysis};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    generated_at: String,
    analyses: &'a [PlayerAnalysis],
    combined: &'a CombinedAnalysis,
}

/// Pretty JSON of the run, stamped with the current UTC time.
pub fn render_json(run: &AnalysisRun) -> serde_json::Result<String> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        analyses: &run.analyses,
        combined: &run.combined,
    };
    serde_json::to_string_pretty(&report)
}

/// Writes one `file,data_type,metric,value` record per breakdown entry.
pub fn write_stats_csv<W: Write>(run: &AnalysisRun, writer: W) -> csv::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["file", "data_type", "metric", "value"])?;
    for analysis in &run.analyses {
        for (metric, average) in analysis.stats_breakdown.iter() {
            out.write_record([
                analysis.file_name.as_str(),
                analysis.data_type.as_str(),
                metric,
                average.as_str(),
            ])?;
        }
    }
    out.flush()?;
    Ok(())
}
