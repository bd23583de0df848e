//! CSV export of project progress.

use crate::{model::report::ProgressDto, server::error::Error};

/// Header row of the progress export.
pub const PROGRESS_CSV_HEADER: [&str; 6] = [
    "Proyecto",
    "Responsable",
    "Pendiente",
    "En curso",
    "Finalizada",
    "Avance (%)",
];

/// Renders progress rows as CSV text with a header row.
pub fn progress_csv(rows: &[ProgressDto]) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(PROGRESS_CSV_HEADER)?;

    for row in rows {
        writer.write_record([
            row.name.clone(),
            row.responsible.clone(),
            row.pending.to_string(),
            row.in_progress.to_string(),
            row.done.to_string(),
            format!("{:.1}", row.completion_pct),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| Error::IoError(err.into_error()))?;

    String::from_utf8(bytes)
        .map_err(|err| Error::InternalError(format!("CSV export is not valid UTF-8: {}", err)))
}
