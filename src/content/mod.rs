// ============================================================
// Layer 4: Report Content
// ============================================================
// The Cine Aurora technical documentation, written as literal
// text. Each chapter lives in its own module and appends its
// blocks to the shared Report in document order:
//
//   cover      → title, subtitle, date, table of contents
//   c1_app     → 1. App (frontend/backend)
//   c2_database→ 2. Banco de Dados
//   c3_storage → 3. Armazenamento
//   c4_infra   → 4. Infraestrutura + CI/CD
//   c5_monitoring → 5. Monitoramento e Logs
//   c6_final   → 6. Considerações Finais
//
// The only non-literal input is the date stamped on the cover.

use chrono::NaiveDate;

use crate::domain::report::Report;
use crate::error::ReportResult;

pub mod cover;
pub mod c1_app;
pub mod c2_database;
pub mod c3_storage;
pub mod c4_infra;
pub mod c5_monitoring;
pub mod c6_final;

/// Chapter headings, shared by the table of contents and the
/// chapters themselves so the two never drift apart.
pub const CHAPTERS: [&str; 6] = [
    "1. Entrega 01: App (frontend/backend)",
    "2. Entrega 02: Banco de Dados",
    "3. Entrega 03: Armazenamento",
    "4. Entrega 04: Infraestrutura + CI/CD",
    "5. Entrega 05: Monitoramento e Logs",
    "6. Considerações Finais",
];

/// Header row shared by the key/value tables
pub const KV_HEADER: [&str; 2] = ["Item", "Detalhe"];

pub const APP_URL: &str = "https://cine-aurora-84d97.web.app";
pub const REPO_URL: &str = "https://github.com/SantzL7/CINE-AURORA";

/// Build the complete report stamped with `date`.
pub fn build_report(header_text: &str, date: NaiveDate) -> ReportResult<Report> {
    let mut report = Report::new(header_text);

    cover::write(&mut report, date);
    c1_app::write(&mut report);
    c2_database::write(&mut report);
    c3_storage::write(&mut report);
    c4_infra::write(&mut report);
    c5_monitoring::write(&mut report)?;
    c6_final::write(&mut report);

    Ok(report)
}
