// Title page and table of contents.

use chrono::NaiveDate;

use crate::content::CHAPTERS;
use crate::domain::block::ParagraphStyle;
use crate::domain::report::Report;
use crate::domain::section::HeadingLevel;

/// Day-first date as printed on the cover, e.g. "03/06/2025"
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn write(report: &mut Report, date: NaiveDate) {
    report
        .centered_heading("Documentação Técnica", HeadingLevel::Title)
        .centered_heading("Plataforma de Streaming", HeadingLevel::One)
        .centered(&date.format(DATE_FORMAT).to_string())
        .blank();

    report.heading("Sumário", HeadingLevel::One);
    for chapter in CHAPTERS {
        report.styled(chapter, ParagraphStyle::ListNumber);
    }
    report.page_break();
}
