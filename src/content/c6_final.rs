// Chapter 6: next steps and contact links.

use crate::content::{APP_URL, CHAPTERS, REPO_URL};
use crate::domain::report::Report;
use crate::domain::section::HeadingLevel;

/// Closing chapter: three planned follow-ups, then the repository
/// and app links.
pub fn write(report: &mut Report) {
    report
        .heading(CHAPTERS[5], HeadingLevel::One)
        .heading("Próximos Passos", HeadingLevel::Two)
        .paragraph("1. Implementar testes automatizados")
        .paragraph("2. Configurar alertas de monitoramento")
        .paragraph("3. Otimizar desempenho das telas mais lentas")
        .heading("Contato", HeadingLevel::Two)
        .paragraph(&format!("• Repositório: {REPO_URL}"))
        .paragraph(&format!("• Aplicação: {APP_URL}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::block::Block;

    #[test]
    fn test_closing_chapter_lists_steps_then_links() {
        let mut report = Report::new("header");
        write(&mut report);

        let headings: Vec<&str> = report.headings().map(|s| s.title.as_str()).collect();
        assert_eq!(headings, [CHAPTERS[5], "Próximos Passos", "Contato"]);

        let texts: Vec<&str> = report
            .blocks()
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(p) => Some(p.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 5);
        assert!(texts[0].starts_with("1. "));
        assert_eq!(texts[3], format!("• Repositório: {REPO_URL}"));
        assert_eq!(texts[4], format!("• Aplicação: {APP_URL}"));
    }
}
