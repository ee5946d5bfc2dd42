// Chapter 5: Firebase monitoring, with the one three-column table.

use crate::content::CHAPTERS;
use crate::domain::block::TableBlock;
use crate::domain::report::Report;
use crate::domain::section::HeadingLevel;
use crate::error::ReportResult;

const PERFORMANCE_HEADER: [&str; 3] = ["Métrica", "Média", "Pior 1%"];

/// (metric, mean, worst 1%) as reported by Firebase Performance
const PERFORMANCE: [(&str, &str, &str); 2] = [
    ("Tempo de Inicialização (app_start)", "1.1s", "3.7s"),
    ("Tempo de Renderização (screen_view)", "1.3s", "4.5s"),
];

pub fn write(report: &mut Report) -> ReportResult<()> {
    let mut performance = TableBlock::with_header(PERFORMANCE_HEADER);
    for (metric, mean, worst) in PERFORMANCE {
        performance.push_row([metric, mean, worst])?;
    }

    report
        .heading(CHAPTERS[4], HeadingLevel::One)
        .heading("5.1 Ferramentas Utilizadas", HeadingLevel::Two)
        .paragraph("• Firebase Performance Monitoring")
        .paragraph("• Firebase Analytics")
        .paragraph("• Firebase Crashlytics");

    report
        .heading("5.2 Métricas Coletadas", HeadingLevel::Two)
        .heading("Desempenho", HeadingLevel::Three)
        .table(performance)
        .blank()
        .heading("Uso", HeadingLevel::Three)
        .paragraph("• Usuários ativos diários")
        .paragraph("• Eventos de navegação")
        .paragraph("• Taxa de retenção")
        .heading("Estabilidade", HeadingLevel::Three)
        .paragraph("• Taxa de falhas")
        .paragraph("• Erros não tratados")
        .paragraph("• Dispositivos afetados");

    // No page break: the closing chapter follows on the same page
    report
        .heading("5.3 Acesso", HeadingLevel::Two)
        .paragraph("Console do Firebase: https://console.firebase.google.com/")
        .paragraph("Projeto: Cine Aurora");
    Ok(())
}
