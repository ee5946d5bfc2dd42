// Chapter 3: media lives behind external links.

use crate::content::CHAPTERS;
use crate::domain::block::ParagraphStyle;
use crate::domain::report::Report;
use crate::domain::section::HeadingLevel;

const LINK_SAMPLE: &str = r#"{
        thumbnailUrl: "https://drive.google.com/...",  // Imagem de capa
        bannerUrl: "https://i.ibb.co/...",           // Banner
        videoUrl: "https://vimeo.com/...",           // Conteúdo de vídeo
    }"#;

const ADVANTAGES: [&str; 4] = [
    "• Custo zero de armazenamento",
    "• Sem preocupação com otimização de mídia",
    "• Escalabilidade ilimitada",
    "• Redução da carga no servidor",
];

pub fn write(report: &mut Report) {
    report
        .heading(CHAPTERS[2], HeadingLevel::One)
        .paragraph("Estratégia de armazenamento utilizando links externos:")
        .heading("3.1 Provedores Utilizados", HeadingLevel::Two)
        .paragraph("• Imagens: Google Drive, ImgBB")
        .paragraph("• Vídeos: Vimeo, YouTube")
        .heading("3.2 Estrutura de Dados", HeadingLevel::Two)
        .paragraph("Exemplo de estrutura com links externos:")
        .styled(LINK_SAMPLE, ParagraphStyle::IntenseQuote)
        .heading("3.3 Vantagens", HeadingLevel::Two);

    for line in ADVANTAGES {
        report.paragraph(line);
    }
    report.page_break();
}
