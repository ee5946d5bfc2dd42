// Chapter 1: where the web app is hosted.

use crate::content::{APP_URL, CHAPTERS, KV_HEADER};
use crate::domain::block::{ParagraphStyle, TableBlock};
use crate::domain::report::Report;
use crate::domain::section::HeadingLevel;

const INSTANCE: [[&str; 2]; 6] = [
    ["Provider", "Google Cloud Platform (Firebase Hosting)"],
    ["Região", "us-central (padrão Firebase)"],
    ["URL Pública", APP_URL],
    ["Tecnologia", "Firebase Hosting com CDN global"],
    ["Portas Abertas", "80 (HTTP), 443 (HTTPS)"],
    ["Tipo de Hospedagem", "PaaS (Plataforma como Serviço)"],
];

pub fn write(report: &mut Report) {
    report
        .heading(CHAPTERS[0], HeadingLevel::One)
        .heading("1.1 Dados da Instância", HeadingLevel::Two)
        .table(TableBlock::from_literals(KV_HEADER, &INSTANCE))
        .blank()
        .styled(
            &format!("Link do App: {APP_URL}"),
            ParagraphStyle::IntenseQuote,
        )
        .page_break();
}
