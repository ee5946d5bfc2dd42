// Chapter 2: Firestore and the shape of the "series" collection.

use crate::content::{CHAPTERS, KV_HEADER};
use crate::domain::block::{ParagraphStyle, TableBlock};
use crate::domain::report::Report;
use crate::domain::section::HeadingLevel;

const DATABASE: [[&str; 2]; 5] = [
    ["Tipo de Banco", "Firebase Firestore (NoSQL)"],
    ["Endpoint", "cine-aurora-84d97.firebaseio.com"],
    ["Região", "us-central (padrão Firebase)"],
    ["Conexão", "Firebase Web SDK v9 (modular)"],
    ["Autenticação", "Firebase Authentication"],
];

const SERIES_SCHEMA: &str = r#"{
        id: string,                  // ID único da série
        title: string,               // Título da série
        description: string,         // Sinopse
        thumbnailUrl: string,        // URL da miniatura
        bannerUrl: string,           // URL do banner
        releaseYear: number,         // Ano de lançamento
        genres: string[],            // Gêneros
        seasons: [                    // Temporadas
            {
                number: number,      // Número da temporada
                episodes: [          // Episódios
                    {
                        title: string,       // Título do episódio
                        description: string, // Sinopse
                        duration: string,    // Duração (ex: "45m")
                        videoUrl: string,    // URL do vídeo
                        thumbnailUrl: string // Thumbnail do episódio
                    }
                ]
            }
        ]
    }"#;

pub fn write(report: &mut Report) {
    report
        .heading(CHAPTERS[1], HeadingLevel::One)
        .heading("2.1 Descrição Técnica", HeadingLevel::Two)
        .table(TableBlock::from_literals(KV_HEADER, &DATABASE))
        .heading("2.2 Estrutura do Banco", HeadingLevel::Two)
        .paragraph("Estrutura principal da coleção \"series\":")
        .styled(SERIES_SCHEMA, ParagraphStyle::IntenseQuote)
        .page_break();
}
