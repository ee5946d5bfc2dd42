// Chapter 4: GitHub Actions pipeline that deploys to Firebase Hosting.

use crate::content::{CHAPTERS, REPO_URL};
use crate::domain::block::ParagraphStyle;
use crate::domain::report::Report;
use crate::domain::section::HeadingLevel;

const PIPELINE: &str = "name: Deploy to Firebase on merge
on:
  push:
    branches: [main]
jobs:
  build_and_deploy:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v2
      - uses: actions/setup-node@v2
        with:
          node-version: '16'
      - run: npm ci
      - run: npm run build
      - uses: FirebaseExtended/action-hosting-deploy@v0
        with:
          repoToken: '${{ secrets.GITHUB_TOKEN }}'
          firebaseServiceAccount: '${{ secrets.FIREBASE_SERVICE_ACCOUNT }}'
          projectId: cine-aurora-84d97";

const FLOW: [&str; 4] = [
    "1. Trigger: Push para a branch main",
    "2. Setup: Instalação do Node.js e dependências",
    "3. Build: Compilação do projeto React",
    "4. Deploy: Publicação no Firebase Hosting",
];

pub fn write(report: &mut Report) {
    report
        .heading(CHAPTERS[3], HeadingLevel::One)
        .heading("4.1 Pipeline CI/CD", HeadingLevel::Two)
        .paragraph("Configuração do GitHub Actions para deploy automático:")
        .styled(PIPELINE, ParagraphStyle::IntenseQuote)
        .heading("4.2 Fluxo do Pipeline", HeadingLevel::Two);

    for step in FLOW {
        report.paragraph(step);
    }

    report
        .heading("4.3 Evidências", HeadingLevel::Two)
        .paragraph(&format!("• Repositório: {REPO_URL}"))
        .paragraph("• Histórico de implantações disponível no Firebase Console")
        .page_break();
}
