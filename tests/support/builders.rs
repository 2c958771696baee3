// tests/support/builders.rs
use litreview::application::dto::{ArticleDto, QueryAnalysisDto};
use litreview::domain::article::{Article, PubmedId};

pub struct ArticleBuilder {
    pubmed_id: String,
    title: String,
    authors: Vec<String>,
    journal: String,
    year: i32,
    abstract_text: String,
    summary: Option<String>,
}

impl ArticleBuilder {
    pub fn new(pubmed_id: impl Into<String>) -> Self {
        Self {
            pubmed_id: pubmed_id.into(),
            title: "Test Article".into(),
            authors: vec!["Doe J".into()],
            journal: "Test Journal".into(),
            year: 2020,
            abstract_text: "An abstract.".into(),
            summary: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn authors(mut self, authors: &[&str]) -> Self {
        self.authors = authors.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = journal.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn abstract_text(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = text.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn dto(self) -> ArticleDto {
        ArticleDto {
            pubmed_id: self.pubmed_id,
            title: self.title,
            authors: self.authors,
            journal: self.journal,
            year: self.year,
            abstract_text: self.abstract_text,
            summary: self.summary,
        }
    }

    pub fn build(self) -> Article {
        Article {
            pubmed_id: PubmedId::new(self.pubmed_id.clone()).expect("valid test pmid"),
            title: self.title,
            authors: self.authors,
            journal: self.journal,
            year: self.year,
            abstract_text: self.abstract_text,
            summary: self.summary,
        }
    }
}

pub fn analysis_dto(queries: &[&str]) -> QueryAnalysisDto {
    QueryAnalysisDto {
        keywords: vec!["cancer".into(), "biomarkers".into()],
        mesh_terms: vec!["Biomarkers, Tumor".into(), "Neoplasms".into()],
        pubmed_queries: queries.iter().map(|q| q.to_string()).collect(),
        search_strategy: "Start broad with MeSH terms, then narrow.".into(),
    }
}
