//! Tool identifiers
//!
//! [`ToolKind`] is the closed set of tool kinds known at build time. Each
//! variant is backed by a stable snake_case string, which is what appears in
//! crew configurations, config files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ToolBuildError;

/// Identifier of a tool kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Browserbase,
    CodedocsSearchTool,
    CodeInterpreter,
    ComposioTool,
    CsvSearchTool,
    DalleTool,
    DirectorySearchTool,
    DirectoryReadTool,
    DocxSearchTool,
    ExaSearchTool,
    FileReadTool,
    FileWriterTool,
    FirecrawlCrawlWebsiteTool,
    FirecrawlScrapeWebsiteTool,
    FirecrawlSearchTool,
    GithubSearchTool,
    SerperDevTool,
    JsonSearchTool,
    MdxSearchTool,
    MysqlSearchTool,
    Nl2sqlTool,
    PdfSearchTool,
    PgSearchTool,
    ScrapeWebsiteTool,
    SeleniumScrapingTool,
    SpiderTool,
    TxtSearchTool,
    VisionTool,
    WebsiteSearchTool,
    XmlSearchTool,
    YoutubeChannelSearchTool,
    YoutubeVideoSearchTool,
}

impl ToolKind {
    /// Every tool kind, in declaration order
    pub const ALL: [ToolKind; 32] = [
        ToolKind::Browserbase,
        ToolKind::CodedocsSearchTool,
        ToolKind::CodeInterpreter,
        ToolKind::ComposioTool,
        ToolKind::CsvSearchTool,
        ToolKind::DalleTool,
        ToolKind::DirectorySearchTool,
        ToolKind::DirectoryReadTool,
        ToolKind::DocxSearchTool,
        ToolKind::ExaSearchTool,
        ToolKind::FileReadTool,
        ToolKind::FileWriterTool,
        ToolKind::FirecrawlCrawlWebsiteTool,
        ToolKind::FirecrawlScrapeWebsiteTool,
        ToolKind::FirecrawlSearchTool,
        ToolKind::GithubSearchTool,
        ToolKind::SerperDevTool,
        ToolKind::JsonSearchTool,
        ToolKind::MdxSearchTool,
        ToolKind::MysqlSearchTool,
        ToolKind::Nl2sqlTool,
        ToolKind::PdfSearchTool,
        ToolKind::PgSearchTool,
        ToolKind::ScrapeWebsiteTool,
        ToolKind::SeleniumScrapingTool,
        ToolKind::SpiderTool,
        ToolKind::TxtSearchTool,
        ToolKind::VisionTool,
        ToolKind::WebsiteSearchTool,
        ToolKind::XmlSearchTool,
        ToolKind::YoutubeChannelSearchTool,
        ToolKind::YoutubeVideoSearchTool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::Browserbase => "browserbase",
            ToolKind::CodedocsSearchTool => "codedocs_search_tool",
            ToolKind::CodeInterpreter => "code_interpreter",
            ToolKind::ComposioTool => "composio_tool",
            ToolKind::CsvSearchTool => "csv_search_tool",
            ToolKind::DalleTool => "dalle_tool",
            ToolKind::DirectorySearchTool => "directory_search_tool",
            ToolKind::DirectoryReadTool => "directory_read_tool",
            ToolKind::DocxSearchTool => "docx_search_tool",
            ToolKind::ExaSearchTool => "exa_search_tool",
            ToolKind::FileReadTool => "file_read_tool",
            ToolKind::FileWriterTool => "file_writer_tool",
            ToolKind::FirecrawlCrawlWebsiteTool => "firecrawl_crawl_website_tool",
            ToolKind::FirecrawlScrapeWebsiteTool => "firecrawl_scrape_website_tool",
            ToolKind::FirecrawlSearchTool => "firecrawl_search_tool",
            ToolKind::GithubSearchTool => "github_search_tool",
            ToolKind::SerperDevTool => "serper_dev_tool",
            ToolKind::JsonSearchTool => "json_search_tool",
            ToolKind::MdxSearchTool => "mdx_search_tool",
            ToolKind::MysqlSearchTool => "mysql_search_tool",
            ToolKind::Nl2sqlTool => "nl2sql_tool",
            ToolKind::PdfSearchTool => "pdf_search_tool",
            ToolKind::PgSearchTool => "pg_search_tool",
            ToolKind::ScrapeWebsiteTool => "scrape_website_tool",
            ToolKind::SeleniumScrapingTool => "selenium_scraping_tool",
            ToolKind::SpiderTool => "spider_tool",
            ToolKind::TxtSearchTool => "txt_search_tool",
            ToolKind::VisionTool => "vision_tool",
            ToolKind::WebsiteSearchTool => "website_search_tool",
            ToolKind::XmlSearchTool => "xml_search_tool",
            ToolKind::YoutubeChannelSearchTool => "youtube_channel_search_tool",
            ToolKind::YoutubeVideoSearchTool => "youtube_video_search_tool",
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = ToolBuildError;

    /// Exact match only; there is no fuzzy or case-insensitive fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ToolBuildError::UnknownTool(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_kinds_are_unique() {
        let names: HashSet<&str> = ToolKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), ToolKind::ALL.len());
    }

    #[test]
    fn test_from_str_roundtrips_every_kind() {
        for kind in ToolKind::ALL {
            assert_eq!(kind.as_str().parse::<ToolKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        for kind in ToolKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "unknown_id".parse::<ToolKind>().unwrap_err();
        assert!(matches!(err, ToolBuildError::UnknownTool(ref name) if name == "unknown_id"));
    }

    #[test]
    fn test_no_case_insensitive_match() {
        assert!("FILE_READ_TOOL".parse::<ToolKind>().is_err());
        assert!("file_read".parse::<ToolKind>().is_err());
    }
}
