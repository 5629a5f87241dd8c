//! Built-in tool catalog
//!
//! Declares every [`ToolKind`] once: the environment variables it needs, the
//! arguments it accepts, and what its constructor insists on. The order of
//! registration here is the order in which the aggregator tries tools.

use super::configured::{ArgumentRequirement, ConfiguredToolConstructor};
use humanoid_domain::{ArgumentType, ToolCatalog, ToolDescriptor, ToolKind};
use std::sync::{Arc, LazyLock};

use ArgumentType::{Boolean, Integer, List, Mapping, Text};

/// Process-wide catalog, built on first use and never modified afterwards
static SHARED_CATALOG: LazyLock<Arc<ToolCatalog>> = LazyLock::new(|| Arc::new(builtin_catalog()));

/// Shared handle to the built-in catalog
pub fn shared_catalog() -> Arc<ToolCatalog> {
    Arc::clone(&SHARED_CATALOG)
}

fn tool(kind: ToolKind, description: &'static str) -> ToolDescriptor {
    tool_requiring(kind, description, ArgumentRequirement::None)
}

fn tool_requiring(
    kind: ToolKind,
    description: &'static str,
    requirement: ArgumentRequirement,
) -> ToolDescriptor {
    ToolDescriptor::new(
        kind,
        description,
        ConfiguredToolConstructor::new(kind, description).with_requirement(requirement),
    )
}

/// Build a fresh copy of the built-in catalog
pub fn builtin_catalog() -> ToolCatalog {
    ToolCatalog::new()
        .register(
            tool(
                ToolKind::Browserbase,
                "Load web pages through a headless Browserbase browser",
            )
            .with_credential("BROWSERBASE_API_KEY")
            .with_credential("BROWSERBASE_PROJECT_ID"),
        )
        .register(
            tool(
                ToolKind::CodedocsSearchTool,
                "Semantic search over a code documentation site",
            )
            .with_argument("docs_url", Text),
        )
        .register(tool(
            ToolKind::CodeInterpreter,
            "Run Python code in a sandboxed interpreter",
        ))
        .register(
            tool_requiring(
                ToolKind::ComposioTool,
                "Call actions of third-party apps through Composio",
                ArgumentRequirement::AnyOf(&["action", "from_action", "app", "from_app"]),
            )
            .with_credential("COMPOSIO_API_KEY")
            .with_argument("from_action", Text)
            .with_argument("from_app", Text)
            .with_argument("action", Text)
            .with_argument("app", Text)
            .with_argument("tags", List)
            .with_argument("use_case", Text),
        )
        .register(
            tool(ToolKind::CsvSearchTool, "Semantic search over a CSV file")
                .with_argument("csv", Text),
        )
        .register(
            tool(ToolKind::DalleTool, "Generate images with DALL-E")
                .with_argument("model", Text)
                .with_argument("size", Text)
                .with_argument("quality", Text)
                .with_argument("n", Integer),
        )
        .register(
            tool(
                ToolKind::DirectorySearchTool,
                "Semantic search over the files of a directory",
            )
            .with_argument("directory", Text),
        )
        .register(
            tool(ToolKind::DirectoryReadTool, "List the contents of a directory")
                .with_argument("directory", Text),
        )
        .register(
            tool(ToolKind::DocxSearchTool, "Semantic search over a DOCX document")
                .with_argument("docx", Text),
        )
        .register(
            tool(ToolKind::ExaSearchTool, "Web search through the Exa API")
                .with_credential("EXA_API_KEY"),
        )
        .register(
            tool(ToolKind::FileReadTool, "Read the contents of a file")
                .with_argument("file_path", Text),
        )
        .register(tool(ToolKind::FileWriterTool, "Write content to a file"))
        .register(
            tool(
                ToolKind::FirecrawlCrawlWebsiteTool,
                "Crawl a website with Firecrawl",
            )
            .with_credential("FIRECRAWL_API_KEY")
            .with_argument("url", Text),
        )
        .register(
            tool(
                ToolKind::FirecrawlScrapeWebsiteTool,
                "Scrape a single page with Firecrawl",
            )
            .with_credential("FIRECRAWL_API_KEY")
            .with_argument("url", Text),
        )
        .register(
            tool(ToolKind::FirecrawlSearchTool, "Search the web with Firecrawl")
                .with_credential("FIRECRAWL_API_KEY")
                .with_argument("query", Text),
        )
        .register(
            tool(
                ToolKind::GithubSearchTool,
                "Semantic search over a GitHub repository",
            )
            .with_credential("GITHUB_TOKEN")
            .with_argument("gh_token", Text)
            .with_argument("github_repo", Text)
            .with_argument("content_types", List),
        )
        .register(
            tool(ToolKind::SerperDevTool, "Google search through the Serper API")
                .with_credential("SERPER_API_KEY")
                .with_argument("search_url", Text)
                .with_argument("country", Text)
                .with_argument("location", Text)
                .with_argument("locale", Text)
                .with_argument("n_results", Integer),
        )
        .register(
            tool(ToolKind::JsonSearchTool, "Semantic search over a JSON file")
                .with_argument("json_path", Text),
        )
        .register(
            tool(ToolKind::MdxSearchTool, "Semantic search over an MDX file")
                .with_argument("mdx", Text),
        )
        .register(
            tool_requiring(
                ToolKind::MysqlSearchTool,
                "Semantic search over a MySQL table",
                ArgumentRequirement::All(&["db_uri", "table_name"]),
            )
            .with_argument("db_uri", Text)
            .with_argument("table_name", Text),
        )
        .register(
            tool_requiring(
                ToolKind::Nl2sqlTool,
                "Answer questions by generating SQL against a database",
                ArgumentRequirement::All(&["db_uri"]),
            )
            .with_argument("db_uri", Text),
        )
        .register(
            tool(ToolKind::PdfSearchTool, "Semantic search over a PDF document")
                .with_argument("pdf", Text),
        )
        .register(
            tool_requiring(
                ToolKind::PgSearchTool,
                "Semantic search over a PostgreSQL table",
                ArgumentRequirement::All(&["db_uri", "table_name"]),
            )
            .with_argument("db_uri", Text)
            .with_argument("table_name", Text),
        )
        .register(
            tool(ToolKind::ScrapeWebsiteTool, "Scrape the text of a web page")
                .with_argument("website_url", Text),
        )
        .register(
            tool(
                ToolKind::SeleniumScrapingTool,
                "Scrape a web page with a Selenium-driven browser",
            )
            .with_argument("website_url", Text)
            .with_argument("css_element", Text)
            .with_argument("cookie", Text)
            .with_argument("wait_time", Integer),
        )
        .register(spider_tool())
        .register(
            tool(ToolKind::TxtSearchTool, "Semantic search over a text file")
                .with_argument("txt", Text),
        )
        .register(
            tool(ToolKind::VisionTool, "Describe the contents of an image")
                .with_argument("image_path_url", Text),
        )
        .register(
            tool(
                ToolKind::WebsiteSearchTool,
                "Semantic search over the content of a website",
            )
            .with_argument("website", Text),
        )
        .register(
            tool(ToolKind::XmlSearchTool, "Semantic search over an XML file")
                .with_argument("xml", Text),
        )
        .register(
            tool(
                ToolKind::YoutubeChannelSearchTool,
                "Semantic search over a YouTube channel",
            )
            .with_argument("youtube_channel_handle", Text),
        )
        .register(
            tool(
                ToolKind::YoutubeVideoSearchTool,
                "Semantic search over a YouTube video transcript",
            )
            .with_argument("youtube_video_url", Text),
        )
}

fn spider_tool() -> ToolDescriptor {
    let arguments = [
        ("params", Mapping),
        ("request", Mapping),
        ("limit", Integer),
        ("depth", Integer),
        ("cache", Boolean),
        ("budget", Integer),
        ("locale", Text),
        ("cookies", Mapping),
        ("stealth", Boolean),
        ("headers", Mapping),
        ("metadata", Boolean),
        ("viewport", Text),
        ("encoding", Text),
        ("subdomains", Boolean),
        ("user_agent", Text),
        ("store_data", Boolean),
        ("gpt_config", Mapping),
        ("fingerprint", Boolean),
        ("storageless", Boolean),
        ("readability", Boolean),
        ("return_format", Text),
        ("proxy_enabled", Boolean),
        ("query_selector", Text),
        ("full_resources", Boolean),
        ("request_timeout", Integer),
        ("run_in_background", Boolean),
    ];

    arguments.into_iter().fold(
        tool(ToolKind::SpiderTool, "Crawl and scrape websites with Spider")
            .with_credential("SPIDER_API_KEY"),
        |descriptor, (name, expected)| descriptor.with_argument(name, expected),
    )
}
