//! # newsapi
//!
//! Command-line front end for `newsapi_client`. Each subcommand maps onto one
//! client operation and prints the returned records.
//!
//! ```sh
//! NEWSAPI_KEY=... newsapi headlines --country us
//! ```

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};

mod cli;

use cli::{Cli, Command};
use newsapi_client::{ClientConfig, NewsClient, NewsRecord, TopHeadlinesRequest, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init("info");

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(command = ?args.command, config = ?args.config, "Parsed CLI arguments");

    let config = resolve_config(args.config.as_deref(), args.api_key, args.base_url)?;
    let client = NewsClient::with_config(config).await?;
    let records = match run(&client, args.command).await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Request failed");
            return Err(e.into());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}", render_line(record));
        }
    }

    let elapsed = start_time.elapsed();
    info!(count = records.len(), ?elapsed, "Done");
    Ok(())
}

#[instrument(level = "info", skip(client))]
async fn run(client: &NewsClient, command: Command) -> newsapi_client::Result<Vec<NewsRecord>> {
    match command {
        Command::News => client.get_news().await,
        Command::Everything => client.get_everything().await,
        Command::Sources => client.get_sources().await,
        Command::Latest { source } => client.get_latest_news_by_source(&source).await,
        Command::Search { query } => client.search_news_by_query(&query).await,
        Command::Category { category } => client.get_news_by_category(&category).await,
        Command::Language { language } => client.get_news_by_language(&language).await,
        Command::Country { country } => client.get_news_by_country(&country).await,
        Command::Headlines {
            query,
            source,
            language,
            country,
            sort_by,
            page,
            page_size,
        } => {
            let request = build_headlines_request(
                query, source, language, country, sort_by, page, page_size,
            )?;
            if request == TopHeadlinesRequest::default() {
                client.get_top_headlines().await
            } else {
                client.top_headlines(&request).await
            }
        }
    }
}

/// Load the optional YAML file, then apply command-line overrides. A key or
/// base URL from the command line replaces the file's value; an absent one
/// leaves it alone.
fn resolve_config(
    config_path: Option<&str>,
    api_key: Option<String>,
    base_url: Option<String>,
) -> newsapi_client::Result<ClientConfig> {
    let mut config = match config_path {
        Some(path) => ClientConfig::from_yaml_file(path)?,
        None => ClientConfig::new(String::new()),
    };
    if let Some(api_key) = api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }
    Ok(config)
}

type Change = fn(TopHeadlinesRequest, &str) -> (TopHeadlinesRequest, bool);

fn build_headlines_request(
    query: Option<String>,
    source: Option<String>,
    language: Option<String>,
    country: Option<String>,
    sort_by: Option<String>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> newsapi_client::Result<TopHeadlinesRequest> {
    let mut request = TopHeadlinesRequest::new();
    if let Some(q) = query {
        request = request.change_query(q);
    }
    if let Some(p) = page {
        request = request.change_page(p);
    }
    if let Some(ps) = page_size {
        request = request.change_page_size(ps);
    }

    let checked: [(&'static str, Option<String>, Change); 4] = [
        ("source", source, TopHeadlinesRequest::change_source),
        ("language", language, TopHeadlinesRequest::change_language),
        ("country", country, TopHeadlinesRequest::change_country_options),
        ("sortBy", sort_by, TopHeadlinesRequest::change_sort_options),
    ];
    for (parameter, value, change) in checked {
        let Some(value) = value else { continue };
        let (next, ok) = change(request, &value);
        if !ok {
            return Err(newsapi_client::Error::Validation { parameter, value });
        }
        request = next;
    }
    Ok(request)
}

fn render_line(record: &NewsRecord) -> String {
    let label = record.label().unwrap_or("(untitled)");
    match record.url.as_deref() {
        Some(url) => format!("{label} | {url}"),
        None => label.to_string(),
    }
}
