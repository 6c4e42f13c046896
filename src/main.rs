use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use docrank::{
    link_window, search, SearchConfig, SearchIndex, SearchOutcome, SearchPage, SearchRequest,
};

mod cli;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            index,
            query,
            page,
            per_page,
            category,
            all,
            substring,
        } => run_search(&index, &query, page, per_page, category, all, substring),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_index(path: &str) -> Result<SearchIndex> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading index file {}", path))?;
    let index: SearchIndex =
        serde_json::from_str(&raw).with_context(|| format!("decoding index file {}", path))?;
    Ok(index)
}

#[allow(clippy::too_many_arguments)]
fn run_search(
    index_path: &str,
    query: &str,
    page: usize,
    per_page: Option<usize>,
    category: Option<usize>,
    all: bool,
    substring: bool,
) -> Result<()> {
    let index = load_index(index_path)?;

    let config = SearchConfig {
        substring,
        ..SearchConfig::default()
    };

    let mut request = SearchRequest::with_phrase(query, &config);
    request.page = page.max(1);
    if let Some(per_page) = per_page {
        request.per_page = per_page.max(1);
    }
    request.category = category;
    request.match_all = all.then_some(true);

    match search(&index, &request, &config) {
        SearchOutcome::NoQuery => println!("No search query entered."),
        SearchOutcome::Page(result_page) => {
            print_header(&index, query, category);
            print_page(&index, &result_page);
        }
    }
    Ok(())
}

fn print_header(index: &SearchIndex, phrase: &str, category: Option<usize>) {
    print!("Search results for \"{}\"", phrase);
    if index.has_categories() {
        match category.and_then(|cat| index.categories.get(cat)) {
            Some(name) => print!(" in category \"{}\"", name),
            None => print!(" in all categories"),
        }
    }
    println!();
}

fn print_page(index: &SearchIndex, page: &SearchPage) {
    let summary = &page.summary;

    match summary.total_matches {
        0 => println!("No results found."),
        1 => println!("1 result found."),
        _ if summary.term_count > 1 => {
            println!(
                "{} pages found containing all search terms.",
                summary.full_matches
            );
            if summary.partial_matches > 0 {
                println!(
                    "{} pages found containing some search terms.",
                    summary.partial_matches
                );
            }
        }
        total => println!("{} results found.", total),
    }
    if summary.page_count > 1 {
        println!("{} pages of results.", summary.page_count);
    }
    println!();

    for (offset, row) in page.rows.iter().enumerate() {
        let doc = &index.docs[row.doc];
        let number = (summary.page - 1) * summary.per_page + offset + 1;
        print!("{}. {}", number, doc.title);
        if let Some(name) = doc.category.and_then(|cat| index.categories.get(cat)) {
            print!(" [{}]", name);
        }
        println!();
        if !doc.description.is_empty() {
            println!("   {}", doc.description);
        }
        println!(
            "   Terms matched: {}  Score: {}  URL: {}",
            row.matched_terms, row.score, doc.url
        );
    }

    if summary.page_count > 1 {
        let window = link_window(summary.page, summary.page_count);
        let links: Vec<String> = window
            .pages()
            .map(|p| {
                if p == summary.page {
                    format!("[{}]", p)
                } else {
                    p.to_string()
                }
            })
            .collect();
        println!();
        println!("Result pages: {}", links.join(" "));
    }
}

fn run_inspect(index_path: &str) -> Result<()> {
    let index = load_index(index_path)?;

    let posting_count: usize = index.keywords.iter().map(|k| k.postings.len()).sum();
    let max_weight = index
        .keywords
        .iter()
        .flat_map(|k| k.postings.iter())
        .map(|p| p.weight)
        .max()
        .unwrap_or(0);

    println!("documents:  {}", index.docs.len());
    println!("categories: {}", index.categories.len());
    println!("keywords:   {}", index.keywords.len());
    println!("postings:   {}", posting_count);
    println!("max weight: {}", max_weight);

    index
        .validate()
        .with_context(|| format!("index {} failed integrity check", index_path))?;
    println!("integrity:  ok");
    Ok(())
}
