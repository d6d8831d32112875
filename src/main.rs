use poem_corpus::corpus::words;
use poem_corpus::{FilterCriteria, PoemSession, SearchScope};
use std::env;

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1))
        .cloned()
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <csv-path-or-url> [--search TERM] [--scope all|title|author|content] \
             [--dynasty NAME] [--page N] [--page-size N] [--words]",
            args[0]
        );
        std::process::exit(1);
    }

    let source = &args[1];
    let criteria = FilterCriteria {
        search_term: arg_value(&args, "--search").unwrap_or_default(),
        dynasty: arg_value(&args, "--dynasty").unwrap_or_default(),
        scope: SearchScope::parse(&arg_value(&args, "--scope").unwrap_or_default()),
    };
    let page: usize = match arg_value(&args, "--page").as_deref().map(str::parse) {
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("ERROR: --page expects a number");
            std::process::exit(1);
        }
        None => 1,
    };
    let page_size: usize = match arg_value(&args, "--page-size").as_deref().map(str::parse) {
        Some(Ok(0)) | Some(Err(_)) => {
            eprintln!("ERROR: --page-size expects a number > 0");
            std::process::exit(1);
        }
        Some(Ok(n)) => n,
        None => 10,
    };
    let show_words = args.iter().any(|arg| arg == "--words");

    println!("Loading poem corpus: {}", source);
    println!("{}", "=".repeat(60));

    let loaded = if source.starts_with("http://") || source.starts_with("https://") {
        PoemSession::load_from_url(source)
    } else {
        PoemSession::load_from_path(source)
    };

    let mut session = match loaded {
        Ok(session) => session,
        Err(e) => {
            eprintln!("\nERROR: Failed to load corpus");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let stats = session.stats();
    println!("\nCorpus Overview:");
    println!("  Poems: {}", stats.poem_count);
    println!("  Authors: {}", stats.author_count);
    println!("  Dynasties: {}", stats.dynasty_count);
    println!("  Time span: {}", stats.time_span);

    println!("\nDynasty Distribution:");
    for (dynasty, count) in session.ordered_dynasty_stats() {
        println!("  {:<4} {}", dynasty, count);
    }

    if show_words {
        println!("\nTop Words:");
        for (term, count) in words::word_frequency(session.all_poems()).iter().take(20) {
            println!("  {:<4} {}", term, count);
        }
    }

    session.apply_filters(criteria.clone());
    let result = session.paginated(page, page_size);

    println!("\nPoems (page {}/{}, {} matching):", result.current_page, result.total_pages, result.total_items);
    if !criteria.search_term.is_empty() || !criteria.dynasty.is_empty() {
        println!(
            "  [filter: term='{}' scope={} dynasty='{}']",
            criteria.search_term, criteria.scope, criteria.dynasty
        );
    }
    for (i, poem) in result.poems.iter().enumerate() {
        let number = result.current_page.saturating_sub(1) * page_size + i + 1;
        println!("  {}. {} — {} ({})", number, poem.title, poem.author, poem.dynasty);
        println!("     {}", poem.content);
    }
    if result.poems.is_empty() {
        println!("  (no poems on this page)");
    }
}
