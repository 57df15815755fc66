use agrilist::api::ListingApi;
use agrilist::config::AgrilistConfig;
use agrilist::error::Result;
use agrilist::model::{Collection, Record};
use agrilist::page::ListingPage;
use agrilist::store::fs::FileSource;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::*;
use console::Style;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, FilterArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ListingApi<FileSource>,
    config: AgrilistConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Schemes { filters }) => handle_list(&ctx, Collection::Schemes, filters),
        Some(Commands::Articles { filters }) => handle_list(&ctx, Collection::Articles, filters),
        Some(Commands::Tags { collection }) => handle_tags(&ctx, collection),
        Some(Commands::Categories { collection }) => handle_categories(&ctx, collection),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&ctx, Collection::Schemes, FilterArgs::default()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "agrihub", "agrilist")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = AgrilistConfig::load(&data_dir).unwrap_or_default();
    let store = FileSource::new(data_dir.clone())
        .with_payload_files(&config.schemes_file, &config.articles_file);
    let api = ListingApi::new(store);

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_list(ctx: &AppContext, collection: Collection, filters: FilterArgs) -> Result<()> {
    let mut page = ctx.api.open_page(collection)?;

    // Flags go through the same mutation path as any interactive view:
    // each call recomputes the visible subset.
    if let Some(text) = filters.search {
        page.set_search_text(text);
    }
    for label in &filters.category {
        page.toggle_category(label);
    }
    for label in &filters.tag {
        page.toggle_tag(label);
    }

    print_page(&page);
    Ok(())
}

fn handle_tags(ctx: &AppContext, collection: Collection) -> Result<()> {
    let options = ctx.api.tag_options(collection)?;
    print_options(&options, "tags");
    Ok(())
}

fn handle_categories(ctx: &AppContext, collection: Collection) -> Result<()> {
    let options = ctx.api.category_options(collection)?;
    print_options(&options, "categories");
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    println!("data-dir = {}", ctx.data_dir.display());
    println!("schemes-file = {}", ctx.config.schemes_file);
    println!("articles-file = {}", ctx.config.articles_file);
    Ok(())
}

fn print_options(options: &[String], what: &str) {
    if options.is_empty() {
        println!("No {} available.", what);
        return;
    }
    for option in options {
        println!("{}", option);
    }
}

const LINE_WIDTH: usize = 100;
const DATE_WIDTH: usize = 18;
const CATEGORY_WIDTH: usize = 12;

static CATEGORY_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        ("government", Style::new().blue()),
        ("bank", Style::new().green()),
        ("corporate", Style::new().magenta()),
        ("event", Style::new().yellow()),
    ])
});

fn print_page(page: &ListingPage) {
    let criteria = page.criteria();
    if !criteria.is_empty() {
        let mut parts = Vec::new();
        if !criteria.search().is_empty() {
            parts.push(format!("search \"{}\"", criteria.search()));
        }
        for label in criteria.categories() {
            parts.push(format!("category {}", label));
        }
        for label in criteria.tags() {
            parts.push(format!("tag {}", label));
        }
        println!("{}", format!("Filters: {}", parts.join(", ")).dimmed());
    }

    if page.total() == 0 {
        println!("No {} found.", page.collection());
        return;
    }

    if page.no_matches() {
        println!(
            "{}",
            format!("No {} match the current filters.", page.collection()).yellow()
        );
        println!("{}", "Try adjusting your search or filters.".dimmed());
        return;
    }

    for record in page.visible() {
        print_record_row(record);
    }

    println!(
        "{}",
        format!(
            "Showing {} of {} {}",
            page.visible().len(),
            page.total(),
            page.collection()
        )
        .dimmed()
    );
}

fn print_record_row(record: &Record) {
    let id_str = format!("{:>4}. ", record.id);

    let category_label = record.category.as_deref().unwrap_or("");
    let category_padded = format!("{:<width$}", category_label, width = CATEGORY_WIDTH);
    let category_styled = style_category(category_label, &category_padded);

    let date_str = format_date(record.date);

    let preview: String = record
        .description
        .chars()
        .take(50)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let title_content = if preview.is_empty() {
        record.title.clone()
    } else {
        format!("{} {}", record.title, preview)
    };

    let fixed_width = id_str.width() + CATEGORY_WIDTH + 2 + DATE_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let title_display = truncate_to_width(&title_content, available);
    let padding = available.saturating_sub(title_display.width());

    println!(
        "{}{}  {}{}{}",
        id_str,
        category_styled,
        title_display,
        " ".repeat(padding),
        date_str.dimmed()
    );
}

fn style_category(label: &str, padded: &str) -> String {
    if label.is_empty() {
        return padded.to_string();
    }
    let lower = label.to_lowercase();
    let style = CATEGORY_STYLES
        .get(lower.as_str())
        .cloned()
        .unwrap_or_else(|| Style::new().cyan());
    style.apply_to(padded).to_string()
}

fn format_date(date: Option<NaiveDate>) -> String {
    let Some(date) = date else {
        return " ".repeat(DATE_WIDTH);
    };

    let today = Utc::now().date_naive();
    let text = if date > today {
        // Deadlines ahead of us read better as absolute dates
        format!("due {}", date.format("%b %d, %Y"))
    } else {
        let days = (today - date).num_days().max(0) as u64;
        let formatter = timeago::Formatter::new();
        formatter.convert(std::time::Duration::from_secs(days * 86_400))
    };

    format!("{:>width$}", text, width = DATE_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
