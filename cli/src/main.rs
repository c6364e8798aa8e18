use anyhow::Result;
use clap::Parser;
use reelmatch_core::dataset::load_movies;
use reelmatch_core::{CorpusIndex, RecommendError, Recommendation, DEFAULT_TOP_N};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "reelmatch")]
#[command(about = "Recommend movies with similar genres, same language and year", long_about = None)]
struct Cli {
    /// Movie dataset CSV (movies_name, genre, language, year, rating_10)
    #[arg(long, default_value = "movie.csv")]
    data: String,
    /// Movie title to find recommendations for; prompts on stdin when omitted
    #[arg(long)]
    title: Option<String>,
    /// Maximum number of recommendations
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,
    /// Print JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let index = CorpusIndex::build(load_movies(&cli.data)?)?;
    tracing::info!(num_movies = index.len(), vocabulary = index.vector_space().vocabulary_len(), "index built");

    let title = match cli.title {
        Some(t) => t,
        None => prompt("Enter a movie name: ")?,
    };

    match index.query().recommend(&title, cli.top_n) {
        Ok(recs) if cli.json => println!("{}", serde_json::to_string_pretty(&recs)?),
        Ok(recs) => {
            println!("\nRecommended Movies:");
            print!("{}", render_table(&recs));
        }
        Err(RecommendError::MovieNotFound(t)) => println!("Movie '{}' not found in dataset.", t.trim()),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    let mut out = io::stdout();
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

const HEADERS: [&str; 5] = ["movies_name", "genre", "language", "year", "rating_10"];

fn render_table(recs: &[Recommendation]) -> String {
    if recs.is_empty() {
        return "(no movies share this title's language and year)\n".to_string();
    }
    let rows: Vec<[String; 5]> = recs
        .iter()
        .map(|r| {
            let m = &r.movie;
            let rating = m.rating.map(|v| format!("{v:.1}")).unwrap_or_default();
            [m.title.clone(), m.genre.clone(), m.language.clone(), m.year.clone(), rating]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[String]| {
        let line: Vec<String> = cells.iter().zip(widths.iter()).map(|(c, &w)| format!("{c:>w$}")).collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    };
    push_line(&HEADERS.map(String::from)[..]);
    for row in &rows {
        push_line(&row[..]);
    }
    out
}
