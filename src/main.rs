mod cli;

use anyhow::{Context, Result};
use clap::Parser as _;
use cli::{Cli, Commands};
use reelname_parser::config::{CompactForm, ParserConfig};
use reelname_parser::{ParsedName, Parser};
use std::io::{self, BufRead, Write};

/// Names from the command line, or one per line from stdin.
fn collect_names(names: Vec<String>) -> Result<Vec<String>> {
    if !names.is_empty() {
        return Ok(names);
    }

    let stdin = io::stdin();
    let mut collected = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read file names from stdin")?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            collected.push(line.to_string());
        }
    }
    tracing::debug!("Read {} names from stdin", collected.len());
    Ok(collected)
}

fn write_summary(out: &mut impl Write, name: &ParsedName) -> io::Result<()> {
    fn optional<T: ToString>(value: Option<T>) -> String {
        value.map_or_else(|| "-".to_string(), |v| v.to_string())
    }

    writeln!(out, "{}", name.raw_name())?;
    writeln!(out, "  Title:         {}", name.title())?;
    writeln!(out, "  Type:          {}", name.media_type())?;
    writeln!(out, "  Year:          {}", optional(name.year()))?;
    writeln!(out, "  Season:        {}", optional(name.formatted_season()))?;
    writeln!(out, "  Episode:       {}", optional(name.formatted_episode()))?;
    writeln!(out, "  Resolution:    {}", optional(name.resolution()))?;
    writeln!(out, "  Episode title: {}", optional(name.episode_title()))?;
    writeln!(out, "  Release group: {}", optional(name.release_group()))?;
    writeln!(out, "  Container:     {}", optional(name.container()))?;
    writeln!(out, "  Plex name:     {}", name.basic_plex_name())?;
    Ok(())
}

fn parse_names(parser: &Parser, names: Vec<String>, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (i, raw) in collect_names(names)?.iter().enumerate() {
        let name = parser.parse(raw);
        if json {
            writeln!(out, "{}", name.to_debug_json()?)?;
        } else {
            if i > 0 {
                writeln!(out)?;
            }
            write_summary(&mut out, &name)?;
        }
    }
    Ok(())
}

fn plex_names(parser: &Parser, names: Vec<String>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for raw in collect_names(names)? {
        writeln!(out, "{}", parser.parse(&raw).basic_plex_name())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "reelname=debug,reelname_parser=trace".to_string()
        } else {
            "reelname=info,reelname_parser=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(io::stderr)
        .init();

    let compact_form = if cli.legacy_compact {
        CompactForm::MiddleDigit
    } else {
        CompactForm::LeadingDigitSeason
    };
    let config = ParserConfig::builder()
        .compact_form(compact_form)
        .episode_titles(!cli.no_episode_titles)
        .build();
    tracing::debug!(?config, "Parser configured");
    let parser = Parser::new(config);

    match cli.command {
        Commands::Parse { names, json } => parse_names(&parser, names, json),
        Commands::PlexName { names } => plex_names(&parser, names),
    }
}
