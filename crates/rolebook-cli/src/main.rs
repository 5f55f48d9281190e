//! Rolebook CLI
//!
//! Command-line front-end for:
//! - Converting `roles.tsv` / `rolelists.tsv` into the JSON the role browser reads
//! - Assigning roles to players from a rolelist (seedable)
//! - Exploring rolelists by player count
//! - Filtering and sorting the role catalog
//! - Showing one role in detail

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rolebook_catalog::catalog::{
    archetypes_in_order, display_name, group_archetypes, investigative_group,
    investigator_heading, status_text,
};
use rolebook_catalog::detail::{icon_path, neighbor};
use rolebook_catalog::explorer::{plain_text, split_sides};
use rolebook_catalog::{
    assign_roles, parse_lines, query_roles, AlignmentCounts, Assignment, CatalogQuery, Direction,
    RoleDetail, SeededRandom, Series, SortOrder,
};
use rolebook_ingest_tsv::{
    convert_roles_file, run_rolelists, to_json_string, ConvertPaths, JsonStyle,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rolebook")]
#[command(author, version, about = "Rolebook: role tables, rolelists and assignments")]
struct Cli {
    /// More log output on stderr (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the role table (TSV) → `roles.json`.
    ///
    /// Fails on the first unreadable file or non-integer id; rows with
    /// fewer than five fields are skipped.
    Roles {
        /// Input TSV (default: roles.tsv)
        input: Option<PathBuf>,
        /// Output JSON (default: roles.json)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Group rolelist columns (TSV) → `rolelists.json`.
    ///
    /// Problems are reported but do not fail the command unless `--strict`
    /// is given.
    Rolelists {
        /// Input TSV (default: rolelists.tsv)
        input: Option<PathBuf>,
        /// Output JSON (default: rolelists.json)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Exit non-zero when nothing was written.
        #[arg(long)]
        strict: bool,
    },

    /// Randomly assign roles to a rolelist (and optionally to players).
    Assign {
        /// Role catalog JSON
        #[arg(long, default_value = "roles.json")]
        roles: PathBuf,
        /// One slot per line, e.g. `Town Any`, `Mafia Killing`, `Neutral Non-Chaos`
        #[arg(long)]
        slots: PathBuf,
        /// One player name per line
        #[arg(long)]
        players: Option<PathBuf>,
        /// Seed text; the same seed reproduces the same table
        #[arg(long)]
        seed: Option<String>,
        /// Print assignments as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the rolelist for a player count.
    Explore {
        /// Rolelists JSON (default: rolelists.json)
        rolelists: Option<PathBuf>,
        /// Player count (default: 12 if available, else the first >= 8)
        #[arg(long)]
        players: Option<usize>,
        /// Print only the entries, one per line
        #[arg(long)]
        plain: bool,
    },

    /// List roles with filters.
    Catalog {
        /// Role catalog JSON (default: roles.json)
        roles: Option<PathBuf>,
        /// Only these archetypes (repeatable)
        #[arg(long = "archetype")]
        archetypes: Vec<String>,
        /// Only archetypes of this alignment, e.g. Town (repeatable)
        #[arg(long = "alignment")]
        alignments: Vec<String>,
        #[arg(long, value_enum, default_value_t = SeriesArg::Both)]
        series: SeriesArg,
        #[arg(long, value_enum, default_value_t = SortArg::Rolelist)]
        sort: SortArg,
        /// Show the investigative group containing this role id instead
        #[arg(long)]
        investigate: Option<i64>,
    },

    /// Show one role: abilities with their tags, neighbours, investigative group.
    ///
    /// An unknown or missing id shows the first role.
    Role {
        /// Role id
        id: Option<i64>,
        /// Role catalog JSON
        #[arg(long, default_value = "roles.json")]
        roles: PathBuf,
        /// Step to the previous or next role (wrapping around)
        #[arg(long, value_enum)]
        step: Option<StepArg>,
        /// Print the detail as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StepArg {
    Prev,
    Next,
}

impl From<StepArg> for Direction {
    fn from(value: StepArg) -> Self {
        match value {
            StepArg::Prev => Direction::Previous,
            StepArg::Next => Direction::Next,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SeriesArg {
    Both,
    LittleMiss,
    Mr,
}

impl From<SeriesArg> for Series {
    fn from(value: SeriesArg) -> Self {
        match value {
            SeriesArg::Both => Series::Both,
            SeriesArg::LittleMiss => Series::LittleMiss,
            SeriesArg::Mr => Series::Mr,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Rolelist,
    Alpha,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Rolelist => SortOrder::Rolelist,
            SortArg::Alpha => SortOrder::Alpha,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Roles { input, out } => cmd_roles(input, out),
        Commands::Rolelists { input, out, strict } => cmd_rolelists(input, out, strict),
        Commands::Assign {
            roles,
            slots,
            players,
            seed,
            json,
        } => cmd_assign(&roles, &slots, players.as_deref(), seed.as_deref(), json),
        Commands::Explore {
            rolelists,
            players,
            plain,
        } => cmd_explore(rolelists, players, plain),
        Commands::Catalog {
            roles,
            archetypes,
            alignments,
            series,
            sort,
            investigate,
        } => cmd_catalog(roles, archetypes, alignments, series, sort, investigate),
        Commands::Role {
            id,
            roles,
            step,
            json,
        } => cmd_role(&roles, id, step, json),
    }
}

fn cmd_roles(input: Option<PathBuf>, out: Option<PathBuf>) -> Result<ExitCode> {
    let paths = ConvertPaths::roles_default().with_overrides(input, out);
    println!(
        "{} role table {}",
        "Converting".green().bold(),
        paths.input.display()
    );

    let report = convert_roles_file(&paths)
        .with_context(|| format!("converting {}", paths.input.display()))?;

    println!("  {} {}", "→".cyan(), paths.output.display());
    println!(
        "  {} {} roles ({} short rows skipped)",
        "→".yellow(),
        report.records.len(),
        report.skipped_rows
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_rolelists(input: Option<PathBuf>, out: Option<PathBuf>, strict: bool) -> Result<ExitCode> {
    let paths = ConvertPaths::rolelists_default().with_overrides(input, out);
    let outcome = run_rolelists(&paths);
    println!("{}", outcome.diagnostic());

    if outcome.is_written() {
        println!("  {} {}", "→".cyan(), paths.output.display());
    }
    if strict && !outcome.is_written() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_lines(&text))
}

fn cmd_assign(
    roles_path: &Path,
    slots_path: &Path,
    players_path: Option<&Path>,
    seed: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let roles = rolebook_catalog::load_roles(roles_path)?;
    let slots = read_lines(slots_path)?;
    if slots.is_empty() {
        return Err(anyhow!("{} has no slots", slots_path.display()));
    }
    let players = match players_path {
        Some(path) => read_lines(path)?,
        None => Vec::new(),
    };

    tracing::debug!(
        roles = roles.len(),
        slots = slots.len(),
        players = players.len(),
        seeded = seed.is_some(),
        "assignment inputs loaded"
    );

    let mut rng = SeededRandom::from_seed(seed);
    let assignments = assign_roles(&roles, &slots, &players, &mut rng);

    if json {
        println!("{}", to_json_string(&assignments, JsonStyle::ROLELISTS)?);
    } else {
        for assignment in &assignments {
            print_assignment(assignment);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_assignment(assignment: &Assignment) {
    let header = match &assignment.player_name {
        Some(player) => format!("{} · {}", assignment.slot_description, player.as_str().bold()),
        None => assignment.slot_description.clone(),
    };
    match (assignment.role(), assignment.error()) {
        (Some(role), _) => println!(
            "{:>3}. {} {} {} ({})",
            assignment.slot_number,
            header,
            "→".cyan(),
            display_name(&role.name).as_str().bold(),
            role.archetype
        ),
        (None, Some(error)) => println!(
            "{:>3}. {} {} {}",
            assignment.slot_number,
            header,
            "✗".red(),
            error.red()
        ),
        (None, None) => {}
    }
}

fn cmd_explore(path: Option<PathBuf>, players: Option<usize>, plain: bool) -> Result<ExitCode> {
    let path = path.unwrap_or_else(|| PathBuf::from(rolebook_ingest_tsv::config::ROLELISTS_JSON));
    let book = rolebook_catalog::load_rolelists(&path)?;
    let (min, max) = book
        .range()
        .ok_or_else(|| anyhow!("{} has no rolelists", path.display()))?;
    let count = match players {
        Some(count) => count,
        None => book
            .default_player_count()
            .ok_or_else(|| anyhow!("{} has no rolelists", path.display()))?,
    };

    let entries = book.rolelist(count);
    if plain {
        println!("{}", plain_text(entries));
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} players (available {}–{})",
        "Rolelist".green().bold(),
        count,
        min,
        max
    );
    if entries.is_empty() {
        println!("  (no rolelist for {count} players)");
        return Ok(ExitCode::SUCCESS);
    }

    println!("  {}", AlignmentCounts::count(entries).summary().as_str().bold());
    let (town, evil) = split_sides(entries);
    for entry in town {
        println!("  {} {}", "●".green(), entry);
    }
    for entry in evil {
        println!("  {} {}", "●".red(), entry);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_catalog(
    path: Option<PathBuf>,
    archetypes: Vec<String>,
    alignments: Vec<String>,
    series: SeriesArg,
    sort: SortArg,
    investigate: Option<i64>,
) -> Result<ExitCode> {
    let path = path.unwrap_or_else(|| PathBuf::from(rolebook_ingest_tsv::config::ROLES_JSON));
    let roles = rolebook_catalog::load_roles(&path)?;

    if let Some(id) = investigate {
        let group = investigative_group(&roles, id);
        if group.is_empty() {
            println!("  (role {id} is in no investigative group)");
            return Ok(ExitCode::SUCCESS);
        }
        println!("{}", investigator_heading(&roles).as_str().bold());
        for role in group {
            println!("  {:>3}  {}", role.id, display_name(&role.name));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let known = archetypes_in_order(&roles);
    let mut selected: BTreeSet<String> = archetypes.into_iter().collect();
    for alignment in &alignments {
        selected.extend(
            group_archetypes(&known, alignment)
                .into_iter()
                .map(str::to_string),
        );
    }
    let query = CatalogQuery {
        archetypes: if selected.is_empty() {
            None
        } else {
            Some(selected)
        },
        series: series.into(),
        sort: sort.into(),
    };

    let shown = query_roles(&roles, &query);
    for role in &shown {
        println!(
            "  {:>3}  {:<28} {}",
            role.id,
            display_name(&role.name).as_str().bold(),
            role.archetype.as_str().dimmed()
        );
    }
    println!("{}", status_text(shown.len(), roles.len()));
    Ok(ExitCode::SUCCESS)
}

fn cmd_role(roles_path: &Path, id: Option<i64>, step: Option<StepArg>, json: bool) -> Result<ExitCode> {
    let roles = rolebook_catalog::load_roles(roles_path)?;
    let mut index = id.map_or(0, |id| rolebook_catalog::detail::role_index_by_id(&roles, id));
    if let Some(step) = step {
        index = neighbor(index, roles.len(), step.into());
    }
    let detail = RoleDetail::at(&roles, index)
        .ok_or_else(|| anyhow!("{} has no roles", roles_path.display()))?;

    if json {
        println!("{}", to_json_string(&detail, JsonStyle::ROLELISTS)?);
        return Ok(ExitCode::SUCCESS);
    }

    let role = detail.role;
    println!(
        "{} {} {}",
        format!("#{}", role.id).as_str().dimmed(),
        detail.title.as_str().bold(),
        detail.gender.symbol()
    );
    println!("  {}", role.archetype.as_str().cyan());
    for ability in &detail.abilities {
        let icons: Vec<String> = ability.tags.iter().map(|tag| icon_path(tag)).collect();
        if icons.is_empty() {
            println!("  {} {}", "●".green(), ability.text);
        } else {
            println!("  {} {} [{}]", "●".green(), ability.text, icons.join(", ").as_str().dimmed());
        }
    }
    println!("  {} {}", "Win:".bold(), role.wincon);
    println!("  {} {}", "Image:".bold(), role.image);

    if !detail.investigative_group.is_empty() {
        println!("  {}", investigator_heading(&roles).as_str().bold());
        for member in investigative_group(&roles, role.id) {
            println!("    {:>3}  {}", member.id, display_name(&member.name));
        }
    }
    println!(
        "  {} {}  {} {}",
        "←".cyan(),
        detail.previous_id,
        "→".cyan(),
        detail.next_id
    );
    Ok(ExitCode::SUCCESS)
}
