#![forbid(unsafe_code)]

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::Level as TraceLevel;
use tracing_subscriber::FmtSubscriber;

use print_rename::pattern::{self, RuntimeValues};
use print_rename::preset::PresetStore;
use print_rename::store::{FileStore, SettingsStore};
use print_rename::{Configuration, DimensionOptions, GroupKind, conflict, reorder};

#[derive(Parser)]
#[command(
    name = "print-rename",
    about = "Rename-pattern engine for print production files",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the active configuration
    Show,
    /// Assemble the rename pattern from the active configuration
    Generate(GenerateArgs),
    /// Drag one group next to another
    MoveGroup { dragged: String, target: String },
    /// Drag an item onto another item or into another group
    MoveItem {
        dragged: String,
        /// Target item to insert next to (same group)
        #[arg(long, conflicts_with = "group")]
        target: Option<String>,
        /// Target group to append the item to
        #[arg(long)]
        group: Option<String>,
    },
    /// Mark an item as the one its group preserves across reimports
    TogglePreserved { group: String, item: String },
    /// Enable a group, or one of its items
    Enable {
        group: String,
        #[arg(long)]
        item: Option<String>,
    },
    /// Disable a group, or one of its items
    Disable {
        group: String,
        #[arg(long)]
        item: Option<String>,
    },
    /// Mark whether a group keeps its preserved item across reimports
    PreserveGroup {
        group: String,
        /// Clear the flag instead of setting it
        #[arg(long)]
        clear: bool,
    },
    /// Manage named presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
    /// Replace the active configuration with catalog defaults
    Reset,
}

#[derive(Subcommand)]
enum PresetAction {
    /// List preset names, built-ins first
    List,
    /// Snapshot the active configuration under a name
    Save { name: String },
    /// Replace the active configuration with a preset
    Load { name: String },
    /// Delete a custom preset
    Delete { name: String },
}

#[derive(Args)]
struct GenerateArgs {
    /// Separator placed between rendered tokens
    #[arg(long, default_value = "_")]
    separator: String,
    #[arg(long)]
    order_number: Option<String>,
    #[arg(long)]
    material: Option<String>,
    #[arg(long)]
    quantity: Option<String>,
    #[arg(long)]
    process: Option<String>,
    /// PDF page width in millimetres
    #[arg(long, default_value_t = 0.0)]
    width: f64,
    /// PDF page height in millimetres
    #[arg(long, default_value_t = 0.0)]
    height: f64,
    /// Trim removed from each edge before rendering the size
    #[arg(long, default_value_t = 0.0)]
    trim: f64,
    /// Shape indicator ("R", "Y", a corner radius, "0")
    #[arg(long, default_value = "")]
    shape: String,
    /// Render the round code without its numeric radius
    #[arg(long)]
    hide_radius: bool,
}

fn parse_group(name: &str) -> Result<GroupKind> {
    GroupKind::from_name(name).with_context(|| format!("unknown group: {name}"))
}

fn show(config: &Configuration) {
    for group in config.sorted_groups() {
        let marker = if group.enabled { ' ' } else { '-' };
        let preserved = if group.preserved { ", preserved" } else { "" };
        println!(
            "{marker} [{}] {} (prefix: \"{}\"{preserved})",
            group.sort_order, group.display_name, group.prefix
        );
        for item in config.items_in(group.kind) {
            let marker = if item.enabled { ' ' } else { '-' };
            let star = if item.preserved { " *" } else { "" };
            println!("    {marker} [{}] {}{star}", item.sort_order, item.name);
        }
    }
}

fn set_enabled(
    config: &Configuration,
    group: GroupKind,
    item: Option<&str>,
    enabled: bool,
) -> Result<Configuration> {
    let mut next = config.clone();
    match item {
        Some(name) => {
            let item = next
                .items
                .iter_mut()
                .find(|it| it.group == group && it.name == name)
                .with_context(|| format!("no item '{name}' in group {group}"))?;
            item.enabled = enabled;
        }
        None => {
            let group = next
                .groups
                .iter_mut()
                .find(|g| g.kind == group)
                .with_context(|| format!("unknown group: {group}"))?;
            group.enabled = enabled;
        }
    }
    Ok(next)
}

fn run<S: SettingsStore>(command: Command, presets: &mut PresetStore<S>) -> Result<()> {
    let config = presets.load_current();

    match command {
        Command::Show => show(&config),
        Command::Generate(args) => {
            let values = RuntimeValues {
                order_number: args.order_number,
                material: args.material,
                quantity: args.quantity,
                process: args.process,
                pdf_width: args.width,
                pdf_height: args.height,
                dimension: DimensionOptions {
                    trim: args.trim,
                    shape: args.shape,
                    hide_numeric_radius: args.hide_radius,
                    ..DimensionOptions::default()
                },
            };
            println!("{}", pattern::generate(&config, &args.separator, &values));
        }
        Command::MoveGroup { dragged, target } => {
            let next = reorder::move_group(&config, parse_group(&dragged)?, parse_group(&target)?)?;
            presets.save_current(&next)?;
            show(&next);
        }
        Command::MoveItem {
            dragged,
            target,
            group,
        } => {
            let next = match (target, group) {
                (Some(target), None) => reorder::move_item_within_group(&config, &dragged, &target)?,
                (None, Some(group)) => {
                    reorder::move_item_to_group(&config, &dragged, parse_group(&group)?)?
                }
                _ => bail!("pass exactly one of --target or --group"),
            };
            presets.save_current(&next)?;
            show(&next);
        }
        Command::TogglePreserved { group, item } => {
            let (next, resolved) = conflict::toggle_preserved(&config, parse_group(&group)?, &item)?;
            presets.save_current(&next)?;
            if resolved {
                println!("previous preserved item in {group} was cleared");
            }
            show(&next);
        }
        Command::Enable { group, item } => {
            let next = set_enabled(&config, parse_group(&group)?, item.as_deref(), true)?;
            presets.save_current(&next)?;
            show(&next);
        }
        Command::Disable { group, item } => {
            let next = set_enabled(&config, parse_group(&group)?, item.as_deref(), false)?;
            presets.save_current(&next)?;
            show(&next);
        }
        Command::PreserveGroup { group, clear } => {
            let kind = parse_group(&group)?;
            let mut next = config.clone();
            let entry = next
                .groups
                .iter_mut()
                .find(|g| g.kind == kind)
                .with_context(|| format!("unknown group: {group}"))?;
            entry.preserved = !clear;
            presets.save_current(&next)?;
            show(&next);
        }
        Command::Preset { action } => match action {
            PresetAction::List => {
                for name in presets.list_names() {
                    println!("{name}");
                }
            }
            PresetAction::Save { name } => {
                presets.save(&name, &config)?;
                println!("saved preset '{name}'");
            }
            PresetAction::Load { name } => {
                let next = presets.load(&name)?;
                presets.save_current(&next)?;
                show(&next);
            }
            PresetAction::Delete { name } => {
                presets.delete(&name)?;
                println!("deleted preset '{name}'");
            }
        },
        Command::Reset => {
            let next = Configuration::full_feature_set();
            presets.save_current(&next)?;
            show(&next);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "warn".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "info" => TraceLevel::INFO,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let mut presets = PresetStore::new(FileStore::open_default());
    run(cli.command, &mut presets)
}
