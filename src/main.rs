//! Picklist CLI application entry point
//!
//! This is the main executable for picklist. It reads a list of options,
//! shows them in a filterable selection modal, and prints what the user
//! committed.
//!
//! # Usage
//!
//! ```bash
//! # Pick one value from a file (default command)
//! picklist brands.txt
//! picklist pick brands.txt --header "Fuel Brand" -s Shell
//!
//! # Pick several values from stdin, printed as JSON
//! printf 'Shell\nPetron\nCaltex\n' | picklist pick --multi --json
//!
//! # Show the rows a query would produce
//! picklist filter brands.txt --query pet
//!
//! # Configuration
//! picklist config set max_query_len=30
//! picklist config get reserved_prefix
//! ```
//!
//! A dismissed picker prints nothing and exits with status 1; errors exit
//! with status 2.
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/picklist/config.toml` on Linux) and are created with
//! defaults on first run.

use picklist::{
    PicklistError,
    cli::{Cli, Commands, ConfigCommands, SourceArgs},
    config::{CONFIG_KEYS, OutputFormat, PicklistConfig},
    filter::{DisplayRow, filter_rows},
    selection::SelectionValue,
    source,
    ui::{
        OutputWriter, Picker, PickerConfig, RatatuiPicker, StdoutWriter, ratatui_adapter::Theme,
    },
};
use serde_json::json;

type Result<T> = std::result::Result<T, PicklistError>;

/// Print committed values in the requested format
fn print_values(values: &[String], format: OutputFormat, output: &dyn OutputWriter) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for value in values {
                output.write(value);
            }
        }
        OutputFormat::Json => output.write(&serde_json::to_string(values)?),
    }
    Ok(())
}

/// Run the interactive picker
///
/// # Returns
/// `true` if the user committed a value, `false` if the modal was dismissed
///
/// # Errors
/// Returns `PicklistError` if reading options, the terminal, or printing fails.
fn handle_pick(
    config: &PicklistConfig,
    source: &SourceArgs,
    header: &str,
    selected: &[String],
    query: &str,
    output: &dyn OutputWriter,
) -> Result<bool> {
    let options = source::load_options(source.file.as_deref())?;
    let mode = source.selection_mode();
    if !mode.is_multi() && selected.len() > 1 {
        output.warning(&format!(
            "Single-select keeps only the first --selected value ({})",
            selected[0]
        ));
    }

    let picker_config = PickerConfig::new(
        header,
        options,
        SelectionValue::from_values(mode, selected.to_vec()),
    )
    .with_settings(config)
    .with_rules(source.filter_rules(config))
    .with_query(query);

    let result = RatatuiPicker::new()
        .with_theme(Theme::named(config.theme))
        .run(picker_config)?;
    if result.aborted {
        output.info("Dismissed, nothing selected");
        return Ok(false);
    }

    print_values(&result.selected, source.output_format(config), output)?;
    if mode.is_multi() {
        output.success(&format!("{} selected", result.selected.len()));
    }
    Ok(true)
}

/// Print the rows the picker would show for `query`
///
/// # Errors
/// Returns `PicklistError` if reading options or JSON encoding fails.
fn handle_filter(
    config: &PicklistConfig,
    source: &SourceArgs,
    query: &str,
    output: &dyn OutputWriter,
) -> Result<()> {
    let options = source::load_options(source.file.as_deref())?;
    let rules = source.filter_rules(config);
    let rows = filter_rows(&options, query, source.selection_mode(), &rules);

    match source.output_format(config) {
        OutputFormat::Json => {
            let rows: Vec<_> = rows
                .iter()
                .map(|row| json!({ "label": row.label, "create": row.is_create() }))
                .collect();
            output.write(&serde_json::to_string(&rows)?);
        }
        OutputFormat::Plain if rows.is_empty() => output.write(&config.empty_message),
        OutputFormat::Plain => {
            for row in &rows {
                output.write(&plain_row(row, &config.create_suffix));
            }
        }
    }

    if !rows.is_empty() {
        output.info(&format!("{} of {} shown", rows.len(), options.len()));
    }
    Ok(())
}

fn plain_row(row: &DisplayRow, create_suffix: &str) -> String {
    if row.is_create() {
        format!("{} {create_suffix}", row.label)
    } else {
        row.label.clone()
    }
}

/// Handle config subcommands
///
/// # Errors
/// Returns `PicklistError` for unknown keys, bad values, or a failed save.
fn handle_config_command(
    mut config: PicklistConfig,
    command: &ConfigCommands,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = ConfigCommands::split_setting(setting).ok_or_else(|| {
                PicklistError::InvalidInput(
                    "Invalid format. Use: picklist config set key=value".into(),
                )
            })?;
            if !CONFIG_KEYS.contains(&key) {
                return Err(unknown_key(key));
            }
            config.set(key, value)?;
            config.save()?;
            output.success(&format!("Set {key} = {value}"));
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).ok_or_else(|| unknown_key(key))?;
            output.write(&value);
        }
        ConfigCommands::Path => {
            let path = PicklistConfig::config_path()?;
            output.write(&path.display().to_string());
        }
    }
    Ok(())
}

fn unknown_key(key: &str) -> PicklistError {
    PicklistError::InvalidInput(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

/// Dispatch the parsed command
///
/// # Returns
/// `false` when the picker was dismissed
///
/// # Errors
///
/// Returns `PicklistError` if any command handler fails.
fn run(cli: &Cli, config: PicklistConfig, output: &dyn OutputWriter) -> Result<bool> {
    match cli.get_command() {
        Commands::Pick {
            source,
            header,
            selected,
            query,
        } => handle_pick(&config, &source, &header, &selected, &query, output),
        Commands::Filter { source, query } => {
            handle_filter(&config, &source, &query, output)?;
            Ok(true)
        }
        Commands::Config { command } => {
            handle_config_command(config, &command, output)?;
            Ok(true)
        }
    }
}

/// Main entry point for the picklist application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler. Exits with status 1 when the picker is
/// dismissed and 2 on any error.
fn main() {
    let cli = Cli::parse_args();
    let config = PicklistConfig::load();
    let quiet = cli.quiet || config.as_ref().is_ok_and(|config| config.quiet);
    let output = StdoutWriter::new(quiet);

    let outcome = config
        .map_err(PicklistError::from)
        .and_then(|config| run(&cli, config, &output));

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            output.error(&e.to_string());
            std::process::exit(2);
        }
    }
}
