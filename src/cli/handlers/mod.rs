mod timer;

use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{state, store};
use crate::model::registry::Registry;
use crate::ops::{list_ops, task_ops};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Resolve the data directory once; every handler gets it passed in.
    let dir = match cli.dir {
        Some(ref d) => std::fs::canonicalize(d)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", d, e))?,
        None => std::env::current_dir()?,
    };

    match cli.command {
        // Task commands (operate on the current list)
        Commands::Add(args) => cmd_add(&dir, args),
        Commands::Check(args) => cmd_check(&dir, args),
        Commands::Rm(args) => cmd_rm(&dir, args),
        Commands::List(args) => cmd_list(&dir, args, json),

        // List management
        Commands::Lists => cmd_lists(&dir, json),
        Commands::New(args) => cmd_new(&dir, args),
        Commands::Rename(args) => cmd_rename(&dir, args),
        Commands::Drop(args) => cmd_drop(&dir, args),
        Commands::Select(args) => cmd_select(&dir, args),

        // Timer
        Commands::Timer(args) => timer::cmd_timer(&dir, args, json),

        // Maintenance
        Commands::Reset(args) => cmd_reset(&dir, args),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the registry: store contents plus the remembered selection.
///
/// A corrupt or unsupported store is surfaced with a pointer to the reset
/// flow rather than silently discarded.
fn load_registry(dir: &Path) -> Result<Registry, Box<dyn std::error::Error>> {
    let lists = store::load_store(dir).map_err(|e| match e {
        store::StoreError::Corrupt { .. } | store::StoreError::UnsupportedVersion { .. } => {
            format!("{}\nrun `nest reset --force` to back it up and start empty", e)
        }
        other => other.to_string(),
    })?;
    let ui = state::read_ui_state(dir);
    Ok(Registry::bootstrap(
        lists,
        ui.as_ref().map(|s| s.current_list.as_str()),
    ))
}

/// Save the registry's lists and remember the selection.
///
/// The store write is fatal on failure; the selection sidecar is best
/// effort, since losing it only costs a preference.
fn save_registry(dir: &Path, registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    store::save_store(dir, &registry.lists)?;
    let ui = state::UiState {
        current_list: registry.current.clone(),
    };
    if let Err(e) = state::write_ui_state(dir, &ui) {
        eprintln!("warning: could not write selection state: {}", e);
    }
    Ok(())
}

/// Remember only the selection, leaving the store untouched.
fn save_selection(dir: &Path, registry: &Registry) -> Result<(), Box<dyn std::error::Error>> {
    let ui = state::UiState {
        current_list: registry.current.clone(),
    };
    state::write_ui_state(dir, &ui)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Task command handlers
// ---------------------------------------------------------------------------

fn cmd_add(dir: &Path, args: PathArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = load_registry(dir)?;
    let path: Vec<&str> = args.path.iter().map(|s| s.as_str()).collect();
    let Some((&text, parents)) = path.split_last() else {
        return Err("add needs a task text".into());
    };

    let current = registry.current.clone();
    let added = {
        let list = registry.current_list_mut();
        let siblings = task_ops::siblings_mut(&mut list.tasks, parents)?;
        task_ops::add_task(siblings, text)?
    };
    save_registry(dir, &registry)?;

    if parents.is_empty() {
        println!("Added \"{}\" to {}", added, current);
    } else {
        println!("Added \"{}\" under {}", added, parents.join(" / "));
    }
    Ok(())
}

fn cmd_check(dir: &Path, args: PathArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = load_registry(dir)?;
    let path: Vec<&str> = args.path.iter().map(|s| s.as_str()).collect();
    let Some((&text, _)) = path.split_last() else {
        return Err("check needs a task path".into());
    };

    let line = {
        let list = registry.current_list_mut();
        let node = task_ops::find_node_mut(&mut list.tasks, &path)
            .ok_or_else(|| task_ops::TaskError::NotFound(path.join(" / ")))?;
        task_ops::toggle_complete(node);
        format_task_line(text, node)
    };
    save_registry(dir, &registry)?;

    println!("{}", line);
    Ok(())
}

fn cmd_rm(dir: &Path, args: PathArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = load_registry(dir)?;
    let path: Vec<&str> = args.path.iter().map(|s| s.as_str()).collect();
    let Some((&text, parents)) = path.split_last() else {
        return Err("rm needs a task path".into());
    };

    // Deleting something already gone is fine; no error, no save.
    let current = registry.current.clone();
    let deleted = {
        let list = registry.current_list_mut();
        match task_ops::siblings_mut(&mut list.tasks, parents) {
            Ok(siblings) => task_ops::delete_task(siblings, text),
            Err(_) => false,
        }
    };

    if deleted {
        save_registry(dir, &registry)?;
        println!("Deleted \"{}\"", path.join(" / "));
    } else {
        println!("Nothing to delete: \"{}\" is not in {}", path.join(" / "), current);
    }
    Ok(())
}

fn cmd_list(dir: &Path, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(dir)?;

    if json {
        let lists: Vec<ListJson> = registry
            .lists
            .iter()
            .filter(|(name, _)| args.all || **name == registry.current)
            .map(|(name, list)| list_to_json(name, list, *name == registry.current))
            .collect();
        println!("{}", serde_json::to_string_pretty(&lists)?);
    } else {
        let mut first = true;
        for (name, list) in &registry.lists {
            if !args.all && *name != registry.current {
                continue;
            }
            if !first {
                println!();
            }
            first = false;
            for line in format_list(name, list, *name == registry.current) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// List management handlers
// ---------------------------------------------------------------------------

fn cmd_lists(dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = load_registry(dir)?;

    if json {
        let infos: Vec<ListInfoJson> = registry
            .lists
            .iter()
            .map(|(name, list)| ListInfoJson {
                name: name.clone(),
                current: *name == registry.current,
                tasks: list.total_tasks(),
                completed: list.completed_tasks(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else {
        for (name, list) in &registry.lists {
            println!("{}", format_list_summary(name, list, *name == registry.current));
        }
    }
    Ok(())
}

fn cmd_new(dir: &Path, args: NewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = load_registry(dir)?;
    let name = list_ops::create_list(&mut registry, args.base.as_deref().unwrap_or("List"));
    save_registry(dir, &registry)?;
    println!("Created and selected \"{}\"", name);
    Ok(())
}

fn cmd_rename(dir: &Path, args: RenameArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = load_registry(dir)?;
    list_ops::rename_list(&mut registry, &args.old, &args.new)?;
    save_registry(dir, &registry)?;
    println!("Renamed \"{}\" to \"{}\"", args.old, args.new.trim());
    Ok(())
}

fn cmd_drop(dir: &Path, args: DropArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.force {
        return Err(format!(
            "this deletes list \"{}\" and every task in it; pass --force to confirm",
            args.name
        )
        .into());
    }

    let mut registry = load_registry(dir)?;
    let was_current = registry.current == args.name;
    list_ops::delete_list(&mut registry, &args.name)?;
    save_registry(dir, &registry)?;

    if was_current {
        println!("Deleted \"{}\"; selected \"{}\"", args.name, registry.current);
    } else {
        println!("Deleted \"{}\"", args.name);
    }
    Ok(())
}

fn cmd_select(dir: &Path, args: SelectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = load_registry(dir)?;
    list_ops::select_list(&mut registry, &args.name)?;
    // Only the selection changed; the store contents are untouched.
    save_selection(dir, &registry)?;
    println!("Selected \"{}\"", args.name);
    Ok(())
}

// ---------------------------------------------------------------------------
// Maintenance handlers
// ---------------------------------------------------------------------------

fn cmd_reset(dir: &Path, args: ResetArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.force {
        return Err(
            "this discards every list; pass --force to confirm (the old store is kept as a backup)"
                .into(),
        );
    }

    match store::backup_store(dir)? {
        Some(backup) => println!("Backed up old store to {}", backup.display()),
        None => println!("No store file to back up"),
    }

    let registry = Registry::new();
    save_registry(dir, &registry)?;
    println!("Store reset; current list is \"{}\"", registry.current);
    Ok(())
}
