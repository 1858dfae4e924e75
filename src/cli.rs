// Devprof CLI binary

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use devprof_lib::catalog::bundled::{
    auto_load_catalog, load_catalog, load_catalog_for_update, save_catalog,
};
use devprof_lib::catalog::classify::ModelClass;
use devprof_lib::settings::{app_dir, default_settings_path};
use devprof_lib::{
    AssignmentFilter, Category, DeviceProfileAllocator, FsStore, MaterializedProfile, ProfileTemplate,
    Settings,
};

#[derive(Parser)]
#[command(name = "devprof")]
#[command(about = "Devprof - Stable device profiles for account fleets", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to ~/.devprof/settings.json)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Assignment file override
    #[arg(long, global = true)]
    assignments: Option<PathBuf>,
    /// Template file override
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve (and assign if needed) profiles for identifiers
    Resolve {
        #[arg(required = true)]
        ids: Vec<String>,
        /// Force a category for new assignments
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show the stored profile for an identifier
    Show { id: String },

    /// Drop identifiers' profiles
    Release {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Drop and re-resolve identifiers' profiles
    Reassign {
        #[arg(required = true)]
        ids: Vec<String>,
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Clear every assignment
    Reset {
        /// Re-resolve every identifier that was assigned
        #[arg(long)]
        regenerate: bool,
    },

    /// List assignments
    List {
        /// Case-insensitive text matched against identifier and device model
        #[arg(long)]
        filter: Option<String>,
        /// Only show one device class (android, ios, desktop, unknown)
        #[arg(long)]
        class: Option<ModelClass>,
    },

    /// Show assignment statistics
    Summary {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage device templates
    Templates {
        #[command(subcommand)]
        action: TemplateAction,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List templates
    List {
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Add a template
    Add {
        #[arg(short, long)]
        category: Category,
        #[command(flatten)]
        fields: TemplateFields,
    },
    /// Edit a template; omitted fields keep their value
    Edit {
        #[arg(short, long)]
        category: Category,
        index: usize,
        #[command(flatten)]
        fields: TemplateFields,
    },
    /// Delete a template
    Delete {
        #[arg(short, long)]
        category: Category,
        index: usize,
    },
    /// Write the active catalog to a file
    Export { path: PathBuf },
    /// Replace the active catalog with a file's templates
    Import { path: PathBuf },
}

#[derive(clap::Args)]
struct TemplateFields {
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    system: Option<String>,
    #[arg(long)]
    app: Option<String>,
    #[arg(long)]
    lang: Option<String>,
    #[arg(long)]
    system_lang: Option<String>,
}

impl Commands {
    /// Commands that write the template file back
    fn writes_templates(&self) -> bool {
        matches!(
            self,
            Commands::Templates {
                action: TemplateAction::Add { .. }
                    | TemplateAction::Edit { .. }
                    | TemplateAction::Delete { .. }
                    | TemplateAction::Import { .. }
            }
        )
    }
}

impl TemplateFields {
    fn apply(self, mut base: ProfileTemplate) -> ProfileTemplate {
        if let Some(v) = self.model {
            base.device_model = v;
        }
        if let Some(v) = self.system {
            base.system_version = v;
        }
        if let Some(v) = self.app {
            base.app_version = v;
        }
        if let Some(v) = self.lang {
            base.lang_code = v;
        }
        if let Some(v) = self.system_lang {
            base.system_lang_code = v;
        }
        base
    }
}

/// Allocator plus the files it was loaded from
struct Workspace {
    allocator: DeviceProfileAllocator,
    assignments_path: PathBuf,
    templates_path: PathBuf,
}

impl Workspace {
    fn open(cli: &Cli) -> Result<Self> {
        let settings_path = match &cli.settings {
            Some(path) => path.clone(),
            None => default_settings_path()?,
        };
        let settings = Settings::load(&FsStore, &settings_path)?;

        let base_dir = match settings_path.parent() {
            Some(dir) if cli.settings.is_some() => dir.to_path_buf(),
            _ => app_dir()?,
        };
        let assignments_path = cli
            .assignments
            .clone()
            .unwrap_or_else(|| settings.assignments_file(&base_dir));
        let templates_path = cli
            .templates
            .clone()
            .unwrap_or_else(|| settings.templates_file(&base_dir));

        let catalog = if cli.command.writes_templates() {
            load_catalog_for_update(&FsStore, &templates_path).with_context(|| {
                format!(
                    "Refusing to overwrite unreadable template file {}; fix or remove it first",
                    templates_path.display()
                )
            })?
        } else {
            auto_load_catalog(&FsStore, &templates_path)
        };
        let mut allocator = DeviceProfileAllocator::new(catalog, settings.allocator_config())?;
        allocator
            .load(&FsStore, &assignments_path)
            .with_context(|| "Refusing to continue with an unreadable assignment file")?;

        log::debug!(
            "Opened {} assignments from {}",
            allocator.len(),
            assignments_path.display()
        );

        Ok(Self {
            allocator,
            assignments_path,
            templates_path,
        })
    }

    fn save_assignments(&self) -> Result<()> {
        self.allocator.persist(&FsStore, &self.assignments_path)?;
        Ok(())
    }

    fn save_templates(&self) -> Result<()> {
        save_catalog(&FsStore, self.allocator.catalog(), &self.templates_path)?;
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut ws = Workspace::open(&cli)?;

    match cli.command {
        Commands::Resolve { ids, category } => cmd_resolve(&mut ws, &ids, category),
        Commands::Show { id } => cmd_show(&ws, &id),
        Commands::Release { ids } => cmd_release(&mut ws, &ids),
        Commands::Reassign { ids, category } => cmd_reassign(&mut ws, &ids, category),
        Commands::Reset { regenerate } => cmd_reset(&mut ws, regenerate),
        Commands::List { filter, class } => cmd_list(&ws, filter.as_deref(), class),
        Commands::Summary { json } => cmd_summary(&ws, json),
        Commands::Templates { action } => cmd_templates(&mut ws, action),
    }
}

fn print_profile(id: &str, profile: &MaterializedProfile) {
    println!(
        "{}: {} - {} - {} ({}/{})",
        id,
        profile.device_model,
        profile.system_version,
        profile.app_version,
        profile.lang_code,
        profile.system_lang_code
    );
}

fn cmd_resolve(ws: &mut Workspace, ids: &[String], category: Option<Category>) -> Result<()> {
    for id in ids {
        let profile = ws.allocator.resolve(id, category)?;
        print_profile(id, &profile);
    }
    ws.save_assignments()
}

fn cmd_show(ws: &Workspace, id: &str) -> Result<()> {
    match ws.allocator.get(id) {
        Some(profile) => {
            println!("Identifier:       {}", id);
            println!("Device model:     {}", profile.device_model);
            println!("System version:   {}", profile.system_version);
            println!("App version:      {}", profile.app_version);
            println!("Language:         {}", profile.lang_code);
            println!("System language:  {}", profile.system_lang_code);
            println!("Device class:     {}", ws.allocator.class_of(profile));
            if let Some(category) = profile.category {
                println!("Category:         {}", category);
            }
            Ok(())
        }
        None => anyhow::bail!("No profile assigned to {}", id),
    }
}

fn cmd_release(ws: &mut Workspace, ids: &[String]) -> Result<()> {
    let mut released = 0;
    for id in ids {
        if ws.allocator.release(id) {
            released += 1;
        } else {
            println!("{}: no assignment", id);
        }
    }
    ws.save_assignments()?;
    println!("Released {} of {} identifiers", released, ids.len());
    Ok(())
}

fn cmd_reassign(ws: &mut Workspace, ids: &[String], category: Option<Category>) -> Result<()> {
    for id in ids {
        let profile = ws.allocator.reassign(id, category)?;
        print_profile(id, &profile);
    }
    ws.save_assignments()
}

fn cmd_reset(ws: &mut Workspace, regenerate: bool) -> Result<()> {
    let former = ws.allocator.reset();
    if regenerate {
        for id in &former {
            ws.allocator.resolve(id, None)?;
        }
        println!("Regenerated {} assignments", former.len());
    } else {
        println!("Cleared {} assignments", former.len());
    }
    ws.save_assignments()
}

fn cmd_list(ws: &Workspace, filter: Option<&str>, class: Option<ModelClass>) -> Result<()> {
    let filter = AssignmentFilter::new(filter, class)?;

    println!(
        "{:<16}  {:<28}  {:<12}  {:<10}  {:<6}  {}",
        "Identifier", "Device", "System", "App", "Lang", "Class"
    );

    let mut shown = 0;
    for (id, profile) in ws.allocator.search(&filter) {
        println!(
            "{:<16}  {:<28}  {:<12}  {:<10}  {:<6}  {}",
            id,
            profile.device_model,
            profile.system_version,
            profile.app_version,
            profile.lang_code,
            ws.allocator.class_of(profile)
        );
        shown += 1;
    }

    println!();
    println!("{} of {} assignments shown", shown, ws.allocator.len());
    Ok(())
}

fn cmd_summary(ws: &Workspace, json: bool) -> Result<()> {
    let summary = ws.allocator.summarize();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Total devices:    {}", summary.total);
    println!("Android devices:  {}", summary.android);
    println!("iOS devices:      {}", summary.ios);
    println!("Desktop devices:  {}", summary.desktop);
    println!("Unclassified:     {}", summary.unknown);
    println!();
    println!("Models:");
    for (model, count) in summary.models_by_frequency() {
        println!("  {:<32} {}", model, count);
    }
    Ok(())
}

fn cmd_templates(ws: &mut Workspace, action: TemplateAction) -> Result<()> {
    match action {
        TemplateAction::List { category } => {
            let categories = match category {
                Some(c) => vec![c],
                None => Category::ALL.to_vec(),
            };
            for category in categories {
                let templates = ws.allocator.catalog().templates(category);
                println!("{} ({} templates)", category, templates.len());
                for (index, t) in templates.iter().enumerate() {
                    println!(
                        "  {:>4}  {:<32}  {:<12}  {:<10}  {}/{}",
                        index, t.device_model, t.system_version, t.app_version, t.lang_code, t.system_lang_code
                    );
                }
            }
            Ok(())
        }
        TemplateAction::Add { category, fields } => {
            let base = ProfileTemplate::new("", "", "", "en", "en");
            let index = ws.allocator.catalog_mut().add_template(category, fields.apply(base))?;
            ws.save_templates()?;
            println!("Added {} template #{}", category, index);
            Ok(())
        }
        TemplateAction::Edit { category, index, fields } => {
            let current = ws
                .allocator
                .catalog()
                .templates(category)
                .get(index)
                .cloned()
                .with_context(|| format!("No {} template #{}", category, index))?;
            ws.allocator
                .catalog_mut()
                .edit_template(category, index, fields.apply(current))?;
            ws.save_templates()?;
            println!("Updated {} template #{}", category, index);
            Ok(())
        }
        TemplateAction::Delete { category, index } => {
            let removed = ws.allocator.catalog_mut().delete_template(category, index)?;
            ws.save_templates()?;
            println!("Deleted {} template '{}'", category, removed.device_model);
            Ok(())
        }
        TemplateAction::Export { path } => {
            save_catalog(&FsStore, ws.allocator.catalog(), &path)?;
            println!("Exported {} templates to {}", ws.allocator.catalog().total(), path.display());
            Ok(())
        }
        TemplateAction::Import { path } => cmd_import_templates(ws, &path),
    }
}

fn cmd_import_templates(ws: &mut Workspace, path: &Path) -> Result<()> {
    let catalog = load_catalog(&FsStore, path)?
        .with_context(|| format!("Template file not found: {}", path.display()))?;
    let total = catalog.total();
    *ws.allocator.catalog_mut() = catalog;
    ws.save_templates()?;
    println!("Imported {} templates from {}", total, path.display());
    Ok(())
}
