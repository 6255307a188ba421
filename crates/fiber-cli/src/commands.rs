use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::ColorChoice;
use comfy_table::Table;
use fiber_data::Catalog;
use fiber_state::{
    AppContext, Credentials, ListPage, ProjectDetailView, ProjectListView, ProjectTab,
    RealTimeClock,
};
use tokio::sync::mpsc;
use tracing::{debug, info_span};

use fiber_cli::render::{self, Palette};
use fiber_cli::settings::Settings;

use crate::cli::{
    Cli, ClockArgs, Command, ConfigArgs, LoginArgs, MapArgs, ProjectArgs, ProjectsArgs,
};

/// Everything a command needs besides its own arguments.
struct App {
    settings: Settings,
    settings_path: PathBuf,
    context: AppContext,
    palette: Palette,
}

impl App {
    fn from_cli(cli: &Cli) -> Self {
        let settings_path = cli.config.clone().unwrap_or_else(Settings::config_path);
        let settings = Settings::load_from(&settings_path);
        let mut context = AppContext::new(cli.theme.unwrap_or(settings.display.theme));
        context.system_is_dark = terminal_prefers_dark();
        let styled = match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };
        let palette = Palette::new(&context, styled);
        debug!(
            path = %settings_path.display(),
            theme = %context.theme,
            dark = context.is_dark(),
            "settings resolved"
        );
        Self {
            settings,
            settings_path,
            context,
            palette,
        }
    }

    fn items_per_page(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.settings.display.items_per_page)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let mut app = App::from_cli(&cli);
    match cli.command {
        Command::Projects(args) => run_projects(&app, &args),
        Command::Project(args) => run_project(&app, &args),
        Command::Map(args) => run_map(&app, &args),
        Command::Summary => run_summary(&app),
        Command::Clock(args) => run_clock(&app, &args),
        Command::Config(args) => run_config(&app, &args),
        Command::Login(args) => run_login(&mut app, &args),
    }
}

fn load_catalog() -> Result<Catalog> {
    Catalog::embedded().context("load project catalog")
}

fn run_projects(app: &App, args: &ProjectsArgs) -> Result<()> {
    let catalog = load_catalog()?;
    let projects = catalog.projects();
    let mut view = ProjectListView::new(app.items_per_page(args.page.per_page));
    if let Some(query) = &args.search {
        view.set_search_query(query.as_str());
    }
    view.set_filter_status(args.status);

    // Sync the item count before navigating so the page is clamped correctly.
    view.page(projects);
    view.pagination_mut().go_to_page(args.page.page);
    let page = view.page(projects);

    if page.items.is_empty() {
        println!("No projects match the current filters.");
    } else {
        println!("{}", render::project_table(&page.items, &app.palette));
    }
    println!("{}", render::pager_line(&page.pagination));
    Ok(())
}

fn run_project(app: &App, args: &ProjectArgs) -> Result<()> {
    let catalog = load_catalog()?;
    let project = catalog.find_project(&args.id)?;
    let span = info_span!("project", id = %project.id);
    let _guard = span.enter();

    let mut view = ProjectDetailView::new(
        project.id.clone(),
        app.items_per_page(args.page.per_page),
    );
    let tab = view.observe_tab_param(args.tab.as_deref());

    println!("{}", render::project_header(project, &app.palette));
    println!("{}", render::tab_strip(tab));

    let id = &project.id;
    let palette = &app.palette;
    let page = args.page.page;
    let (table, pagination) = match tab {
        ProjectTab::Milestones => {
            let page = open_tab(&mut view, tab, catalog.milestones_for(id), page);
            (render::milestone_table(&page.items, palette), page.pagination)
        }
        ProjectTab::Reports => {
            let page = open_tab(&mut view, tab, catalog.reports_for(id), page);
            (render::report_table(&page.items, palette), page.pagination)
        }
        ProjectTab::Documents => {
            let page = open_tab(&mut view, tab, catalog.documents_for(id), page);
            (render::document_table(&page.items, palette), page.pagination)
        }
        ProjectTab::Activities => {
            let page = open_tab(&mut view, tab, catalog.activities_for(id), page);
            (render::activity_table(&page.items, palette), page.pagination)
        }
    };
    print_tab(&table, tab, pagination.total_items());
    println!("{}", render::pager_line(&pagination));
    Ok(())
}

fn open_tab<'a, T>(
    view: &mut ProjectDetailView,
    tab: ProjectTab,
    items: &'a [T],
    page: usize,
) -> ListPage<'a, T> {
    view.page(tab, items);
    view.pagination_mut(tab).go_to_page(page);
    view.page(tab, items)
}

fn print_tab(table: &Table, tab: ProjectTab, total: usize) {
    if total == 0 {
        println!("No {} yet.", tab.as_str());
    } else {
        println!("{table}");
    }
}

fn run_map(app: &App, args: &MapArgs) -> Result<()> {
    let catalog = load_catalog()?;
    let mut locations = match &args.area {
        Some(area) => {
            let found = catalog.locations_in_area(area);
            if found.is_empty()
                && !catalog
                    .area_codes()
                    .iter()
                    .any(|code| code.eq_ignore_ascii_case(area.trim()))
            {
                bail!(
                    "unknown area code '{area}' (known: {})",
                    catalog.area_codes().join(", ")
                );
            }
            found
        }
        None => catalog.locations().iter().collect(),
    };
    if let Some(category) = args.category {
        locations.retain(|location| location.category == category);
    }
    if args.undocumented {
        locations.retain(|location| !location.is_documented);
    }

    if locations.is_empty() {
        println!("No locations match the current filters.");
        return Ok(());
    }
    let documented = locations.iter().filter(|l| l.is_documented).count();
    println!("{}", render::location_table(&locations, &app.palette));
    println!(
        "{} locations, {} documented, {} undocumented",
        locations.len(),
        documented,
        locations.len() - documented
    );
    Ok(())
}

fn run_summary(app: &App) -> Result<()> {
    let catalog = load_catalog()?;
    println!("{}", render::summary_table(&catalog.summary(), &app.palette));
    Ok(())
}

fn run_clock(app: &App, args: &ClockArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("start clock runtime")?;
    runtime.block_on(async {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let clock = RealTimeClock::start(app.settings.clock.period(), move |now| {
            let _ = tx.send(now);
        })?;
        for _ in 0..args.ticks {
            match rx.recv().await {
                Some(now) => println!("{now}"),
                None => break,
            }
        }
        clock.stop();
        Ok::<(), anyhow::Error>(())
    })
}

fn run_config(app: &App, args: &ConfigArgs) -> Result<()> {
    let path = &app.settings_path;
    if args.init {
        if path.exists() {
            println!("Settings already exist at {}", path.display());
        } else {
            Settings::default().save_to(path)?;
            println!("Wrote default settings to {}", path.display());
        }
    }
    println!("Settings file: {}", path.display());
    print!("{}", app.settings.to_toml()?);
    Ok(())
}

fn run_login(app: &mut App, args: &LoginArgs) -> Result<()> {
    let catalog = load_catalog()?;
    let authenticator = catalog.authenticator();
    let credentials = Credentials::new(args.email.as_str(), args.password.as_str());
    let user = app
        .context
        .session
        .sign_in(&authenticator, &credentials)
        .context("sign in")?
        .clone();
    println!(
        "{}",
        render::session_table(&user, &app.context, &app.palette)
    );
    Ok(())
}

/// Best-effort dark background detection from `COLORFGBG` (`fg;bg`).
fn terminal_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| value.rsplit(';').next()?.parse::<u8>().ok())
        .is_some_and(|bg| bg < 7 || bg == 8)
}
