//! Terminal rendering of dashboard pages with `comfy-table`.
//!
//! Colors come from a [`Palette`] derived from the [`AppContext`] theme, so
//! nothing here reads global state. A plain palette renders without any
//! styling.

use chrono::{DateTime, NaiveDate, Utc};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fiber_data::DashboardSummary;
use fiber_model::{
    LocationCategory, Project, ProjectActivity, ProjectDocument, ProjectLocation,
    ProjectMilestone, ProjectReport, ProjectStatus, WorkProgress,
};
use fiber_state::{AppContext, Pagination, ProjectTab, UserSession};

const TABLE_WIDTH: u16 = 140;
const BAR_WIDTH: usize = 10;

/// Cell colors for the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    styled: bool,
    header: Color,
    accent: Color,
    muted: Color,
}

impl Palette {
    /// Colors for `context`'s resolved theme; `styled = false` disables them.
    pub fn new(context: &AppContext, styled: bool) -> Self {
        if context.is_dark() {
            Self {
                styled,
                header: Color::Cyan,
                accent: Color::Cyan,
                muted: Color::DarkGrey,
            }
        } else {
            Self {
                styled,
                header: Color::Blue,
                accent: Color::DarkBlue,
                muted: Color::Grey,
            }
        }
    }

    /// No colors or attributes at all.
    pub fn plain() -> Self {
        Self::new(&AppContext::default(), false)
    }

    fn paint(&self, cell: Cell, color: Color) -> Cell {
        if self.styled { cell.fg(color) } else { cell }
    }

    fn strong(&self, cell: Cell) -> Cell {
        if self.styled {
            cell.add_attribute(Attribute::Bold)
        } else {
            cell
        }
    }

    fn header(&self, label: &str) -> Cell {
        self.strong(self.paint(Cell::new(label), self.header))
    }

    fn headers(&self, labels: &[&str]) -> Vec<Cell> {
        labels.iter().map(|label| self.header(label)).collect()
    }

    fn muted<T: ToString>(&self, value: T) -> Cell {
        self.paint(Cell::new(value), self.muted)
    }

    fn progress_color(&self, progress: WorkProgress) -> Color {
        match progress {
            WorkProgress::Completed => Color::Green,
            WorkProgress::InProgress => self.accent,
            WorkProgress::NotStarted => self.muted,
        }
    }

    fn status(&self, status: ProjectStatus) -> Cell {
        let color = match status {
            ProjectStatus::Delayed => Color::Red,
            other => self.progress_color(other.progress()),
        };
        self.paint(Cell::new(status.label()), color)
    }
}

pub fn apply_table_style(table: &mut Table, palette: &Palette) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
    if palette.styled {
        table.enforce_styling();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn styled_table(palette: &Palette, headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(palette.headers(headers));
    apply_table_style(&mut table, palette);
    table
}

pub fn project_table(projects: &[&Project], palette: &Palette) -> Table {
    let mut table = styled_table(
        palette,
        &["ID", "Project", "Location", "Status", "Progress", "Target"],
    );
    for project in projects {
        table.add_row(vec![
            palette.paint(Cell::new(&project.id), palette.accent),
            Cell::new(&project.name),
            Cell::new(&project.location),
            palette.status(project.status),
            Cell::new(progress_bar(project.progress)),
            Cell::new(format_date(project.target_date)),
        ]);
    }
    align_column(&mut table, 4, CellAlignment::Right);
    table
}

/// Key/value header of the project detail page.
pub fn project_header(project: &Project, palette: &Palette) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table, palette);
    let rows = [
        ("Project", Cell::new(&project.name)),
        ("ID", Cell::new(&project.id)),
        ("Client", Cell::new(&project.client)),
        ("Location", Cell::new(&project.location)),
        ("Category", Cell::new(project.category)),
        ("Manager", Cell::new(&project.manager)),
        ("Status", palette.status(project.status)),
        ("Progress", Cell::new(progress_bar(project.progress))),
        (
            "Schedule",
            Cell::new(format!(
                "{} to {}",
                format_date(project.start_date),
                format_date(project.target_date)
            )),
        ),
    ];
    for (label, value) in rows {
        table.add_row(vec![palette.header(label), value]);
    }
    table
}

/// Tab bar with the active tab bracketed.
pub fn tab_strip(active: ProjectTab) -> String {
    ProjectTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn milestone_table(milestones: &[&ProjectMilestone], palette: &Palette) -> Table {
    let mut table = styled_table(
        palette,
        &["ID", "Milestone", "Status", "Due", "Photos", "Missing"],
    );
    for milestone in milestones {
        let (uploaded, required) = milestone.photo_progress();
        let photos = Cell::new(format!("{uploaded}/{required}"));
        let photos = if milestone.has_all_photos() {
            palette.paint(photos, Color::Green)
        } else {
            photos
        };
        let missing: Vec<&str> = milestone.missing_photos().collect();
        table.add_row(vec![
            palette.muted(&milestone.id),
            Cell::new(&milestone.title),
            palette.paint(
                Cell::new(milestone.status.label()),
                palette.progress_color(milestone.status.progress()),
            ),
            Cell::new(format_date(milestone.due_date)),
            photos,
            palette.muted(if missing.is_empty() {
                "-".to_string()
            } else {
                missing.join(", ")
            }),
        ]);
    }
    align_column(&mut table, 4, CellAlignment::Right);
    table
}

pub fn report_table(reports: &[&ProjectReport], palette: &Palette) -> Table {
    let mut table = styled_table(palette, &["ID", "Report", "Kind", "Author", "Submitted"]);
    for report in reports {
        table.add_row(vec![
            palette.muted(&report.id),
            Cell::new(&report.title),
            Cell::new(report.kind),
            Cell::new(&report.author),
            Cell::new(format_timestamp(&report.submitted_at)),
        ]);
    }
    table
}

pub fn document_table(documents: &[&ProjectDocument], palette: &Palette) -> Table {
    let mut table = styled_table(
        palette,
        &["ID", "Document", "Type", "Size", "Uploaded by", "Uploaded"],
    );
    for document in documents {
        table.add_row(vec![
            palette.muted(&document.id),
            Cell::new(&document.name),
            Cell::new(document.file_type.to_uppercase()),
            Cell::new(document.size_label()),
            Cell::new(&document.uploaded_by),
            Cell::new(format_timestamp(&document.uploaded_at)),
        ]);
    }
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

pub fn activity_table(activities: &[&ProjectActivity], palette: &Palette) -> Table {
    let mut table = styled_table(palette, &["When", "Who", "What"]);
    for activity in activities {
        table.add_row(vec![
            palette.muted(format_timestamp(&activity.timestamp)),
            Cell::new(&activity.actor),
            Cell::new(&activity.description),
        ]);
    }
    table
}

pub fn location_table(locations: &[&ProjectLocation], palette: &Palette) -> Table {
    let mut table = styled_table(
        palette,
        &["ID", "Site", "Project", "Category", "Status", "Position", "Docs"],
    );
    for location in locations {
        let docs = if location.is_documented {
            palette.paint(Cell::new("yes"), Color::Green)
        } else {
            palette.paint(Cell::new("no"), Color::Yellow)
        };
        table.add_row(vec![
            palette.muted(&location.id),
            Cell::new(&location.name),
            Cell::new(&location.project_id),
            Cell::new(location.category),
            palette.status(location.status),
            Cell::new(format!(
                "{:.4}, {:.4}",
                location.latitude(),
                location.longitude()
            )),
            docs,
        ]);
    }
    table
}

pub fn summary_table(summary: &DashboardSummary, palette: &Palette) -> Table {
    let mut table = styled_table(palette, &["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Projects"),
        palette.strong(Cell::new(summary.total_projects)),
    ]);
    for status in ProjectStatus::ALL {
        table.add_row(vec![
            palette.status(status),
            Cell::new(summary.projects_with_status(status)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Average progress"),
        Cell::new(progress_bar(summary.average_progress)),
    ]);
    table.add_row(vec![
        Cell::new("Locations"),
        Cell::new(format!(
            "{} ({} documented)",
            summary.total_locations, summary.documented_locations
        )),
    ]);
    for category in LocationCategory::ALL {
        table.add_row(vec![
            palette.muted(format!("  {category}")),
            Cell::new(summary.locations_in_category(category)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Milestone photos"),
        Cell::new(format!(
            "{}/{} ({}%)",
            summary.photos_uploaded,
            summary.photos_required,
            summary.photo_percent()
        )),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

pub fn session_table(user: &UserSession, context: &AppContext, palette: &Palette) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table, palette);
    let theme = format!(
        "{} ({})",
        context.theme.label(),
        if context.is_dark() { "dark" } else { "light" }
    );
    for (label, value) in [
        ("Signed in as", user.display_name.as_str()),
        ("Email", user.email.as_str()),
        ("Role", user.role.label()),
        ("Theme", theme.as_str()),
    ] {
        table.add_row(vec![palette.header(label), Cell::new(value)]);
    }
    table
}

/// Pager caption with navigation hints, e.g. `Page 2 of 3 (6-10 of 12) | prev | next`.
pub fn pager_line(pagination: &Pagination) -> String {
    let mut line = format!(
        "Page {} of {} ({})",
        pagination.current_page(),
        pagination.total_pages().max(1),
        pagination.range_label()
    );
    if pagination.can_go_back() {
        line.push_str(" | prev");
    }
    if pagination.can_go_forward() {
        line.push_str(" | next");
    }
    line
}

/// Fixed-width text progress bar, e.g. `[######----]  60%`.
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}
