//! Rendering the embedded catalog the way the commands do.

use fiber_cli::render::{self, Palette};
use fiber_data::Catalog;
use fiber_model::ProjectId;
use fiber_state::{ProjectDetailView, ProjectListView, ProjectTab, StatusFilter};

fn catalog() -> Catalog {
    Catalog::embedded().unwrap()
}

#[test]
fn project_page_table_lists_only_current_page() {
    let catalog = catalog();
    let mut view = ProjectListView::new(5);
    view.set_filter_status(StatusFilter::Completed);
    let page = view.page(catalog.projects());

    let table = render::project_table(&page.items, &Palette::plain()).to_string();
    assert!(table.contains("FO-JKT-001"));
    assert!(table.contains("FO-SMG-001"));
    assert!(!table.contains("FO-JKT-002"));
    assert!(table.contains("[##########] 100%"));
    insta::assert_snapshot!(render::pager_line(&page.pagination), @"Page 1 of 1 (1-3 of 3)");
}

#[test]
fn plain_palette_emits_no_ansi() {
    let catalog = catalog();
    let summary = render::summary_table(&catalog.summary(), &Palette::plain()).to_string();
    assert!(!summary.contains('\u{1b}'));
    assert!(summary.contains("Pada Jadwal"));
    assert!(summary.contains("12/19 (63%)"));
}

#[test]
fn milestone_tab_shows_missing_photos() {
    let catalog = catalog();
    let id = ProjectId::new("FO-JKT-002").unwrap();
    let milestones = catalog.milestones_for(&id);
    let mut view = ProjectDetailView::new(id, 5);
    let tab = view.observe_tab_param(Some("milestones"));
    let page = view.page(tab, milestones);

    let table = render::milestone_table(&page.items, &Palette::plain()).to_string();
    assert!(table.contains("Handhole"));
    assert!(table.contains("Cable drum, Pulling"));
    assert!(!table.contains("MS-009"));
    insta::assert_snapshot!(render::pager_line(&page.pagination), @"Page 1 of 2 (1-5 of 6) | next");
}

#[test]
fn unknown_tab_falls_back_to_milestones() {
    let id = ProjectId::new("FO-JKT-002").unwrap();
    let mut view = ProjectDetailView::new(id, 5);
    let tab = view.observe_tab_param(Some("photos"));
    assert_eq!(tab, ProjectTab::Milestones);
    insta::assert_snapshot!(
        render::tab_strip(tab),
        @"[Milestones] | Reports | Documents | Activities"
    );
}

#[test]
fn document_sizes_are_human_readable() {
    let catalog = catalog();
    let id = ProjectId::new("FO-JKT-001").unwrap();
    let documents: Vec<_> = catalog.documents_for(&id).iter().collect();
    let table = render::document_table(&documents, &Palette::plain()).to_string();
    assert!(table.contains("3.0 MB"));
    assert!(table.contains("200.0 KB"));
    assert!(table.contains("DWG"));
}

#[test]
fn location_table_lists_area() {
    let catalog = catalog();
    let locations = catalog.locations_in_area("sby");
    let table = render::location_table(&locations, &Palette::plain()).to_string();
    assert!(table.contains("POP Rungkut"));
    assert!(table.contains("ODC Gubeng"));
    assert!(table.contains("-7.3290, 112.7800"));
}
