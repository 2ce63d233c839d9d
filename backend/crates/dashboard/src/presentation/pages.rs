//! Pages

use auth::AuthContext;

use crate::domain::project::{Project, ProjectStatus, ProjectStatusCount};
use crate::presentation::components::{SignInPrompt, escape, footer, header};

fn layout(auth: &AuthContext, title: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title></head><body>{}<main>{}</main>{}</body></html>"#,
        escape(title),
        header(auth),
        main,
        footer()
    )
}

fn status_summary(count: &ProjectStatusCount) -> String {
    let items: String = [ProjectStatus::Complete, ProjectStatus::Running, ProjectStatus::Setup]
        .iter()
        .map(|status| {
            format!(
                r#"<li class="status status--{}"><span class="status-label">{}</span> <span class="status-count">{}</span></li>"#,
                status.as_str(),
                status.label(),
                count.get(*status)
            )
        })
        .collect();
    format!(r#"<ul class="status-summary">{items}</ul>"#)
}

fn project_row(project: &Project) -> String {
    format!(
        r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
        escape(&project.name),
        escape(&project.description),
        project.status.label(),
        project.dataset_count.unwrap_or(0)
    )
}

/// Dashboard home
pub fn dashboard_page(auth: &AuthContext, projects: &[Project], count: &ProjectStatusCount) -> String {
    let main = if auth.is_loading() {
        r#"<p class="loading">Loading…</p>"#.to_string()
    } else if !auth.is_authenticated() {
        SignInPrompt::default()
            .with_message("Please sign in to view your projects.")
            .render()
    } else {
        let rows: String = projects.iter().map(project_row).collect();
        format!(
            r#"<h1>Projects</h1>{}<table class="projects"><thead><tr><th>Name</th><th>Description</th><th>Status</th><th>Datasets</th></tr></thead><tbody>{rows}</tbody></table>"#,
            status_summary(count)
        )
    };

    layout(auth, "Dashboard | Turing Biosciences", &main)
}
