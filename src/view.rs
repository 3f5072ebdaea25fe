//! Text rendering of [`AppState`]. Pure: returns the text, prints nothing.

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::output::truncate;
use crate::request::StarAction;
use crate::state::AppState;
use crate::types::{Issue, Organization, Repository};

pub const TITLE: &str = "GitHub GraphQL Issues Client";

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Reactions")]
    reactions: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl IssueRow {
    fn new(index: usize, issue: &Issue) -> Self {
        Self {
            index,
            title: truncate(&issue.title, 60),
            reactions: reactions(issue),
            url: issue.url.clone(),
        }
    }
}

fn reactions(issue: &Issue) -> String {
    issue
        .reactions
        .edges
        .iter()
        .map(|edge| edge.node.content.emoji())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render(state: &AppState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(state).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
        }
        OutputFormat::Compact => render_compact(state),
        OutputFormat::Table => render_page(state),
    }
}

fn render_page(state: &AppState) -> String {
    let mut lines = vec![
        TITLE.bold().to_string(),
        format!("Show open issues for https://github.com/{}", state.path),
        String::new(),
    ];

    // Errors take the place of the organization, even when none was loaded.
    if let Some(message) = state.error_message() {
        lines.push(format!("{} {message}", "Something went wrong:".red().bold()));
        return lines.join("\n");
    }

    match &state.organization {
        Some(organization) => render_organization(organization, &mut lines),
        None => lines.push("No information yet ...".to_string()),
    }

    lines.join("\n")
}

fn render_organization(organization: &Organization, lines: &mut Vec<String>) {
    lines.push(format!(
        "{} {} ({})",
        "Issues from Organization:".bold(),
        organization.name.as_deref().unwrap_or("-"),
        organization.url
    ));

    match &organization.repository {
        Some(repository) => render_repository(repository, lines),
        None => lines.push("Repository not found".to_string()),
    }
}

fn render_repository(repository: &Repository, lines: &mut Vec<String>) {
    let star = StarAction::for_viewer(repository.viewer_has_starred);
    lines.push(format!(
        "{} {} ({})",
        "In Repository:".bold(),
        repository.name,
        repository.url
    ));
    lines.push(format!("[{}]", star.label()).yellow().to_string());
    lines.push(String::new());

    let issues = &repository.issues;
    if issues.edges.is_empty() {
        lines.push("No open issues".to_string());
    } else {
        let rows: Vec<IssueRow> = issues
            .issues()
            .enumerate()
            .map(|(i, issue)| IssueRow::new(i + 1, issue))
            .collect();
        lines.push(Table::new(rows).with(Style::rounded()).to_string());
    }

    lines.push(format!(
        "Showing {} of {} open issues",
        issues.edges.len(),
        issues.total_count
    ));

    if issues.page_info.has_next_page {
        lines.push(String::new());
        lines.push(format!("{}", "[More]".cyan()));
    }
}

fn render_compact(state: &AppState) -> String {
    if let Some(message) = state.error_message() {
        return format!("error: {message}");
    }
    let Some(repository) = state.repository() else {
        return "No information yet ...".to_string();
    };

    let mut lines: Vec<String> = repository
        .issues
        .issues()
        .map(|issue| {
            let labels: Vec<String> = issue
                .reactions
                .edges
                .iter()
                .map(|edge| edge.node.content.to_string())
                .collect();
            format!("{}\t{}\t{}", issue.title, issue.url, labels.join(","))
        })
        .collect();
    if repository.issues.page_info.has_next_page {
        lines.push("...".to_string());
    }
    lines.join("\n")
}
