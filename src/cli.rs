//! Command-line front end over the contacts table and the email panel.

use clap::{Args, Parser, Subcommand};

use crate::domain::types::PageSize;
use crate::dto::contacts::{TableBody, TableView};
use crate::dto::email::{StatusMessage, event_options};
use crate::forms::filters::FilterForm;
use crate::repository::HttpRepository;
use crate::services::ServiceResult;
use crate::services::contacts::ContactsTable;
use crate::services::email::EmailComposer;
use crate::services::events::load_events;

#[derive(Debug, Parser)]
#[command(name = "crm-contacts", about = "Browse CRM contacts and email them in bulk")]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List one page of contacts
    List(ListArgs),
    /// List events that can be targeted by an email
    Events,
    /// Email every contact matching the filters
    Send(SendArgs),
}

/// Filter inputs, passed through unvalidated like the filter panel.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub job_title: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub min_hosting: Option<String>,
    #[arg(long)]
    pub max_hosting: Option<String>,
    #[arg(long, alias = "min-attended")]
    pub min_registered: Option<String>,
    #[arg(long, alias = "max-attended")]
    pub max_registered: Option<String>,
}

impl FilterArgs {
    fn into_form(self) -> FilterForm {
        FilterForm {
            company: self.company.unwrap_or_default(),
            job_title: self.job_title.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            total_hosting_events_min: self.min_hosting.unwrap_or_default(),
            total_hosting_events_max: self.max_hosting.unwrap_or_default(),
            total_registered_events_min: self.min_registered.unwrap_or_default(),
            total_registered_events_max: self.max_registered.unwrap_or_default(),
        }
    }
}

/// Query parameters shared by `list` and `send`.
#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Free-text search term
    #[arg(long)]
    pub search: Option<String>,

    /// Sort key, prefix with `-` for descending (e.g. `-date_joined`)
    #[arg(long, allow_hyphen_values = true)]
    pub ordering: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    #[arg(long)]
    pub page_size: Option<usize>,

    /// 1-based page to show
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Debug, Args)]
pub struct SendArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    #[arg(long)]
    pub subject: String,

    #[arg(long)]
    pub body: String,

    #[arg(long)]
    pub html_body: Option<String>,

    /// Slug of the event the email promotes
    #[arg(long)]
    pub event: Option<String>,
}

impl Cli {
    pub async fn execute(self, repo: &HttpRepository, page_size: PageSize) -> ServiceResult<()> {
        match self.command {
            Command::List(args) => {
                let table = list(repo, page_size, args).await?;
                print_table(&table.view(), self.json);
            }
            Command::Events => {
                let events = load_events(repo).await?;
                if self.json {
                    print_json(&event_options(&events));
                } else {
                    for event in &events {
                        println!("{}\t{}", event.slug, event.title);
                    }
                }
            }
            Command::Send(args) => {
                let mut composer = EmailComposer::new();
                composer.open();
                let result = send(repo, page_size, &mut composer, args).await;
                if let Some(status) = composer.status() {
                    print_status(status, self.json);
                }
                result?;
            }
        }
        Ok(())
    }
}

/// Applies the query arguments to a fresh table, the way the panel would.
///
/// Every change issues a new fetch ticket; only the last one is sent.
fn prepare_table(page_size: PageSize, args: QueryArgs) -> ServiceResult<ContactsTable> {
    let mut table = ContactsTable::new(page_size);
    *table.filter_form_mut() = args.filters.into_form();
    table.apply_filters()?;
    if let Some(ordering) = args.ordering.as_deref() {
        table.change_ordering(ordering)?;
    }
    if let Some(search) = args.search.as_deref() {
        table.change_search(search);
    }
    Ok(table)
}

async fn list(
    repo: &HttpRepository,
    page_size: PageSize,
    args: ListArgs,
) -> ServiceResult<ContactsTable> {
    let mut table = prepare_table(page_size, args.query)?;
    if let Some(size) = args.page_size {
        table.change_page_size(size)?;
    }
    table.load(repo).await;

    if args.page > 1 {
        let delta = isize::try_from(args.page - 1).unwrap_or(isize::MAX);
        match table.change_page(delta) {
            Some(ticket) => {
                table.fetch(repo, ticket).await;
            }
            None => log::warn!(
                "Page {} is out of range ({} pages)",
                args.page,
                table.total_pages()
            ),
        }
    }

    Ok(table)
}

async fn send(
    repo: &HttpRepository,
    page_size: PageSize,
    composer: &mut EmailComposer,
    args: SendArgs,
) -> ServiceResult<()> {
    let table = prepare_table(page_size, args.query)?;

    let form = composer.form_mut();
    form.subject = args.subject;
    form.body = args.body;
    form.html_body = args.html_body.unwrap_or_default();
    form.event_slug = args.event.unwrap_or_default();

    composer.send(repo, table.query()).await?;
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => log::error!("Failed to serialize output: {err}"),
    }
}

fn print_table(view: &TableView, json: bool) {
    if json {
        print_json(view);
        return;
    }

    match &view.body {
        TableBody::Loading => println!("Loading..."),
        TableBody::Error(text) => println!("{text}"),
        TableBody::Empty => println!("No contacts found."),
        TableBody::Populated(rows) => {
            println!(
                "Username\tEmail\tCompany\tJob title\tLocation\tHosting\tRegistered\tJoined"
            );
            for row in rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    row.username,
                    row.email,
                    row.company,
                    row.job_title,
                    row.location,
                    row.hosting_events,
                    row.registered_events,
                    row.date_joined
                );
            }
        }
    }
    println!("{}", view.pagination.label());
}

fn print_status(status: &StatusMessage, json: bool) {
    if json {
        print_json(status);
    } else {
        println!("{}", status.text);
    }
}
