//! folio CLI - terminal portfolio viewer
//!
//! Usage: folio [COMMAND]
//!
//! Commands:
//!   view     Open the interactive viewer (default)
//!   print    Print one section or the whole page to stdout
//!   export   Export the portfolio content as JSON
//!   contact  Send a message through the contact form

use anyhow::Result;
use is_terminal::IsTerminal;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::api::{ContactForm, DataSource, StaticDataSource};
use folio::app::{App, Page};
use folio::cli::{Cli, Commands};
use folio::config::Config;
use folio::content;
use folio::error::FolioError;
use folio::ui::sections::{
    AboutView, ContactView, ExperienceView, FooterView, HeroView, ProjectsView, SkillsView,
};
use folio::ui::{SectionId, UiContext};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let ctx = UiContext::new(cli.color, cli.no_animation, &config);

    match cli.command {
        None | Some(Commands::View) => cmd_view(ctx),
        Some(Commands::Print { section, width }) => cmd_print(ctx, section, width),
        Some(Commands::Export { pretty }) => cmd_export(pretty),
        Some(Commands::Contact {
            name,
            email,
            subject,
            message,
        }) => cmd_contact(name, email, subject, message).await,
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_view(ctx: UiContext) -> Result<()> {
    let store = content::store();

    // Without a terminal there is nothing to interact with; dump the page.
    if !std::io::stdout().is_terminal() {
        tracing::info!("stdout is not a terminal, printing the page instead");
        return cmd_print(ctx, None, None);
    }

    let mut app = App::new(store, ctx);
    app.run(store)?;
    Ok(())
}

fn cmd_print(ctx: UiContext, section: Option<SectionId>, width: Option<u16>) -> Result<()> {
    let ctx = match width {
        Some(w) => ctx.with_width(w),
        None => ctx,
    };
    let store = content::store();

    let body = match section {
        None => {
            let page = Page::compose(store, &ctx);
            page.lines().join("\n")
        }
        Some(SectionId::Hero) => HeroView::new(&store.profile).render(&ctx),
        Some(SectionId::About) => AboutView::new(
            &store.summary,
            &store.statistics,
            &store.education,
            &store.certifications,
        )
        .render(&ctx),
        Some(SectionId::Experience) => ExperienceView::new(&store.experience).render(&ctx),
        Some(SectionId::Skills) => {
            SkillsView::new(&store.skills, &store.certifications, &store.core_competencies)
                .render(&ctx)
        }
        Some(SectionId::Projects) => ProjectsView::new(&store.projects).render(&ctx),
        Some(SectionId::Contact) => ContactView::new(&store.contact).render(&ctx),
        Some(SectionId::Footer) => FooterView::new(&store.profile, &store.footer).render(&ctx),
    };

    println!("{}", body);
    Ok(())
}

fn cmd_export(pretty: bool) -> Result<()> {
    let store = content::store();
    let json = if pretty {
        serde_json::to_string_pretty(store)?
    } else {
        serde_json::to_string(store)?
    };
    println!("{}", json);
    Ok(())
}

async fn cmd_contact(
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
) -> Result<()> {
    let name = require_field("name", name)?;
    let email = require_field("email", email)?;
    let message = require_field("message", message)?;

    let form = ContactForm {
        name,
        email,
        subject,
        message,
    };

    let source = StaticDataSource::new();
    let ack = source.submit_contact_form(form).await?;
    println!("{}", ack.message);
    Ok(())
}

/// Resolve a required contact field: use the flag value, prompt when stdin is
/// interactive, fail otherwise.
fn require_field(field: &'static str, value: Option<String>) -> Result<String, FolioError> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !std::io::stdin().is_terminal() {
        return Err(FolioError::MissingInput { field });
    }

    let prompt = format!("Your {}", field);
    let value: String = dialoguer::Input::new()
        .with_prompt(prompt)
        .interact_text()?;
    Ok(value)
}
