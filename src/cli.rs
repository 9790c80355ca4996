use clap::{Parser, Subcommand, ValueEnum};

use crate::ui::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Terminal portfolio for Lay Been Tan.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// When to use colors in output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Disable scroll animation
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive viewer (the default)
    View,

    /// Print one section, or the whole page, to stdout
    Print {
        /// Section to print; omit for the full page
        #[arg(value_enum)]
        section: Option<SectionId>,

        /// Layout width in columns
        #[arg(long)]
        width: Option<u16>,
    },

    /// Export the portfolio content as JSON
    Export {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Send a message through the contact form
    Contact {
        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Your email address
        #[arg(long)]
        email: Option<String>,

        /// Optional subject line
        #[arg(long)]
        subject: Option<String>,

        /// Message body
        #[arg(long)]
        message: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_without_subcommand() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.color.is_none());
    }

    #[test]
    fn cli_parses_print_with_section_and_width() {
        let cli = Cli::try_parse_from(["folio", "print", "skills", "--width", "100"]).unwrap();
        match cli.command {
            Some(Commands::Print { section, width }) => {
                assert_eq!(section, Some(SectionId::Skills));
                assert_eq!(width, Some(100));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "print", "--color", "never"]).unwrap();
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }

    #[test]
    fn cli_parses_contact_fields() {
        let cli = Cli::try_parse_from([
            "folio", "contact", "--name", "Ada", "--email", "ada@example.com", "--message",
            "Hello",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Contact {
                name,
                email,
                subject,
                message,
            }) => {
                assert_eq!(name.as_deref(), Some("Ada"));
                assert_eq!(email.as_deref(), Some("ada@example.com"));
                assert_eq!(subject, None);
                assert_eq!(message.as_deref(), Some("Hello"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
