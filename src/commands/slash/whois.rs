//! # Whois Command
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_whois_command()]
}

fn create_whois_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("whois")
        .description("Get information about a user")
        .create_option(|option| {
            option
                .name("user")
                .description("The user to get information about")
                .kind(CommandOptionType::User)
                .required(false)
        })
        .to_owned()
}
