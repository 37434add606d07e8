// Landing page sections
// Developed by The TG Deploy Team (c)2025

mod bot_commands;
mod copy_mark;
mod footer;
mod get_started;
mod hero;
mod integrations;
mod matrix;
mod nav;
mod terminal;

pub use bot_commands::BotCommands;
pub use copy_mark::CopyMark;
pub use footer::Footer;
pub use get_started::GetStarted;
pub use hero::Hero;
pub use integrations::Integrations;
pub use matrix::MatrixBackground;
pub use nav::Nav;
pub use terminal::Terminal;
