use std::io::Write;

use colored::Colorize;
use env_logger::Env;
use log::Level;

pub fn init() {
    let env = Env::default().default_filter_or("info");

    // a second init is a no-op
    _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let level = match record.level() {
                Level::Error => "ERROR".red().bold(),
                Level::Warn => "WARN ".yellow().bold(),
                Level::Info => "INFO ".green(),
                Level::Debug => "DEBUG".blue(),
                Level::Trace => "TRACE".dimmed(),
            };
            writeln!(
                buf,
                "{} {} {} {}",
                chrono::Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
                level,
                record.target().dimmed(),
                record.args()
            )
        })
        .try_init();
}
