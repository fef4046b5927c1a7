use clap::Subcommand;

use crate::common;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Print the rolling counters
    Show {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = common::open_store()?;
    match action {
        StatsAction::Show { json } => {
            let stats = &store.state().stats;
            if json {
                println!("{}", serde_json::to_string_pretty(stats)?);
            } else {
                println!("today       {} pomodoros", stats.daily_pomodoros);
                println!("this week   {} pomodoros", stats.weekly_pomodoros);
                println!("focus time  {} min", stats.total_focus_time);
                println!("streak      {} days", stats.current_streak);
                println!("last update {}", stats.last_update.format("%Y-%m-%d %H:%M UTC"));
            }
        }
    }
    Ok(())
}
