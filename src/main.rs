use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use snakes::app::App;
use snakes::audio::NullSink;
use snakes::game::GameConfig;
use snakes::persistence::HighScoreStore;

#[derive(Parser)]
#[command(name = "snakes")]
#[command(version, about = "Terminal snake with persistent high scores")]
struct Cli {
    /// Playing field width in pixels
    #[arg(long, default_value = "900")]
    width: i32,

    /// Playing field height in pixels
    #[arg(long, default_value = "600")]
    height: i32,

    /// Game loop frequency in ticks per second
    #[arg(long, default_value = "60")]
    tick_rate: u64,

    /// Where the best score is kept between sessions
    #[arg(long, default_value = "high_score.txt")]
    high_score_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.width, cli.height);
    config.tick_rate = cli.tick_rate;

    let store = HighScoreStore::new(cli.high_score_file);

    let mut app = App::new(config, store, NullSink);
    app.run().await
}
