use clap::Parser;
use maze_escape::{
    app::App,
    config::{Cli, GameConfig},
    generators::{generate, get_rng},
};
use tracing_subscriber::EnvFilter;

fn main() -> maze_escape::Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::try_from(&cli)?;

    // The terminal is in raw mode while playing, so logs go to a file
    let file_appender = tracing_appender::rolling::never(&cli.log_dir, "maze-escape.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if cli.print {
        let maze = generate(config.rows, config.cols, &mut get_rng(config.seed))?;
        print!("{}", maze);
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = App::new(config).run(&mut stdout);
    App::restore_terminal(&mut stdout)?;
    if let Err(e) = &result {
        tracing::error!("[main] game exited with error: {}", e);
    }
    result
}
