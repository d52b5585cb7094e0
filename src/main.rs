use setenv::cli::{commands, output, print_help, Action, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse_args();

    // SETENV_LOG wins over --verbose.
    let filter = EnvFilter::try_from_env("SETENV_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("setenv=debug")
        } else {
            EnvFilter::new("setenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    let action = cli.action();
    tracing::debug!(?action, "dispatching");

    let result = match action {
        Action::Help => print_help(),
        Action::Clean => commands::clean::execute(&cli),
        Action::View => commands::view::execute(&cli),
        Action::Ignore => commands::ignore::execute(&cli),
        Action::Update(ref request) => commands::update::execute(&cli, request),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
