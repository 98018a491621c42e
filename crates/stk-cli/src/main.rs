//! `stk` binary entry point

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let matches = stk_cli::build_cli().get_matches();
    stk_cli::init_tracing(matches.get_count("verbose"));

    let mut stdout = std::io::stdout();
    match stk_cli::run(&matches, &mut stdout).await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
