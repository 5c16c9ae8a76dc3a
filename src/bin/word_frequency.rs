//! src/bin/word_frequency.rs
use std::process::ExitCode;
use wordstat::configuration::get_configuration;
use wordstat::report::render_bar_chart;
use wordstat::startup::run_word_frequency;
use wordstat::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<ExitCode, anyhow::Error> {
    let configuration = get_configuration().expect("Failed to read configuration.");
    // Returning the exit code lets the guard drop normally, which flushes
    // buffered records to the file sink before the process ends.
    let _guard = init_tracing(
        &configuration.log.directory,
        &configuration.log.file_name_prefix,
    )?;

    match run_word_frequency(&configuration).await? {
        Some(report) if report.is_empty() => {
            println!("The source text contained no words.");
        }
        Some(report) => {
            println!("Top {} most frequent words:", report.len());
            let mut stdout = std::io::stdout().lock();
            render_bar_chart(&report, &mut stdout)?;
        }
        None => {
            eprintln!("Error: could not retrieve the source text.");
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}
