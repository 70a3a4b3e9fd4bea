use cadence::{cron, humanize, Frequency, Recurrence, TimeOfDay};
use clap::Parser;
use std::process;

#[derive(Parser)]
#[command(
    name = "cadence",
    about = "Helper schedule encoding and formatting",
    version
)]
struct Cli {
    /// Cron-like schedule lines (e.g., "0 9 * * 3")
    schedules: Vec<String>,

    /// Validate lines strictly instead of describing them
    #[arg(long)]
    check: bool,

    /// Output the decoded recurrences as JSON
    #[arg(long)]
    parse: bool,

    /// Encode a recurrence instead: day, monday..sunday, or month
    #[arg(long, value_name = "FREQUENCY")]
    encode: Option<Frequency>,

    /// Time of day for --encode (HH:MM)
    #[arg(long, value_name = "TIME", default_value = "08:00")]
    at: TimeOfDay,
}

fn main() {
    let cli = Cli::parse();

    if let Some(frequency) = cli.encode {
        let rec = Recurrence::new(frequency, cli.at);
        println!("{}", rec.to_cron());
        process::exit(0);
    }

    if cli.schedules.is_empty() {
        eprintln!("error: no schedule provided");
        process::exit(2);
    }

    if cli.check {
        for line in &cli.schedules {
            if let Err(e) = Recurrence::from_cron(line) {
                eprintln!("error: {line}: {e}");
                process::exit(1);
            }
        }
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.parse {
        let decoded = cron::decode_all(&cli.schedules);
        let entries: Vec<serde_json::Value> = decoded
            .iter()
            .map(|rec| {
                serde_json::json!({
                    "frequency": rec.frequency.as_str(),
                    "hour": rec.time.hour,
                    "minute": rec.time.minute,
                })
            })
            .collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => {
                println!("{json}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    }

    println!("{}", humanize::describe_all(&cli.schedules));
}
