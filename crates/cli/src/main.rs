// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use tracing::info;

use jurado::SystemClock;
use jurado_api::handlers;
use jurado_api::request_response::PerformDrawRequest;
use jurado_api::roster::import_roster;
use jurado_persistence::Persistence;

/// Administrative CLI for the jurado juror draw engine.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database (useful only for dry runs).
    #[arg(short, long)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reactivate jurors whose temporary suspension has expired.
    Sweep,
    /// List the jurors eligible for a reference year.
    Pool {
        /// The jury-duty reference year.
        #[arg(short, long)]
        year: u16,
        /// Print the pool as JSON instead of one juror per line.
        #[arg(long)]
        json: bool,
    },
    /// List draws, most recent first.
    Draws {
        /// Restrict the listing to one reference year.
        #[arg(short, long)]
        year: Option<u16>,
    },
    /// Randomly select jurors from the eligible pool into a draw.
    Draw {
        /// The draw to populate.
        draw_id: i64,
        /// The number of titulars to select.
        #[arg(short, long, default_value_t = 7)]
        titulars: usize,
        /// The number of suplentes to select.
        #[arg(short, long, default_value_t = 2)]
        suplentes: usize,
    },
    /// Regenerate and print a draw's ballots.
    Ballots {
        /// The draw whose ballots to regenerate.
        draw_id: i64,
    },
    /// Import a juror roster from a CSV file, all rows or none.
    Import {
        /// Path to the roster CSV (columns: cpf, name, birth_date, status).
        file: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let clock = SystemClock;

    match args.command {
        Command::Sweep => {
            let response = handlers::run_reactivation_sweep(&mut persistence, &clock)?;
            println!(
                "Reactivated {} jurors as of {}",
                response.reactivated, response.today
            );
        }
        Command::Pool { year, json } => {
            let pool = handlers::eligible_pool(&mut persistence, year)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pool)?);
            } else {
                for juror in &pool {
                    println!("{}  {}  {}", juror.juror_id, juror.cpf, juror.name);
                }
                println!("{} jurors eligible for {year}", pool.len());
            }
        }
        Command::Draws { year } => {
            let draws = match year {
                Some(year) => handlers::list_draws_for_year(&mut persistence, year)?,
                None => handlers::list_draws(&mut persistence)?,
            };
            for draw in &draws {
                println!(
                    "{}  {}  sitting {}  [{}]",
                    draw.draw_id, draw.draw_date, draw.sitting_date, draw.status
                );
            }
        }
        Command::Draw {
            draw_id,
            titulars,
            suplentes,
        } => {
            let mut rng = rand::rng();
            let response = handlers::perform_draw(
                &mut persistence,
                PerformDrawRequest {
                    draw_id,
                    num_titular: titulars,
                    num_suplente: suplentes,
                },
                &mut rng,
            )?;
            println!(
                "Drew {} titulars and {} suplentes from a pool of {}",
                response.titulars.len(),
                response.suplentes.len(),
                response.pool_size
            );
        }
        Command::Ballots { draw_id } => {
            let generated = handlers::generate_ballots(&mut persistence, draw_id)?;
            println!(
                "Generated {} ballots for draw {}",
                generated.ballot_count, generated.draw_id
            );
            for ballot in handlers::list_ballots(&mut persistence, draw_id)? {
                println!("  #{:03}  juror {}", ballot.sequence, ballot.juror_id);
            }
        }
        Command::Import { file } => {
            let csv_content = std::fs::read_to_string(&file)?;
            let result = import_roster(&mut persistence, &clock, &csv_content)?;
            println!("Imported {} jurors from {}", result.juror_ids.len(), file);
        }
    }

    Ok(())
}
