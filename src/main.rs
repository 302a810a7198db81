use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use standup_order::utils::{logger, validation::Validate};
use standup_order::{
    CliConfig, Command, Geocoder, LocalStorage, NominatimGeocoder, OrderError, OrderSession,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting standup-order CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".".to_string());
    let geocoder = NominatimGeocoder::new(config.clone());

    let roster = match storage.load_roster(&config.roster_path).await {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("❌ Could not load roster from {}: {}", config.roster_path, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    let mut session = OrderSession::with_roster(geocoder, roster);

    match run(&config, &mut session).await {
        Ok(()) => {
            storage
                .save_roster(&config.roster_path, session.roster())
                .await?;
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run<G: Geocoder>(
    config: &CliConfig,
    session: &mut OrderSession<G>,
) -> standup_order::Result<()> {
    match &config.command {
        Command::Add { name, location } => {
            match session.add_member(name, location).await {
                Ok(coordinate) => {
                    println!(
                        "✅ Added {} from {} ({:.4}, {:.4})",
                        name, location, coordinate.latitude, coordinate.longitude
                    );
                }
                // Resolution failures keep the member on the roster,
                // unresolved; tell the user instead of failing the run.
                Err(
                    e @ (OrderError::GeocodeTimeout { .. } | OrderError::GeocodeNotFound { .. }),
                ) => {
                    println!("⚠️ Added {} from {} without coordinates", name, location);
                    println!("💡 {}", e);
                }
                Err(e) => return Err(e),
            }
            Ok(())
        }
        Command::Remove { name } => {
            session.remove_member(name);
            println!("✅ Removed {}", name);
            Ok(())
        }
        Command::List => {
            if session.roster().is_empty() {
                println!("No team members added yet.");
            } else {
                println!("Current team members:");
                for member in session.roster().iter() {
                    match &member.coordinate {
                        Some(c) => println!(
                            "- {} ({}) at ({:.4}, {:.4})",
                            member.name, member.location, c.latitude, c.longitude
                        ),
                        None => println!("- {} ({}) [unresolved]", member.name, member.location),
                    }
                }
            }
            Ok(())
        }
        Command::Order { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };

            let (direction, order) = session.generate_order(&mut rng)?;

            println!("Selected flow: {}", direction);
            println!("Team update order:");
            for entry in &order.entries {
                println!("{}. {} ({})", entry.rank, entry.member.name, entry.member.location);
            }
            if !order.skipped.is_empty() {
                println!("⚠️ Skipped (no coordinates): {}", order.skipped.join(", "));
            }
            Ok(())
        }
        Command::Reset => {
            session.reset();
            println!("✅ Team list reset.");
            Ok(())
        }
    }
}
