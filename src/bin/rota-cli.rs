use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "rota-cli")]
#[command(about = "Command-line client for the Rota Certa route service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the vehicle catalog
    Vehicles,
    /// List the restriction catalog
    Restrictions,
    /// Plan a route and print its alerts and driver link
    Create {
        #[arg(long)]
        origin: String,
        #[arg(long)]
        destination: String,
        /// Vehicle id from the catalog
        #[arg(long)]
        vehicle: String,
        #[arg(long)]
        plate: Option<String>,
        #[arg(long)]
        driver: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show a stored route
    Show { id: String },
    /// List stored routes, newest first
    List,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Vehicles => client.get(format!("{}/api/vehicles", base)).send().await?,
        Commands::Restrictions => {
            client.get(format!("{}/api/restrictions", base)).send().await?
        }
        Commands::Create {
            origin,
            destination,
            vehicle,
            plate,
            driver,
            notes,
        } => {
            let body = json!({
                "origin": origin,
                "destination": destination,
                "vehicleId": vehicle,
                "vehiclePlate": plate,
                "driverName": driver,
                "notes": notes,
            });
            client
                .post(format!("{}/api/routes", base))
                .json(&body)
                .send()
                .await?
        }
        Commands::Show { id } => client.get(format!("{}/api/routes/{}", base, id)).send().await?,
        Commands::List => client.get(format!("{}/api/routes", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: route service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
