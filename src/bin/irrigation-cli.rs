use clap::{Parser, Subcommand};
use serde::Serialize;

use irrigation_gateway::client::{
    device_image_file_url, ActivityFilter, ApiClient, JobFilter, Page, ReadingFilter,
};
use irrigation_gateway::models::Status;

#[derive(Parser)]
#[command(name = "irrigation-cli")]
#[command(about = "Query the irrigation API through the gateway", long_about = None)]
struct Cli {
    /// Gateway origin serving /api/v1.
    #[arg(short, long, env = "IRRIGATION_GATEWAY_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List devices
    Devices,
    /// List zones
    Zones {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List plants
    Plants,
    /// List sensors
    Sensors {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List sensor readings
    Readings {
        #[arg(long)]
        sensor_id: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List irrigation jobs
    Jobs {
        /// queued, running, succeeded, failed or cancelled
        #[arg(long)]
        status: Option<Status>,
        #[arg(long)]
        zone_id: Option<String>,
    },
    /// List activity events
    Activity {
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// Show logs reported by a device
    DeviceLogs { device_id: String },
    /// List images captured by a device
    DeviceImages { device_id: String },
    /// Print the URL serving one image's bytes
    ImageUrl { device_id: String, image_id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.url)?;

    let result = match cli.command {
        Commands::Devices => print_json(&client.list_devices().await),
        Commands::Zones { limit } => {
            let page = Page { skip: None, limit };
            print_json(&client.list_zones(Some(&page)).await)
        }
        Commands::Plants => print_json(&client.list_plants().await),
        Commands::Sensors { limit } => {
            let page = Page { skip: None, limit };
            print_json(&client.list_sensors(Some(&page)).await)
        }
        Commands::Readings { sensor_id, limit } => {
            let filter = ReadingFilter {
                sensor_id,
                page: Page { skip: None, limit },
            };
            print_json(&client.list_sensor_readings(Some(&filter)).await)
        }
        Commands::Jobs { status, zone_id } => {
            let filter = JobFilter {
                status,
                zone_id,
                ..Default::default()
            };
            print_json(&client.list_irrigation_jobs(Some(&filter)).await)
        }
        Commands::Activity { limit } => {
            let filter = ActivityFilter {
                page: Page::limit(limit),
                ..Default::default()
            };
            print_json(&client.list_activity_events(Some(&filter)).await)
        }
        Commands::DeviceLogs { device_id } => {
            print_json(&client.list_device_logs(&device_id).await)
        }
        Commands::DeviceImages { device_id } => {
            print_json(&client.list_device_images(&device_id).await)
        }
        Commands::ImageUrl {
            device_id,
            image_id,
        } => {
            println!("{}", client.image_file_url(&device_image_file_url(&device_id, &image_id)));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

fn print_json<T: Serialize>(
    result: &Result<T, irrigation_gateway::ApiError>,
) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        }
        Err(e) => Err(e.to_string().into()),
    }
}
