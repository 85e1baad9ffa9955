//! Updates an existing responsive search ad in place: new headlines and
//! descriptions plus fresh final URLs, all without fetching the ad first.
//! The ad's resource name is built locally from the customer and ad ids,
//! and the field mask covers exactly the fields populated here.

use adgrid_core::{resource_names, AdGridConfig, AdGridError, AdGridResult};
use adgrid_resources::{Ad, AdTextAsset, ResponsiveSearchAdInfo, ServedAssetFieldType};
use adgrid_services::{AdGridClient, Operation, Transport};
use clap::Parser;
use tracing::info;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "update-responsive-search-ad")]
#[command(about = "Updates the text assets and final URLs of a responsive search ad")]
#[command(version)]
struct Cli {
    /// The AdGrid customer ID.
    #[arg(short = 'c', long, env = "ADGRID_CUSTOMER_ID")]
    customer_id: String,

    /// The ID of the ad to update.
    #[arg(short = 'i', long)]
    ad_id: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "update_responsive_search_ad=info,adgrid_services=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match AdGridConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            std::process::exit(1);
        }
    };
    let client = AdGridClient::from_config(&config);

    if let Err(err) = run(&client, &cli.customer_id, cli.ad_id).await {
        report_error(&err);
        std::process::exit(1);
    }
}

/// Build the updated ad payload. The uuid suffix keeps the pinned
/// headline unique across repeated runs.
fn updated_ad(customer_id: &str, ad_id: u64) -> Ad {
    Ad {
        resource_name: Some(resource_names::ad(customer_id, ad_id)),
        final_urls: vec!["https://www.example.com".to_string()],
        final_mobile_urls: vec!["https://www.example.com/mobile".to_string()],
        responsive_search_ad: Some(ResponsiveSearchAdInfo {
            headlines: vec![
                AdTextAsset::pinned(
                    format!("Cruise to Pluto #{}", Uuid::new_v4().simple()),
                    ServedAssetFieldType::Headline1,
                ),
                AdTextAsset::new("Tickets on sale now"),
                AdTextAsset::new("Buy your tickets now"),
            ],
            descriptions: vec![
                AdTextAsset::new("Best space cruise ever."),
                AdTextAsset::new("The most wonderful space experience you will ever have."),
            ],
            path1: None,
            path2: None,
        }),
    }
}

async fn run<T: Transport>(
    client: &AdGridClient<T>,
    customer_id: &str,
    ad_id: u64,
) -> AdGridResult<()> {
    info!(customer_id, ad_id, "updating responsive search ad");

    let ad = updated_ad(customer_id, ad_id);
    let mask = ad.update_mask();
    let operation = Operation::update(ad, mask);

    let response = client
        .ad_service()
        .mutate_ads(customer_id, vec![operation])
        .await?;
    let resource_name = response
        .first_resource_name()
        .ok_or(AdGridError::EmptyMutateResponse)?;

    println!("Ad with resource name \"{resource_name}\" was updated.");
    Ok(())
}

fn report_error(err: &AdGridError) {
    match err {
        AdGridError::Api(failure) => {
            eprintln!(
                "Request with ID \"{}\" failed with status \"{}\" and includes the following errors:",
                failure.request_id.as_deref().unwrap_or("<unknown>"),
                failure.status
            );
            for error in &failure.errors {
                eprintln!("\tError with message \"{}\".", error.message);
                for field in &error.field_path {
                    eprintln!("\t\tOn field: {field}");
                }
            }
        }
        other => eprintln!("{other}"),
    }
}
